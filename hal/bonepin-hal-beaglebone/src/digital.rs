//! Digital GPIO pins
//!
//! A pin is exported and given its direction while it is constructed, and
//! after that only its `value` resource is touched. There is no unexport:
//! a pin stays configured for the rest of the process.

use std::path::PathBuf;

use bonepin_hal::{Direction, GpioPin, PinError, PinKind, PinValue, Result};
use tracing::{debug, warn};

use crate::board::Board;
use crate::pins::{resolve_by_header_pin, resolve_by_symbol, BoardPin, Header};

/// A digital GPIO pin on the expansion headers
#[derive(Debug, Clone)]
pub struct DigitalPin {
    board: Board,
    id: &'static str,
    location: BoardPin,
    direction: Direction,
}

impl DigitalPin {
    /// Configure the pin with symbolic id `id` (e.g. `gpio30`)
    pub fn from_id(board: &Board, id: &str, direction: Direction) -> Result<Self> {
        let (id, location) = resolve_by_symbol(PinKind::Digital, id)?;
        Self::configure(board, id, location, direction)
    }

    /// Configure the pin at `header`/`pin`
    pub fn from_header_pin(
        board: &Board,
        header: Header,
        pin: u8,
        direction: Direction,
    ) -> Result<Self> {
        let id = resolve_by_header_pin(PinKind::Digital, header, pin)?;
        Self::configure(board, id, BoardPin::new(header, pin), direction)
    }

    fn configure(
        board: &Board,
        id: &'static str,
        location: BoardPin,
        direction: Direction,
    ) -> Result<Self> {
        let pin = Self {
            board: board.clone(),
            id,
            location,
            direction,
        };
        pin.init_pin()?;
        debug!(id, %location, direction = direction.as_str(), "digital pin ready");
        Ok(pin)
    }

    /// Where the pin sits on the headers
    pub fn location(&self) -> BoardPin {
        self.location
    }

    /// Configured direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Kernel gpio number, the part of the id after `gpio`
    fn number(&self) -> &'static str {
        self.id.trim_start_matches("gpio")
    }

    fn value_path(&self) -> PathBuf {
        self.board.paths().gpio_value(self.number())
    }

    /// Read the current level
    ///
    /// Content other than exactly `1` (after dropping non-digits) reads as
    /// [`PinValue::Low`].
    pub fn read(&self) -> Result<PinValue> {
        let path = self.value_path();
        let content = self.board.read(&path).map_err(PinError::io(&path))?;
        Ok(PinValue::from_content(&bonepin_hal::fs::numeric_only(&content)))
    }

    /// Drive the pin to `value`
    pub fn write(&self, value: PinValue) -> Result<()> {
        let path = self.value_path();
        self.board
            .write(&path, value.as_str())
            .map_err(PinError::io(&path))
    }
}

impl GpioPin for DigitalPin {
    fn kind(&self) -> PinKind {
        PinKind::Digital
    }

    fn id(&self) -> &str {
        self.id
    }

    /// Export the gpio (once per board) and write its direction
    fn init_pin(&self) -> Result<()> {
        let number = self.number();
        let export = self.board.paths().gpio_export();
        self.board
            .init_once(&format!("gpio:{number}"), || {
                self.board
                    .write(&export, number)
                    .map_err(PinError::init_failed(self.id, "export"))
            })
            .inspect_err(|e| warn!(id = self.id, error = %e, "gpio export failed"))?;

        let direction = self.board.paths().gpio_direction(number);
        self.board
            .write(&direction, self.direction.as_str())
            .map_err(PinError::init_failed(self.id, "direction"))
            .inspect_err(|e| warn!(id = self.id, error = %e, "gpio direction failed"))
    }

    /// The value resource is readable
    fn is_pin_active(&self) -> bool {
        self.read().is_ok()
    }
}

impl embedded_hal::digital::ErrorType for DigitalPin {
    type Error = PinError;
}

impl embedded_hal::digital::InputPin for DigitalPin {
    fn is_high(&mut self) -> Result<bool> {
        Ok(self.read()? == PinValue::High)
    }

    fn is_low(&mut self) -> Result<bool> {
        Ok(self.read()? == PinValue::Low)
    }
}

impl embedded_hal::digital::OutputPin for DigitalPin {
    fn set_low(&mut self) -> Result<()> {
        self.write(PinValue::Low)
    }

    fn set_high(&mut self) -> Result<()> {
        self.write(PinValue::High)
    }
}

impl embedded_hal::digital::StatefulOutputPin for DigitalPin {
    fn is_set_high(&mut self) -> Result<bool> {
        Ok(self.read()? == PinValue::High)
    }

    fn is_set_low(&mut self) -> Result<bool> {
        Ok(self.read()? == PinValue::Low)
    }
}
