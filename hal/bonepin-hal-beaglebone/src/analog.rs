//! Analog input pins
//!
//! The ADC is off until the analog overlay is loaded through the cape
//! manager. That is a board-global step: the first analog pin built on a
//! [`Board`] whose value file is not yet readable does it, and later pins
//! find it recorded under [`ANALOG_SUBSYSTEM_KEY`].
//!
//! Samples are 12-bit, `0..=4095` over a 1.8 V range.

use std::path::PathBuf;

use bonepin_hal::fs::numeric_only;
use bonepin_hal::{GpioPin, PinError, PinKind, Result};
use tracing::{debug, info, warn};

use crate::board::{Board, ANALOG_SUBSYSTEM_KEY};
use crate::pins::{resolve_by_header_pin, resolve_by_symbol, BoardPin, Header};

/// Largest raw sample the ADC produces
pub const ADC_MAX: u16 = 4095;

/// An ADC input on the P9 header
#[derive(Debug, Clone)]
pub struct AnalogPin {
    board: Board,
    id: &'static str,
    location: BoardPin,
}

impl AnalogPin {
    /// Configure the input with symbolic id `id` (e.g. `AIN1`)
    pub fn from_id(board: &Board, id: &str) -> Result<Self> {
        let (id, location) = resolve_by_symbol(PinKind::Analog, id)?;
        Self::configure(board, id, location)
    }

    /// Configure the input at `header`/`pin`
    pub fn from_header_pin(board: &Board, header: Header, pin: u8) -> Result<Self> {
        let id = resolve_by_header_pin(PinKind::Analog, header, pin)?;
        Self::configure(board, id, BoardPin::new(header, pin))
    }

    fn configure(board: &Board, id: &'static str, location: BoardPin) -> Result<Self> {
        let pin = Self {
            board: board.clone(),
            id,
            location,
        };
        if !pin.is_pin_active() {
            pin.init_pin()?;
        }
        debug!(id, %location, "analog pin ready");
        Ok(pin)
    }

    /// Where the pin sits on the headers
    pub fn location(&self) -> BoardPin {
        self.location
    }

    /// ADC channel number, the part of the id after `AIN`
    fn channel(&self) -> &'static str {
        self.id.trim_start_matches("AIN")
    }

    fn value_path(&self) -> PathBuf {
        self.board.paths().analog_value(self.channel())
    }

    /// Take one raw sample
    pub fn read(&self) -> Result<u16> {
        let path = self.value_path();
        let content = self.board.read(&path).map_err(PinError::io(&path))?;
        numeric_only(&content)
            .parse()
            .map_err(|_| PinError::Parse { path, content })
    }
}

impl GpioPin for AnalogPin {
    fn kind(&self) -> PinKind {
        PinKind::Analog
    }

    fn id(&self) -> &str {
        self.id
    }

    /// Load the analog overlay unless this board already did
    fn init_pin(&self) -> Result<()> {
        self.board.init_once(ANALOG_SUBSYSTEM_KEY, || {
            let slots = self.board.paths().analog_slots();
            let overlay = self.board.analog_overlay();
            self.board
                .write(&slots, overlay)
                .map_err(PinError::init_failed(self.id, "slots"))
                .inspect_err(|e| warn!(id = self.id, error = %e, "analog enable failed"))?;
            self.board.settle();
            info!(overlay, "analog subsystem enabled");
            Ok(())
        })
    }

    /// The value resource is readable
    fn is_pin_active(&self) -> bool {
        self.board.read(&self.value_path()).is_ok()
    }
}
