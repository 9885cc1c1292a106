//! PWM output pins
//!
//! Every channel runs with a fixed period of [`PWM_PERIOD`] nanoseconds, so
//! the duty cycle is a value in `0..=PWM_PERIOD`. Duty and enable are
//! independent writes; turning a channel off before changing its duty is up
//! to the caller.

use std::io;
use std::path::{Path, PathBuf};

use bonepin_hal::{GpioPin, PinError, PinKind, Result};
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::paths::{SysfsPaths, PWM_DUTY_CYCLE_FILE, PWM_ENABLE_FILE, PWM_PERIOD_FILE};
use crate::pins::{pwm_controller, resolve_by_header_pin, resolve_by_symbol, BoardPin, Header};

/// Period written to every channel, in nanoseconds
pub const PWM_PERIOD: u32 = 10_000;

/// Pinmux state that routes a header pin to its PWM controller
const PINMUX_PWM: &str = "pwm";

/// A PWM channel on the expansion headers
#[derive(Debug, Clone)]
pub struct PwmPin {
    board: Board,
    id: &'static str,
    location: BoardPin,
    channel: u8,
    chip_dir: PathBuf,
}

impl PwmPin {
    /// Configure the channel with symbolic id `id` (e.g. `PWM2B`)
    pub fn from_id(board: &Board, id: &str) -> Result<Self> {
        let (id, location) = resolve_by_symbol(PinKind::Pwm, id)?;
        Self::configure(board, id, location)
    }

    /// Configure the channel at `header`/`pin`
    pub fn from_header_pin(board: &Board, header: Header, pin: u8) -> Result<Self> {
        let id = resolve_by_header_pin(PinKind::Pwm, header, pin)?;
        Self::configure(board, id, BoardPin::new(header, pin))
    }

    fn configure(board: &Board, id: &'static str, location: BoardPin) -> Result<Self> {
        let controller = pwm_controller(id).ok_or_else(|| PinError::UnknownPin {
            class: PinKind::Pwm,
            id: id.to_owned(),
        })?;
        let controller_dir = board.paths().pwm_controller_dir(controller);
        let chip = discover_chip(board, &controller_dir)
            .map_err(PinError::init_failed(id, "controller"))
            .inspect_err(|e| warn!(id, error = %e, "pwm controller not found"))?;

        let pin = Self {
            board: board.clone(),
            id,
            location,
            channel: controller.channel,
            chip_dir: controller_dir.join(chip),
        };

        board.init_once(&format!("pwm:{id}"), || {
            if pin.is_pin_active() {
                debug!(id, "pinmux already set to pwm");
                Ok(())
            } else {
                pin.init_pin()
            }
        })?;
        debug!(id, %location, chip = %pin.chip_dir.display(), "pwm pin ready");
        Ok(pin)
    }

    /// Where the pin sits on the headers
    pub fn location(&self) -> BoardPin {
        self.location
    }

    /// Channel index inside the controller
    pub fn channel(&self) -> u8 {
        self.channel
    }

    fn channel_file(&self, name: &str) -> PathBuf {
        SysfsPaths::pwm_channel_dir(&self.chip_dir, self.channel).join(name)
    }

    fn pinmux_state(&self) -> PathBuf {
        self.board.paths().pwm_pinmux_state(self.location)
    }

    /// Set the duty cycle, `0..=PWM_PERIOD`
    ///
    /// Out of range values are rejected before anything is written.
    pub fn set_duty_cycle(&self, duty: u32) -> Result<()> {
        PinError::check_range(duty.into(), 0, PWM_PERIOD.into())?;
        let path = self.channel_file(PWM_DUTY_CYCLE_FILE);
        self.board
            .write(&path, &duty.to_string())
            .map_err(PinError::io(&path))
    }

    /// Start or stop the output
    pub fn set_enable(&self, enable: bool) -> Result<()> {
        let path = self.channel_file(PWM_ENABLE_FILE);
        self.board
            .write(&path, if enable { "1" } else { "0" })
            .map_err(PinError::io(&path))
    }
}

/// First non-hidden entry under the controller directory (`pwmchipN`)
fn discover_chip(board: &Board, controller_dir: &Path) -> io::Result<String> {
    board
        .list_dir(controller_dir)?
        .into_iter()
        .find(|name| !name.starts_with('.'))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no pwmchip entry"))
}

impl GpioPin for PwmPin {
    fn kind(&self) -> PinKind {
        PinKind::Pwm
    }

    fn id(&self) -> &str {
        self.id
    }

    /// Route the pin to PWM, export the channel and set its period
    fn init_pin(&self) -> Result<()> {
        let state = self.pinmux_state();
        if let Err(e) = self.board.write(&state, PINMUX_PWM) {
            // Not every kernel exposes the pinmux helper
            debug!(id = self.id, error = %e, "pinmux write skipped");
        }

        let export = SysfsPaths::pwm_export(&self.chip_dir);
        self.board
            .write(&export, &self.channel.to_string())
            .map_err(PinError::init_failed(self.id, "export"))
            .inspect_err(|e| warn!(id = self.id, error = %e, "pwm export failed"))?;

        let period = self.channel_file(PWM_PERIOD_FILE);
        self.board
            .write(&period, &PWM_PERIOD.to_string())
            .map_err(PinError::init_failed(self.id, "period"))
            .inspect_err(|e| warn!(id = self.id, error = %e, "pwm period failed"))?;

        self.board.settle();
        info!(id = self.id, "pwm channel exported");
        Ok(())
    }

    /// The pinmux state reads `pwm`
    fn is_pin_active(&self) -> bool {
        self.board
            .read(&self.pinmux_state())
            .map(|state| state.trim() == PINMUX_PWM)
            .unwrap_or(false)
    }
}

impl embedded_hal::pwm::ErrorType for PwmPin {
    type Error = PinError;
}

impl embedded_hal::pwm::SetDutyCycle for PwmPin {
    fn max_duty_cycle(&self) -> u16 {
        PWM_PERIOD as u16
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<()> {
        PwmPin::set_duty_cycle(self, duty.into())
    }
}
