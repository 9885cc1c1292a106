//! Pin error types

use std::io;
use std::path::{Path, PathBuf};

use crate::gpio::PinKind;

/// Result type for pin operations
pub type Result<T> = core::result::Result<T, PinError>;

/// Errors raised by the pin layer
#[derive(Debug, thiserror::Error)]
pub enum PinError {
    /// Symbolic id or header/pin pair is not in the registry for this class
    #[error("unknown {class} pin `{id}`")]
    UnknownPin { class: PinKind, id: String },

    /// Export, direction, period or subsystem-enable write did not complete
    #[error("failed to initialize {pin}: {step}")]
    InitFailed {
        pin: String,
        step: &'static str,
        #[source]
        source: io::Error,
    },

    /// Open, read or write failed on an already configured resource
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Value resource content was not numeric
    #[error("non-numeric content {content:?} in {}", path.display())]
    Parse { path: PathBuf, content: String },

    /// Caller supplied a value outside the documented domain
    #[error("value {value} outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

impl PinError {
    /// Adapter for `map_err` that tags an I/O error with its path
    pub fn io(path: impl AsRef<Path>) -> impl FnOnce(io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        move |source| PinError::Io { path, source }
    }

    /// Adapter for `map_err` that turns an I/O error into an init failure
    pub fn init_failed(pin: &str, step: &'static str) -> impl FnOnce(io::Error) -> Self {
        let pin = pin.to_owned();
        move |source| PinError::InitFailed { pin, step, source }
    }

    /// Check a value against an inclusive range
    pub fn check_range(value: i64, min: i64, max: i64) -> Result<()> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(PinError::OutOfRange { value, min, max })
        }
    }
}

impl embedded_hal::digital::Error for PinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl embedded_hal::pwm::Error for PinError {
    fn kind(&self) -> embedded_hal::pwm::ErrorKind {
        embedded_hal::pwm::ErrorKind::Other
    }
}
