//! LED on a digital output
//!
//! ```ignore
//! let led = Led::from_header_pin(&board, Header::P9, 11, "Running LED")?;
//! led.turn_on()?;
//! ```

use bonepin_core::traits::{Component, ComponentError, ComponentOut};
use bonepin_hal::{Direction, GpioPin, PinValue};
use bonepin_hal_beaglebone::{AnyPin, Board, DigitalPin, Header};
use tracing::debug;

use crate::pin;

/// An LED driven by a digital output pin
#[derive(Debug, Clone)]
pub struct Led {
    name: String,
    pin: DigitalPin,
}

impl Led {
    /// Wrap an already configured digital pin
    pub fn new(pin: Option<AnyPin>, name: impl Into<String>) -> Result<Self, ComponentError> {
        let name = name.into();
        let pin = pin::digital(pin, &name)?;
        debug!(component = %name, pin = pin.id(), "led ready");
        Ok(Self { name, pin })
    }

    /// Configure the pin at `header`/`pin` as an output and wrap it
    pub fn from_header_pin(
        board: &Board,
        header: Header,
        pin: u8,
        name: impl Into<String>,
    ) -> Result<Self, ComponentError> {
        let pin = DigitalPin::from_header_pin(board, header, pin, Direction::Out)?;
        Self::new(Some(pin.into()), name)
    }

    pub fn turn_on(&self) -> Result<(), ComponentError> {
        self.set_raw_value(1)
    }

    pub fn turn_off(&self) -> Result<(), ComponentError> {
        self.set_raw_value(0)
    }
}

impl Component for Led {
    fn component_name(&self) -> &str {
        &self.name
    }
}

impl ComponentOut for Led {
    /// `1` lights the LED, `0` turns it off
    fn set_raw_value(&self, value: i32) -> Result<(), ComponentError> {
        ComponentError::check_range(&self.name, value, 0, 1)?;
        self.pin.write(PinValue::from(value == 1))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{gpio_value, memory_board};

    #[test]
    fn test_on_off() {
        let (board, fs) = memory_board();
        let led = Led::from_header_pin(&board, Header::P9, 11, "Running LED").unwrap();

        assert_eq!(led.component_name(), "Running LED");

        led.turn_on().unwrap();
        assert_eq!(fs.contents(gpio_value(30)).as_deref(), Some("1"));

        led.turn_off().unwrap();
        assert_eq!(fs.contents(gpio_value(30)).as_deref(), Some("0"));
    }

    #[test]
    fn test_out_of_range_does_not_write() {
        let (board, fs) = memory_board();
        let led = Led::from_header_pin(&board, Header::P9, 11, "Running LED").unwrap();
        fs.clear_log();

        for value in [-1, 2, 100, i32::MIN, i32::MAX] {
            assert!(matches!(
                led.set_raw_value(value),
                Err(ComponentError::OutOfRange { min: 0, max: 1, .. })
            ));
        }
        assert!(fs.writes().is_empty());
    }

    #[test]
    fn test_construction_checks() {
        let (board, _fs) = memory_board();

        assert!(matches!(
            Led::new(None, "Running LED"),
            Err(ComponentError::GpioCanNotBeNil(_))
        ));

        let result = Led::from_header_pin(&board, Header::P9, 1, "Running LED");
        assert!(matches!(result, Err(ComponentError::Pin(_))));
    }

    #[test]
    fn test_write_failure_propagates() {
        let (board, fs) = memory_board();
        let led = Led::from_header_pin(&board, Header::P9, 11, "Running LED").unwrap();
        fs.fail_writes(gpio_value(30));

        assert!(matches!(led.turn_on(), Err(ComponentError::Pin(_))));
    }
}
