//! Push button on a digital input

use bonepin_core::traits::{Component, ComponentError, ComponentIn};
use bonepin_hal::{Direction, GpioPin, PinValue};
use bonepin_hal_beaglebone::{AnyPin, Board, DigitalPin, Header};
use tracing::debug;

use crate::pin;

/// A momentary push button read through a digital input pin
#[derive(Debug, Clone)]
pub struct PushButton {
    name: String,
    pin: DigitalPin,
}

impl PushButton {
    /// Wrap an already configured digital pin
    pub fn new(pin: Option<AnyPin>, name: impl Into<String>) -> Result<Self, ComponentError> {
        let name = name.into();
        let pin = pin::digital(pin, &name)?;
        debug!(component = %name, pin = pin.id(), "push button ready");
        Ok(Self { name, pin })
    }

    /// Configure the pin at `header`/`pin` as an input and wrap it
    pub fn from_header_pin(
        board: &Board,
        header: Header,
        pin: u8,
        name: impl Into<String>,
    ) -> Result<Self, ComponentError> {
        let pin = DigitalPin::from_header_pin(board, header, pin, Direction::In)?;
        Self::new(Some(pin.into()), name)
    }

    /// Whether the button currently reads high
    pub fn is_pressed(&self) -> Result<bool, ComponentError> {
        Ok(self.raw_value()? == 1)
    }
}

impl Component for PushButton {
    fn component_name(&self) -> &str {
        &self.name
    }
}

impl ComponentIn for PushButton {
    /// `1` while pressed, `0` otherwise
    fn raw_value(&self) -> Result<i32, ComponentError> {
        Ok(match self.pin.read()? {
            PinValue::High => 1,
            PinValue::Low => 0,
        })
    }
}
