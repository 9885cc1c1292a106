//! HC-SR501 PIR motion sensor
//!
//! The module drives its output high while it sees motion, so it reads
//! like a button.

use bonepin_core::traits::{Component, ComponentError, ComponentIn};
use bonepin_hal::{Direction, GpioPin, PinValue};
use bonepin_hal_beaglebone::{AnyPin, Board, DigitalPin, Header};
use tracing::debug;

use crate::pin;

/// HC-SR501 on a digital input pin
#[derive(Debug, Clone)]
pub struct MotionSensor {
    name: String,
    pin: DigitalPin,
}

impl MotionSensor {
    pub fn new(pin: Option<AnyPin>, name: impl Into<String>) -> Result<Self, ComponentError> {
        let name = name.into();
        let pin = pin::digital(pin, &name)?;
        debug!(component = %name, pin = pin.id(), "motion sensor ready");
        Ok(Self { name, pin })
    }

    pub fn from_header_pin(
        board: &Board,
        header: Header,
        pin: u8,
        name: impl Into<String>,
    ) -> Result<Self, ComponentError> {
        let pin = DigitalPin::from_header_pin(board, header, pin, Direction::In)?;
        Self::new(Some(pin.into()), name)
    }

    pub fn is_motion_detected(&self) -> Result<bool, ComponentError> {
        Ok(self.raw_value()? == 1)
    }
}

impl Component for MotionSensor {
    fn component_name(&self) -> &str {
        &self.name
    }
}

impl ComponentIn for MotionSensor {
    fn raw_value(&self) -> Result<i32, ComponentError> {
        Ok(match self.pin.read()? {
            PinValue::High => 1,
            PinValue::Low => 0,
        })
    }
}
