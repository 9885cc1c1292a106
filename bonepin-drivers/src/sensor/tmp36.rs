//! TMP36 analog temperature sensor
//!
//! Output is 750 mV at 25 °C with a 10 mV/°C slope, i.e. 500 mV at 0 °C.

use bonepin_core::traits::{Component, ComponentError, ComponentIn};
use bonepin_hal::GpioPin;
use bonepin_hal_beaglebone::{AnalogPin, AnyPin, Board, Header};
use tracing::debug;

use super::ADC_STEPS;
use crate::pin;

/// ADC reference in millivolts
const REFERENCE_MILLI_VOLTS: f64 = 1800.0;

/// Output at 0 °C
const OFFSET_MILLI_VOLTS: f64 = 500.0;

const MILLI_VOLTS_PER_DEGREE: f64 = 10.0;

/// TMP36 on an analog input pin
#[derive(Debug, Clone)]
pub struct Tmp36 {
    name: String,
    pin: AnalogPin,
}

impl Tmp36 {
    pub fn new(pin: Option<AnyPin>, name: impl Into<String>) -> Result<Self, ComponentError> {
        let name = name.into();
        let pin = pin::analog(pin, &name)?;
        debug!(component = %name, pin = pin.id(), "tmp36 ready");
        Ok(Self { name, pin })
    }

    pub fn from_header_pin(
        board: &Board,
        header: Header,
        pin: u8,
        name: impl Into<String>,
    ) -> Result<Self, ComponentError> {
        let pin = AnalogPin::from_header_pin(board, header, pin)?;
        Self::new(Some(pin.into()), name)
    }

    /// Sensor output voltage in millivolts
    pub fn milli_volts(&self) -> Result<f64, ComponentError> {
        let raw = self.raw_value()?;
        Ok(f64::from(raw) / ADC_STEPS * REFERENCE_MILLI_VOLTS)
    }

    pub fn celsius(&self) -> Result<f64, ComponentError> {
        Ok((self.milli_volts()? - OFFSET_MILLI_VOLTS) / MILLI_VOLTS_PER_DEGREE)
    }

    pub fn fahrenheit(&self) -> Result<f64, ComponentError> {
        Ok(self.celsius()? * 9.0 / 5.0 + 32.0)
    }
}

impl Component for Tmp36 {
    fn component_name(&self) -> &str {
        &self.name
    }
}

impl ComponentIn for Tmp36 {
    fn raw_value(&self) -> Result<i32, ComponentError> {
        Ok(self.pin.read()?.into())
    }
}
