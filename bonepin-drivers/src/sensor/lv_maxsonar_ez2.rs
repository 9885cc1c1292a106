//! LV-MaxSonar-EZ2 ultrasonic range finder
//!
//! The analog output scales at Vcc/512 per inch.

use bonepin_core::traits::{Component, ComponentError, ComponentIn};
use bonepin_hal::GpioPin;
use bonepin_hal_beaglebone::{AnalogPin, AnyPin, Board, Header};
use tracing::debug;

use super::ADC_STEPS;
use crate::pin;

/// Scale applied to the normalized sample to get millivolts
const MILLI_VOLT_SCALE: f64 = 1.8;

/// Millivolts per inch of range
const MILLI_VOLTS_PER_INCH: f64 = 0.002148;

/// LV-MaxSonar-EZ2 on an analog input pin
#[derive(Debug, Clone)]
pub struct RangeFinder {
    name: String,
    pin: AnalogPin,
}

impl RangeFinder {
    pub fn new(pin: Option<AnyPin>, name: impl Into<String>) -> Result<Self, ComponentError> {
        let name = name.into();
        let pin = pin::analog(pin, &name)?;
        debug!(component = %name, pin = pin.id(), "range finder ready");
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

    /// Sensor output, `raw / 4096 * 1.8`
    pub fn milli_volts(&self) -> Result<f64, ComponentError> {
        let raw = self.raw_value()?;
        Ok(f64::from(raw) / ADC_STEPS * MILLI_VOLT_SCALE)
    }

    /// Distance to the nearest target in inches
    pub fn range_inches(&self) -> Result<f64, ComponentError> {
        Ok(self.milli_volts()? / MILLI_VOLTS_PER_INCH)
    }
}

impl Component for RangeFinder {
    fn component_name(&self) -> &str {
        &self.name
    }
}

impl ComponentIn for RangeFinder {
    fn raw_value(&self) -> Result<i32, ComponentError> {
        Ok(self.pin.read()?.into())
    }
}
