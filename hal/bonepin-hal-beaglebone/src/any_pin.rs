//! Pin handle of any kind
//!
//! Components accept an [`AnyPin`] and check the variant they need, so a
//! board description can hand pins around without knowing which component
//! will consume them.

use bonepin_hal::{GpioPin, PinKind, Result};

use crate::analog::AnalogPin;
use crate::digital::DigitalPin;
use crate::pwm::PwmPin;

/// A configured pin of one of the three kinds
#[derive(Debug, Clone)]
pub enum AnyPin {
    Digital(DigitalPin),
    Pwm(PwmPin),
    Analog(AnalogPin),
}

impl AnyPin {
    fn as_gpio(&self) -> &dyn GpioPin {
        match self {
            AnyPin::Digital(pin) => pin,
            AnyPin::Pwm(pin) => pin,
            AnyPin::Analog(pin) => pin,
        }
    }

    pub fn into_digital(self) -> Option<DigitalPin> {
        match self {
            AnyPin::Digital(pin) => Some(pin),
            _ => None,
        }
    }

    pub fn into_pwm(self) -> Option<PwmPin> {
        match self {
            AnyPin::Pwm(pin) => Some(pin),
            _ => None,
        }
    }

    pub fn into_analog(self) -> Option<AnalogPin> {
        match self {
            AnyPin::Analog(pin) => Some(pin),
            _ => None,
        }
    }
}

impl GpioPin for AnyPin {
    fn kind(&self) -> PinKind {
        self.as_gpio().kind()
    }

    fn id(&self) -> &str {
        self.as_gpio().id()
    }

    fn init_pin(&self) -> Result<()> {
        self.as_gpio().init_pin()
    }

    fn is_pin_active(&self) -> bool {
        self.as_gpio().is_pin_active()
    }
}

impl From<DigitalPin> for AnyPin {
    fn from(pin: DigitalPin) -> Self {
        AnyPin::Digital(pin)
    }
}

impl From<PwmPin> for AnyPin {
    fn from(pin: PwmPin) -> Self {
        AnyPin::Pwm(pin)
    }
}

impl From<AnalogPin> for AnyPin {
    fn from(pin: AnalogPin) -> Self {
        AnyPin::Analog(pin)
    }
}
