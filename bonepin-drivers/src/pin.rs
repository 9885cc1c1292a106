//! Narrowing of [`AnyPin`] handles to the concrete kind a component needs

use bonepin_core::traits::ComponentError;
use bonepin_hal::PinKind;
use bonepin_hal_beaglebone::{AnalogPin, AnyPin, DigitalPin, PwmPin};

fn present(pin: Option<AnyPin>, component: &str) -> Result<AnyPin, ComponentError> {
    pin.ok_or_else(|| ComponentError::GpioCanNotBeNil(component.to_owned()))
}

fn invalid(component: &str, expected: PinKind) -> ComponentError {
    ComponentError::InvalidGpioType {
        component: component.to_owned(),
        expected,
    }
}

pub(crate) fn digital(pin: Option<AnyPin>, component: &str) -> Result<DigitalPin, ComponentError> {
    present(pin, component)?
        .into_digital()
        .ok_or_else(|| invalid(component, PinKind::Digital))
}

pub(crate) fn pwm(pin: Option<AnyPin>, component: &str) -> Result<PwmPin, ComponentError> {
    present(pin, component)?
        .into_pwm()
        .ok_or_else(|| invalid(component, PinKind::Pwm))
}

pub(crate) fn analog(pin: Option<AnyPin>, component: &str) -> Result<AnalogPin, ComponentError> {
    present(pin, component)?
        .into_analog()
        .ok_or_else(|| invalid(component, PinKind::Analog))
}
