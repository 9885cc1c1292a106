//! Generic motor with PWM speed control
//!
//! Speed is a percentage. The channel period is fixed at
//! [`PWM_PERIOD`](bonepin_hal_beaglebone::PWM_PERIOD), so one percent is a
//! duty cycle step of 100. Every speed or direction change disables the
//! channel first and re-enables it afterwards, so the motor never sees a
//! half-written setting.
//!
//! ```ignore
//! let motor = GenericMotor::from_header_pin(&board, Header::P8, 13, "Right Track")?;
//! motor.set_speed(80)?;
//! ```

use bonepin_core::traits::{Component, ComponentError, ComponentOut};
use bonepin_hal::{Direction, GpioPin, PinValue};
use bonepin_hal_beaglebone::{AnyPin, Board, DigitalPin, Header, PwmPin, PWM_PERIOD};
use tracing::debug;

use crate::pin;

/// Highest speed percentage
pub const MAX_SPEED: i32 = 100;

/// Duty cycle per speed percent
const DUTY_PER_PERCENT: u32 = PWM_PERIOD / MAX_SPEED as u32;

/// A motor driven by a PWM channel and an optional direction pin
#[derive(Debug, Clone)]
pub struct GenericMotor {
    name: String,
    pwm: PwmPin,
    direction: Option<DigitalPin>,
}

impl GenericMotor {
    /// Wrap an already configured PWM channel
    pub fn new(pwm: Option<AnyPin>, name: impl Into<String>) -> Result<Self, ComponentError> {
        let name = name.into();
        let pwm = pin::pwm(pwm, &name)?;
        debug!(component = %name, pin = pwm.id(), "motor ready");
        Ok(Self {
            name,
            pwm,
            direction: None,
        })
    }

    /// Wrap a PWM channel and a digital direction output
    pub fn with_direction(
        pwm: Option<AnyPin>,
        direction: Option<AnyPin>,
        name: impl Into<String>,
    ) -> Result<Self, ComponentError> {
        let name = name.into();
        let pwm = pin::pwm(pwm, &name)?;
        let direction = pin::digital(direction, &name)?;
        debug!(
            component = %name,
            pin = pwm.id(),
            direction = direction.id(),
            "motor ready"
        );
        Ok(Self {
            name,
            pwm,
            direction: Some(direction),
        })
    }

    /// Configure the PWM channel at `header`/`pin` and wrap it
    pub fn from_header_pin(
        board: &Board,
        header: Header,
        pin: u8,
        name: impl Into<String>,
    ) -> Result<Self, ComponentError> {
        let pwm = PwmPin::from_header_pin(board, header, pin)?;
        Self::new(Some(pwm.into()), name)
    }

    /// Configure a PWM channel for speed and a digital output for direction
    pub fn from_header_pins(
        board: &Board,
        speed: (Header, u8),
        direction: (Header, u8),
        name: impl Into<String>,
    ) -> Result<Self, ComponentError> {
        let pwm = PwmPin::from_header_pin(board, speed.0, speed.1)?;
        let direction =
            DigitalPin::from_header_pin(board, direction.0, direction.1, Direction::Out)?;
        Self::with_direction(Some(pwm.into()), Some(direction.into()), name)
    }

    /// Set the speed in percent, `0..=100`
    pub fn set_speed(&self, value: i32) -> Result<(), ComponentError> {
        self.set_raw_value(value)
    }

    /// Start or stop the PWM output
    pub fn enable_motor(&self, enable: bool) -> Result<(), ComponentError> {
        self.pwm.set_enable(enable)?;
        Ok(())
    }

    /// Drive the direction pin, `0` or `1`
    pub fn set_direction(&self, value: i32) -> Result<(), ComponentError> {
        let direction = self
            .direction
            .as_ref()
            .ok_or_else(|| ComponentError::MissingPin {
                component: self.name.clone(),
                pin: "direction",
            })?;
        ComponentError::check_range(&self.name, value, 0, 1)?;

        self.enable_motor(false)?;
        let written = direction.write(PinValue::from(value == 1));
        // Re-enable even when the direction write failed
        let enabled = self.enable_motor(true);
        written?;
        enabled
    }

    pub fn has_direction(&self) -> bool {
        self.direction.is_some()
    }
}

impl Component for GenericMotor {
    fn component_name(&self) -> &str {
        &self.name
    }
}

impl ComponentOut for GenericMotor {
    /// Speed in percent
    fn set_raw_value(&self, value: i32) -> Result<(), ComponentError> {
        ComponentError::check_range(&self.name, value, 0, MAX_SPEED)?;

        self.enable_motor(false)?;
        self.pwm.set_duty_cycle(value as u32 * DUTY_PER_PERCENT)?;
        self.enable_motor(true)
    }
}
