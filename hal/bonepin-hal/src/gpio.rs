//! GPIO pin abstractions
//!
//! Value types shared by the digital, PWM and analog pins, and the
//! capability trait every concrete pin implements.

use core::fmt;

use crate::Result;

/// Logic level of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinValue {
    /// Logic 0, written as `0`
    Low,
    /// Logic 1, written as `1`
    High,
}

impl PinValue {
    /// The literal the kernel uses for this level
    pub const fn as_str(self) -> &'static str {
        match self {
            PinValue::Low => "0",
            PinValue::High => "1",
        }
    }

    /// Parse a value resource
    ///
    /// Only the exact `1` literal is high; any other content reads as low.
    pub fn from_content(content: &str) -> Self {
        if content == PinValue::High.as_str() {
            PinValue::High
        } else {
            PinValue::Low
        }
    }
}

impl From<bool> for PinValue {
    fn from(value: bool) -> Self {
        if value {
            PinValue::High
        } else {
            PinValue::Low
        }
    }
}

impl From<PinValue> for bool {
    fn from(value: PinValue) -> Self {
        matches!(value, PinValue::High)
    }
}

/// Direction a digital pin is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Input, written as `in`
    In,
    /// Output, written as `out`
    Out,
}

impl Direction {
    /// The literal the kernel expects in the `direction` resource
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

/// The three pin classes the board exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinKind {
    /// Digital GPIO
    Digital,
    /// PWM output channel
    Pwm,
    /// Analog (ADC) input
    Analog,
}

impl fmt::Display for PinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PinKind::Digital => "digital",
            PinKind::Pwm => "PWM",
            PinKind::Analog => "analog",
        })
    }
}

/// Capability shared by every concrete pin
///
/// Construction of a pin already runs [`GpioPin::init_pin`] when needed, so
/// callers normally only use this to re-check or re-run the configuration.
pub trait GpioPin {
    /// Which pin class this is
    fn kind(&self) -> PinKind;

    /// Symbolic id of the pin (e.g. `gpio30`, `PWM2B`, `AIN1`)
    fn id(&self) -> &str;

    /// Run the export/enable sequence for this pin
    fn init_pin(&self) -> Result<()>;

    /// Check whether the pin's resources are already configured
    fn is_pin_active(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_literals() {
        assert_eq!(PinValue::High.as_str(), "1");
        assert_eq!(PinValue::Low.as_str(), "0");
        assert_eq!(Direction::In.as_str(), "in");
        assert_eq!(Direction::Out.as_str(), "out");
    }

    #[test]
    fn test_permissive_parse() {
        assert_eq!(PinValue::from_content("1"), PinValue::High);
        assert_eq!(PinValue::from_content("0"), PinValue::Low);
        assert_eq!(PinValue::from_content(""), PinValue::Low);
        assert_eq!(PinValue::from_content("11"), PinValue::Low);
    }

    #[test]
    fn test_bool_conversions() {
        assert_eq!(PinValue::from(true), PinValue::High);
        assert!(!bool::from(PinValue::Low));
    }
}
