//! Component traits
//!
//! A component is a named wrapper around one or more pins. It either
//! produces a raw reading ([`ComponentIn`]) or accepts a raw setting
//! ([`ComponentOut`]), never both.

use bonepin_hal::{PinError, PinKind};

/// Errors that can occur with component construction and operation
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    /// A required pin handle was absent
    #[error("{0}: pin can not be nil")]
    GpioCanNotBeNil(String),

    /// A pin handle of the wrong class was supplied
    #[error("{component}: expecting a {expected} pin")]
    InvalidGpioType { component: String, expected: PinKind },

    /// The operation needs an optional pin the component was built without
    #[error("{component}: no {pin} pin configured")]
    MissingPin {
        component: String,
        pin: &'static str,
    },

    /// Raw value outside the component's documented domain
    #[error("{component}: value {value} outside {min}..={max}")]
    OutOfRange {
        component: String,
        value: i32,
        min: i32,
        max: i32,
    },

    /// Underlying pin failure
    #[error(transparent)]
    Pin(#[from] PinError),
}

impl ComponentError {
    /// Check a raw value against an inclusive range for `component`
    pub fn check_range(component: &str, value: i32, min: i32, max: i32) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(ComponentError::OutOfRange {
                component: component.to_owned(),
                value,
                min,
                max,
            })
        }
    }
}

/// Base trait for all components
pub trait Component {
    /// Human-readable name, e.g. "Running LED" or "Left Motor"
    fn component_name(&self) -> &str;
}

/// A component that produces a raw reading
pub trait ComponentIn: Component {
    /// Read the unscaled value from the underlying pin
    fn raw_value(&self) -> Result<i32, ComponentError>;
}

/// A component that accepts a raw setting
pub trait ComponentOut: Component {
    /// Write an unscaled value to the underlying pin(s)
    ///
    /// Values outside the component's domain are rejected before any
    /// hardware is touched.
    fn set_raw_value(&self, value: i32) -> Result<(), ComponentError>;
}
