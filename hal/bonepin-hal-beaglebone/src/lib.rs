//! BeagleBone Black HAL for bonepin
//!
//! This crate implements the pin layer on top of the kernel's sysfs
//! interface:
//!
//! - Pin registry for the P8/P9 expansion headers
//! - Resource path resolution below a configurable sysfs root
//! - [`Board`] context with guarded one-time initialization
//! - Digital, PWM and analog pins, plus the [`AnyPin`] handle
//! - `embedded-hal` trait implementations for digital and PWM pins
//!
//! # Example
//!
//! ```no_run
//! use bonepin_core::config::BoardConfig;
//! use bonepin_hal::{Direction, PinValue};
//! use bonepin_hal_beaglebone::{Board, DigitalPin};
//!
//! let board = Board::sysfs(&BoardConfig::default());
//! let led = DigitalPin::from_id(&board, "gpio30", Direction::Out)?;
//! led.write(PinValue::High)?;
//! # Ok::<(), bonepin_hal::PinError>(())
//! ```

#![deny(unsafe_code)]

pub mod analog;
pub mod any_pin;
pub mod board;
pub mod digital;
pub mod paths;
pub mod pins;
pub mod pwm;
pub mod sysfs;

pub use analog::AnalogPin;
pub use any_pin::AnyPin;
pub use board::Board;
pub use digital::DigitalPin;
pub use pins::{BoardPin, Header};
pub use pwm::{PwmPin, PWM_PERIOD};
pub use sysfs::SysfsFs;
