//! Board-agnostic core of the bonepin component layer
//!
//! This crate contains what sits between the pin HAL and the concrete
//! component drivers:
//!
//! - Board configuration (sysfs root, settle delay, analog overlay name)
//! - Component traits and the component error type

#![deny(unsafe_code)]

pub mod config;
pub mod traits;
