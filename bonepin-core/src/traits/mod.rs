//! Component traits
//!
//! These traits define the interface between application code and the
//! concrete component drivers.

pub mod component;

pub use component::{Component, ComponentError, ComponentIn, ComponentOut};
