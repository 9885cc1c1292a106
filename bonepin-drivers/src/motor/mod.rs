//! Motor driver implementations
//!
//! - Generic motor: speed on a PWM channel, optional direction pin
//! - H-bridge: forward/reverse/enable digital outputs

pub mod generic;
pub mod hbridge;

pub use generic::GenericMotor;
pub use hbridge::HBridge;
