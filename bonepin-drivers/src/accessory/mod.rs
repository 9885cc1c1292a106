//! Accessory drivers
//!
//! Single-pin digital parts:
//!
//! - LED: digital output
//! - Push button: digital input

pub mod button;
pub mod led;

pub use button::PushButton;
pub use led::Led;
