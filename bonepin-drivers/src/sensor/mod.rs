//! Sensor drivers
//!
//! - HC-SR501: PIR motion sensor on a digital input
//! - LV-MaxSonar-EZ2: ultrasonic range finder on an analog input
//! - TMP36: temperature sensor on an analog input
//!
//! The analog sensors share the board's 12-bit ADC; their conversions
//! divide by [`ADC_STEPS`].

pub mod hc_sr501;
pub mod lv_maxsonar_ez2;
pub mod tmp36;

pub use hc_sr501::MotionSensor;
pub use lv_maxsonar_ez2::RangeFinder;
pub use tmp36::Tmp36;

/// Number of ADC steps used when scaling a raw sample
pub const ADC_STEPS: f64 = 4096.0;
