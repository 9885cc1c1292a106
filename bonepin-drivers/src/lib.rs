//! Component drivers
//!
//! This crate provides concrete implementations of the component traits
//! defined in bonepin-core, each wrapping one or more BeagleBone pins:
//!
//! - Accessories (LED, push button)
//! - Motors (generic PWM motor, H-bridge)
//! - Sensors (HC-SR501 motion, LV-MaxSonar-EZ2 range, TMP36 temperature)
//!
//! Every component is built either from already configured pins handed in
//! as [`bonepin_hal_beaglebone::AnyPin`], or from header/pin positions on a
//! [`bonepin_hal_beaglebone::Board`].

#![deny(unsafe_code)]

pub mod accessory;
pub mod motor;
mod pin;
pub mod sensor;

pub use accessory::{Led, PushButton};
pub use motor::{GenericMotor, HBridge};
pub use sensor::{MotionSensor, RangeFinder, Tmp36};

#[cfg(test)]
pub(crate) mod testing {
    use bonepin_core::config::BoardConfig;
    use bonepin_hal::MemoryFs;
    use bonepin_hal_beaglebone::Board;

    /// Chip directory of the `PWM2A`/`PWM2B` controller
    pub(crate) const PWM2_CHIP: &str =
        "/sys/devices/platform/ocp/48304000.epwmss/48304200.ehrpwm/pwm/pwmchip4";

    /// Raw sample resource of `AIN1`
    pub(crate) const AIN1_RAW: &str = "/sys/bus/iio/devices/iio:device0/in_voltage1_raw";

    /// A board over an in-memory tree that already has the PWM2 chip
    pub(crate) fn memory_board() -> (Board, MemoryFs) {
        let fs = MemoryFs::new().with_file(format!("{PWM2_CHIP}/export"), "");
        let config = BoardConfig {
            settle_delay_ms: 0,
            ..BoardConfig::default()
        };
        (Board::new(&config, fs.clone()), fs)
    }

    pub(crate) fn gpio_value(number: u16) -> String {
        format!("/sys/class/gpio/gpio{number}/value")
    }
}
