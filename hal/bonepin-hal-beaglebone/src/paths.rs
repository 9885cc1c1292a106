//! Resource path resolver
//!
//! Computes the sysfs path of every pin resource. All paths hang off a
//! configurable root so a fake tree can stand in for `/sys`.
//!
//! | Class   | Resource  | Path below root                                         |
//! |---------|-----------|---------------------------------------------------------|
//! | Digital | export    | `class/gpio/export`                                     |
//! | Digital | direction | `class/gpio/gpio<N>/direction`                          |
//! | Digital | value     | `class/gpio/gpio<N>/value`                              |
//! | PWM     | pinmux    | `devices/platform/ocp/ocp:<H>_<P>_pinmux/state`         |
//! | PWM     | export    | `devices/platform/ocp/<controller><chip>/export`        |
//! | PWM     | channel   | `devices/platform/ocp/<controller><chip>/pwm<ch>/<attr>` |
//! | Analog  | slots     | `devices/platform/bone_capemgr/slots`                   |
//! | Analog  | value     | `bus/iio/devices/iio:device0/in_voltage<N>_raw`         |

use std::path::{Path, PathBuf};

use crate::pins::{BoardPin, PwmController};

/// PWM channel attribute files
pub const PWM_PERIOD_FILE: &str = "period";
pub const PWM_DUTY_CYCLE_FILE: &str = "duty_cycle";
pub const PWM_ENABLE_FILE: &str = "enable";

/// Path resolver rooted at the sysfs mount point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsPaths {
    root: PathBuf,
}

impl SysfsPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn gpio_dir(&self) -> PathBuf {
        self.root.join("class/gpio")
    }

    /// Digital export resource
    pub fn gpio_export(&self) -> PathBuf {
        self.gpio_dir().join("export")
    }

    /// Digital direction resource for kernel gpio number `number`
    pub fn gpio_direction(&self, number: &str) -> PathBuf {
        self.gpio_dir().join(format!("gpio{number}")).join("direction")
    }

    /// Digital value resource for kernel gpio number `number`
    pub fn gpio_value(&self, number: &str) -> PathBuf {
        self.gpio_dir().join(format!("gpio{number}")).join("value")
    }

    fn ocp_dir(&self) -> PathBuf {
        self.root.join("devices/platform/ocp")
    }

    /// Pinmux state resource for a header position
    pub fn pwm_pinmux_state(&self, location: BoardPin) -> PathBuf {
        self.ocp_dir()
            .join(format!("ocp:{}_{}_pinmux", location.header, location.pin))
            .join("state")
    }

    /// Directory holding the dynamically numbered `pwmchipN` entry
    pub fn pwm_controller_dir(&self, controller: &PwmController) -> PathBuf {
        self.ocp_dir().join(controller.dir)
    }

    /// Export resource of a discovered chip directory
    pub fn pwm_export(chip_dir: &Path) -> PathBuf {
        chip_dir.join("export")
    }

    /// Channel directory inside a discovered chip directory
    pub fn pwm_channel_dir(chip_dir: &Path, channel: u8) -> PathBuf {
        chip_dir.join(format!("pwm{channel}"))
    }

    /// Cape manager slots resource
    pub fn analog_slots(&self) -> PathBuf {
        self.root.join("devices/platform/bone_capemgr/slots")
    }

    /// Raw sample resource for ADC channel `channel`
    pub fn analog_value(&self, channel: &str) -> PathBuf {
        self.root
            .join("bus/iio/devices/iio:device0")
            .join(format!("in_voltage{channel}_raw"))
    }
}

impl Default for SysfsPaths {
    fn default() -> Self {
        Self::new(bonepin_core::config::DEFAULT_SYSFS_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::{pwm_controller, Header};

    #[test]
    fn test_digital_paths() {
        let paths = SysfsPaths::default();
        assert_eq!(paths.gpio_export(), Path::new("/sys/class/gpio/export"));
        assert_eq!(
            paths.gpio_direction("30"),
            Path::new("/sys/class/gpio/gpio30/direction")
        );
        assert_eq!(paths.gpio_value("30"), Path::new("/sys/class/gpio/gpio30/value"));
    }

    #[test]
    fn test_pwm_paths() {
        let paths = SysfsPaths::default();
        assert_eq!(
            paths.pwm_pinmux_state(BoardPin::new(Header::P8, 13)),
            Path::new("/sys/devices/platform/ocp/ocp:P8_13_pinmux/state")
        );

        let controller = pwm_controller("PWM2B").unwrap();
        let chip = paths.pwm_controller_dir(controller).join("pwmchip4");
        assert_eq!(
            chip,
            Path::new("/sys/devices/platform/ocp/48304000.epwmss/48304200.ehrpwm/pwm/pwmchip4")
        );
        assert_eq!(SysfsPaths::pwm_export(&chip), chip.join("export"));
        assert_eq!(
            SysfsPaths::pwm_channel_dir(&chip, 1).join(PWM_PERIOD_FILE),
            chip.join("pwm1/period")
        );
    }

    #[test]
    fn test_analog_paths() {
        let paths = SysfsPaths::new("/tmp/sys");
        assert_eq!(
            paths.analog_slots(),
            Path::new("/tmp/sys/devices/platform/bone_capemgr/slots")
        );
        assert_eq!(
            paths.analog_value("1"),
            Path::new("/tmp/sys/bus/iio/devices/iio:device0/in_voltage1_raw")
        );
    }
}
