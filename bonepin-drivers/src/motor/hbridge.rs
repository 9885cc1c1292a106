//! H-bridge motor driver
//!
//! Three digital outputs: forward and reverse select the direction, enable
//! switches the bridge. Boards that hard-wire the direction inputs leave
//! out forward and reverse together; such a bridge can only be enabled and
//! disabled.

use bonepin_core::traits::{Component, ComponentError, ComponentOut};
use bonepin_hal::{Direction, GpioPin, PinValue};
use bonepin_hal_beaglebone::{AnyPin, Board, DigitalPin, Header};
use tracing::debug;

use crate::pin;

/// Forward and reverse direction outputs
#[derive(Debug, Clone)]
struct DirectionPair {
    forward: DigitalPin,
    reverse: DigitalPin,
}

/// A motor behind an H-bridge
#[derive(Debug, Clone)]
pub struct HBridge {
    name: String,
    direction: Option<DirectionPair>,
    enable: DigitalPin,
}

impl HBridge {
    /// Wrap already configured digital outputs
    ///
    /// `forward` and `reverse` must be given together or not at all.
    pub fn new(
        forward: Option<AnyPin>,
        reverse: Option<AnyPin>,
        enable: Option<AnyPin>,
        name: impl Into<String>,
    ) -> Result<Self, ComponentError> {
        let name = name.into();
        let enable = pin::digital(enable, &name)?;
        let direction = match (forward, reverse) {
            (None, None) => None,
            (forward, reverse) => Some(DirectionPair {
                forward: pin::digital(forward, &name)?,
                reverse: pin::digital(reverse, &name)?,
            }),
        };
        debug!(
            component = %name,
            enable = enable.id(),
            has_direction = direction.is_some(),
            "h-bridge ready"
        );
        Ok(Self {
            name,
            direction,
            enable,
        })
    }

    /// Configure all three outputs from header/pin positions
    pub fn from_header_pins(
        board: &Board,
        forward: (Header, u8),
        reverse: (Header, u8),
        enable: (Header, u8),
        name: impl Into<String>,
    ) -> Result<Self, ComponentError> {
        let output = |(header, pin): (Header, u8)| -> Result<AnyPin, ComponentError> {
            Ok(DigitalPin::from_header_pin(board, header, pin, Direction::Out)?.into())
        };
        Self::new(
            Some(output(forward)?),
            Some(output(reverse)?),
            Some(output(enable)?),
            name,
        )
    }

    fn pair(&self) -> Result<&DirectionPair, ComponentError> {
        self.direction
            .as_ref()
            .ok_or_else(|| ComponentError::MissingPin {
                component: self.name.clone(),
                pin: "forward/reverse",
            })
    }

    fn drive(&self, forward: PinValue, reverse: PinValue) -> Result<(), ComponentError> {
        let pair = self.pair()?;
        // Write both inputs even when the first write fails
        let forward = pair.forward.write(forward);
        let reverse = pair.reverse.write(reverse);
        forward?;
        reverse?;
        Ok(())
    }

    pub fn go_forward(&self) -> Result<(), ComponentError> {
        self.drive(PinValue::High, PinValue::Low)
    }

    pub fn go_reverse(&self) -> Result<(), ComponentError> {
        self.drive(PinValue::Low, PinValue::High)
    }

    /// Drive both direction inputs low
    pub fn stop(&self) -> Result<(), ComponentError> {
        self.drive(PinValue::Low, PinValue::Low)
    }

    /// Switch the bridge on or off
    pub fn enable_motor(&self, enable: bool) -> Result<(), ComponentError> {
        self.enable.write(PinValue::from(enable))?;
        Ok(())
    }

    pub fn has_direction(&self) -> bool {
        self.direction.is_some()
    }
}

impl Component for HBridge {
    fn component_name(&self) -> &str {
        &self.name
    }
}

impl ComponentOut for HBridge {
    /// `1` enables the bridge, `0` disables it
    fn set_raw_value(&self, value: i32) -> Result<(), ComponentError> {
        ComponentError::check_range(&self.name, value, 0, 1)?;
        self.enable_motor(value == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{gpio_value, memory_board};

    // P9_11 = gpio30, P9_12 = gpio60, P9_13 = gpio31
    fn bridge(board: &Board) -> HBridge {
        HBridge::from_header_pins(
            board,
            (Header::P9, 11),
            (Header::P9, 12),
            (Header::P9, 13),
            "Right Track",
        )
        .unwrap()
    }

    fn enable_only(board: &Board) -> HBridge {
        let enable = DigitalPin::from_id(board, "gpio31", Direction::Out).unwrap();
        HBridge::new(None, None, Some(enable.into()), "Left Track").unwrap()
    }

    #[test]
    fn test_directions() {
        let (board, fs) = memory_board();
        let motor = bridge(&board);

        motor.go_forward().unwrap();
        assert_eq!(fs.contents(gpio_value(30)).as_deref(), Some("1"));
        assert_eq!(fs.contents(gpio_value(60)).as_deref(), Some("0"));

        motor.go_reverse().unwrap();
        assert_eq!(fs.contents(gpio_value(30)).as_deref(), Some("0"));
        assert_eq!(fs.contents(gpio_value(60)).as_deref(), Some("1"));

        motor.stop().unwrap();
        assert_eq!(fs.contents(gpio_value(30)).as_deref(), Some("0"));
        assert_eq!(fs.contents(gpio_value(60)).as_deref(), Some("0"));
    }

    #[test]
    fn test_directions_ignore_enable_state() {
        let (board, fs) = memory_board();
        let motor = bridge(&board);

        motor.enable_motor(false).unwrap();
        assert!(motor.go_forward().is_ok());
        motor.set_raw_value(1).unwrap();
        assert!(motor.stop().is_ok());
        assert_eq!(fs.contents(gpio_value(31)).as_deref(), Some("1"));
    }

    #[test]
    fn test_stop_writes_reverse_when_forward_fails() {
        let (board, fs) = memory_board();
        let motor = bridge(&board);
        motor.go_reverse().unwrap();
        fs.fail_writes(gpio_value(30));

        assert!(matches!(motor.stop(), Err(ComponentError::Pin(_))));
        assert_eq!(fs.contents(gpio_value(60)).as_deref(), Some("0"));
    }

    #[test]
    fn test_without_pair() {
        let (board, fs) = memory_board();
        let motor = enable_only(&board);
        assert!(!motor.has_direction());
        fs.clear_log();

        for result in [motor.go_forward(), motor.go_reverse(), motor.stop()] {
            assert!(matches!(result, Err(ComponentError::MissingPin { .. })));
        }
        assert!(fs.writes().is_empty());

        motor.enable_motor(true).unwrap();
        assert_eq!(fs.writes_to(gpio_value(31)), vec!["1"]);
    }

    #[test]
    fn test_raw_value_range() {
        let (board, fs) = memory_board();
        let motor = enable_only(&board);
        fs.clear_log();

        assert!(motor.set_raw_value(2).is_err());
        assert!(motor.set_raw_value(-1).is_err());
        assert!(fs.writes().is_empty());

        motor.set_raw_value(0).unwrap();
        assert_eq!(fs.writes_to(gpio_value(31)), vec!["0"]);
    }

    #[test]
    fn test_construction_checks() {
        let (board, _fs) = memory_board();
        let gpio = |id| -> Option<AnyPin> {
            Some(DigitalPin::from_id(&board, id, Direction::Out).unwrap().into())
        };

        assert!(matches!(
            HBridge::new(gpio("gpio30"), gpio("gpio60"), None, "Right Track"),
            Err(ComponentError::GpioCanNotBeNil(_))
        ));
        assert!(matches!(
            HBridge::new(gpio("gpio30"), None, gpio("gpio31"), "Right Track"),
            Err(ComponentError::GpioCanNotBeNil(_))
        ));
    }
}
