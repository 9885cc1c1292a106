//! Pin registry
//!
//! Static tables mapping the board's symbolic pin names to their position on
//! the P8/P9 expansion headers, one table per pin class. Lookup by name or by
//! header+pin is a linear scan; the tables are small and lookups only happen
//! while a pin is being constructed.
//!
//! A header+pin pair may appear in more than one class (P9_14 is both
//! `gpio50` and `PWM1A`) but at most once per class.

use core::fmt;
use core::str::FromStr;

use bonepin_hal::{PinError, PinKind, Result};

/// One of the two expansion headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Header {
    P8,
    P9,
}

impl Header {
    /// Name as used in pinmux paths
    pub const fn as_str(self) -> &'static str {
        match self {
            Header::P8 => "P8",
            Header::P9 => "P9",
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Header {
    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim() {
            "P8" | "p8" => Ok(Header::P8),
            "P9" | "p9" => Ok(Header::P9),
            _ => Err(()),
        }
    }
}

/// A physical position on an expansion header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardPin {
    pub header: Header,
    pub pin: u8,
}

impl BoardPin {
    pub const fn new(header: Header, pin: u8) -> Self {
        Self { header, pin }
    }
}

impl fmt::Display for BoardPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.header, self.pin)
    }
}

impl FromStr for BoardPin {
    type Err = ();

    /// Parse `P9_11` style locations
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let (header, pin) = s.trim().split_once('_').ok_or(())?;
        let header = header.parse()?;
        let pin = pin.parse().map_err(|_| ())?;
        Ok(BoardPin::new(header, pin))
    }
}

/// Where a PWM channel lives in the platform device tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmController {
    /// Controller directory below `devices/platform/ocp/`, ending in `pwm/`
    pub dir: &'static str,
    /// Channel index within the controller
    pub channel: u8,
}

const fn p8(pin: u8) -> BoardPin {
    BoardPin::new(Header::P8, pin)
}

const fn p9(pin: u8) -> BoardPin {
    BoardPin::new(Header::P9, pin)
}

/// Digital GPIO pins
pub const DIGITAL_PINS: &[(&str, BoardPin)] = &[
    ("gpio38", p8(3)),
    ("gpio39", p8(4)),
    ("gpio34", p8(5)),
    ("gpio35", p8(6)),
    ("gpio66", p8(7)),
    ("gpio67", p8(8)),
    ("gpio69", p8(9)),
    ("gpio68", p8(10)),
    ("gpio45", p8(11)),
    ("gpio44", p8(12)),
    ("gpio23", p8(13)),
    ("gpio26", p8(14)),
    ("gpio47", p8(15)),
    ("gpio46", p8(16)),
    ("gpio27", p8(17)),
    ("gpio65", p8(18)),
    ("gpio22", p8(19)),
    ("gpio63", p8(20)),
    ("gpio62", p8(21)),
    ("gpio37", p8(22)),
    ("gpio36", p8(23)),
    ("gpio33", p8(24)),
    ("gpio32", p8(25)),
    ("gpio61", p8(26)),
    ("gpio86", p8(27)),
    ("gpio88", p8(28)),
    ("gpio87", p8(29)),
    ("gpio89", p8(30)),
    ("gpio10", p8(31)),
    ("gpio11", p8(32)),
    ("gpio9", p8(33)),
    ("gpio81", p8(34)),
    ("gpio8", p8(35)),
    ("gpio80", p8(36)),
    ("gpio78", p8(37)),
    ("gpio79", p8(38)),
    ("gpio76", p8(39)),
    ("gpio77", p8(40)),
    ("gpio74", p8(41)),
    ("gpio75", p8(42)),
    ("gpio72", p8(43)),
    ("gpio73", p8(44)),
    ("gpio70", p8(45)),
    ("gpio71", p8(46)),
    ("gpio30", p9(11)),
    ("gpio60", p9(12)),
    ("gpio31", p9(13)),
    ("gpio50", p9(14)),
    ("gpio48", p9(15)),
    ("gpio51", p9(16)),
    ("gpio5", p9(17)),
    ("gpio4", p9(18)),
    ("gpio3", p9(21)),
    ("gpio2", p9(22)),
    ("gpio49", p9(23)),
    ("gpio15", p9(24)),
    ("gpio117", p9(25)),
    ("gpio14", p9(26)),
    ("gpio115", p9(27)),
    ("gpio113", p9(28)),
    ("gpio111", p9(29)),
    ("gpio112", p9(30)),
    ("gpio110", p9(31)),
    ("gpio20", p9(41)),
    ("gpio7", p9(42)),
];

/// PWM output pins
pub const PWM_PINS: &[(&str, BoardPin)] = &[
    ("PWM2B", p8(13)),
    ("PWM2A", p8(19)),
    ("PWM1A", p9(14)),
    ("PWM1B", p9(16)),
    ("PWM0B", p9(21)),
    ("PWM0A", p9(22)),
    ("PWM0", p9(42)),
];

/// PWM controller sub-path and channel for each PWM pin
pub const PWM_CONTROLLERS: &[(&str, PwmController)] = &[
    ("PWM2B", PwmController { dir: "48304000.epwmss/48304200.ehrpwm/pwm/", channel: 1 }),
    ("PWM2A", PwmController { dir: "48304000.epwmss/48304200.ehrpwm/pwm/", channel: 0 }),
    ("PWM1A", PwmController { dir: "48302000.epwmss/48302200.ehrpwm/pwm/", channel: 0 }),
    ("PWM1B", PwmController { dir: "48302000.epwmss/48302200.ehrpwm/pwm/", channel: 1 }),
    ("PWM0B", PwmController { dir: "48300000.epwmss/48300200.ehrpwm/pwm/", channel: 1 }),
    ("PWM0A", PwmController { dir: "48300000.epwmss/48300200.ehrpwm/pwm/", channel: 0 }),
    ("PWM0", PwmController { dir: "48300000.epwmss/48300100.ecap/pwm/", channel: 0 }),
];

/// Analog input pins
pub const ANALOG_PINS: &[(&str, BoardPin)] = &[
    ("AIN0", p9(39)),
    ("AIN1", p9(40)),
    ("AIN2", p9(37)),
    ("AIN3", p9(38)),
    ("AIN4", p9(33)),
    ("AIN5", p9(36)),
    ("AIN6", p9(35)),
];

/// The registry table for a pin class
pub fn table(kind: PinKind) -> &'static [(&'static str, BoardPin)] {
    match kind {
        PinKind::Digital => DIGITAL_PINS,
        PinKind::Pwm => PWM_PINS,
        PinKind::Analog => ANALOG_PINS,
    }
}

/// Look up a symbolic id
///
/// Returns the registry's own copy of the id alongside its location.
pub fn resolve_by_symbol(kind: PinKind, id: &str) -> Result<(&'static str, BoardPin)> {
    table(kind)
        .iter()
        .find(|(name, _)| *name == id)
        .copied()
        .ok_or_else(|| PinError::UnknownPin {
            class: kind,
            id: id.to_owned(),
        })
}

/// Find the symbolic id at a header position
pub fn resolve_by_header_pin(kind: PinKind, header: Header, pin: u8) -> Result<&'static str> {
    let location = BoardPin::new(header, pin);
    table(kind)
        .iter()
        .find(|(_, entry)| *entry == location)
        .map(|(name, _)| *name)
        .ok_or_else(|| PinError::UnknownPin {
            class: kind,
            id: location.to_string(),
        })
}

/// Controller descriptor for a PWM id
pub fn pwm_controller(id: &str) -> Option<&'static PwmController> {
    PWM_CONTROLLERS
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, controller)| controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const KINDS: [PinKind; 3] = [PinKind::Digital, PinKind::Pwm, PinKind::Analog];

    #[test]
    fn test_table_sizes() {
        assert_eq!(DIGITAL_PINS.len(), 65);
        assert_eq!(PWM_PINS.len(), 7);
        assert_eq!(ANALOG_PINS.len(), 7);
    }

    #[test]
    fn test_entries_unique_per_class() {
        for kind in KINDS {
            let names: HashSet<_> = table(kind).iter().map(|(name, _)| *name).collect();
            let locations: HashSet<_> = table(kind).iter().map(|(_, loc)| *loc).collect();
            assert_eq!(names.len(), table(kind).len(), "{kind} names");
            assert_eq!(locations.len(), table(kind).len(), "{kind} locations");
        }
    }

    #[test]
    fn test_every_pwm_pin_has_controller() {
        for (id, _) in PWM_PINS {
            assert!(pwm_controller(id).is_some(), "{id}");
        }
        assert_eq!(pwm_controller("PWM2B").unwrap().channel, 1);
        assert!(pwm_controller("gpio30").is_none());
    }

    #[test]
    fn test_known_lookups() {
        assert_eq!(
            resolve_by_symbol(PinKind::Digital, "gpio30").unwrap().1,
            BoardPin::new(Header::P9, 11)
        );
        assert_eq!(resolve_by_header_pin(PinKind::Pwm, Header::P8, 13).unwrap(), "PWM2B");
        assert_eq!(resolve_by_header_pin(PinKind::Analog, Header::P9, 40).unwrap(), "AIN1");
    }

    #[test]
    fn test_class_is_respected() {
        // P9_14 is both gpio50 and PWM1A
        assert_eq!(resolve_by_header_pin(PinKind::Digital, Header::P9, 14).unwrap(), "gpio50");
        assert_eq!(resolve_by_header_pin(PinKind::Pwm, Header::P9, 14).unwrap(), "PWM1A");

        assert!(matches!(
            resolve_by_symbol(PinKind::Analog, "gpio30"),
            Err(PinError::UnknownPin { class: PinKind::Analog, .. })
        ));
    }

    #[test]
    fn test_unknown() {
        assert!(resolve_by_symbol(PinKind::Digital, "gpio999").is_err());
        match resolve_by_header_pin(PinKind::Digital, Header::P9, 1) {
            Err(PinError::UnknownPin { id, .. }) => assert_eq!(id, "P9_1"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_locations() {
        assert_eq!("P9_11".parse(), Ok(BoardPin::new(Header::P9, 11)));
        assert_eq!("p8_3".parse(), Ok(BoardPin::new(Header::P8, 3)));
        assert_eq!("P10_1".parse::<BoardPin>(), Err(()));
        assert_eq!("P9".parse::<BoardPin>(), Err(()));
        assert_eq!("P9_x".parse::<BoardPin>(), Err(()));
        assert_eq!(BoardPin::new(Header::P8, 46).to_string(), "P8_46");
    }

    fn entry() -> impl Strategy<Value = (PinKind, &'static str, BoardPin)> {
        prop_oneof![
            proptest::sample::select(DIGITAL_PINS).prop_map(|(n, l)| (PinKind::Digital, n, l)),
            proptest::sample::select(PWM_PINS).prop_map(|(n, l)| (PinKind::Pwm, n, l)),
            proptest::sample::select(ANALOG_PINS).prop_map(|(n, l)| (PinKind::Analog, n, l)),
        ]
    }

    proptest! {
        #[test]
        fn prop_symbol_and_header_pin_agree((kind, name, location) in entry()) {
            let (id, by_symbol) = resolve_by_symbol(kind, name).unwrap();
            prop_assert_eq!(id, name);
            prop_assert_eq!(by_symbol, location);

            let by_position = resolve_by_header_pin(kind, location.header, location.pin).unwrap();
            prop_assert_eq!(by_position, name);
        }
    }
}
