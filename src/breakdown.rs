use crate::eta::Time;
use std::fmt;

const MINUTE: Time = 60;
const HOUR: Time = 60 * MINUTE;
const DAY: Time = 24 * HOUR;

/// A number of seconds split into days, hours, minutes and seconds.
///
///     # extern crate eta_calculator as eta;
///     # use eta::Breakdown;
///     let b = Breakdown::from_seconds(90061);
///     assert_eq!(b.to_string(), "1days 1h 1m 1s");
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Breakdown {
    pub days: Time,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Breakdown {
    pub fn from_seconds(t: Time) -> Breakdown {
        Breakdown {
            days: t / DAY,
            hours: (t % DAY / HOUR) as u8,
            minutes: (t % HOUR / MINUTE) as u8,
            seconds: (t % MINUTE) as u8,
        }
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}days {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[test]
fn test_from_seconds() {
    assert_eq!(Breakdown::from_seconds(0), Breakdown::default());
    assert_eq!(
        Breakdown::from_seconds(59),
        Breakdown { days: 0, hours: 0, minutes: 0, seconds: 59 }
    );
    assert_eq!(
        Breakdown::from_seconds(3600),
        Breakdown { days: 0, hours: 1, minutes: 0, seconds: 0 }
    );
    assert_eq!(
        Breakdown::from_seconds(86399),
        Breakdown { days: 0, hours: 23, minutes: 59, seconds: 59 }
    );
    assert_eq!(
        Breakdown::from_seconds(3 * 86400 + 7 * 3600 + 5),
        Breakdown { days: 3, hours: 7, minutes: 0, seconds: 5 }
    );
}

#[test]
fn test_display() {
    assert_eq!(Breakdown::from_seconds(14).to_string(), "0days 0h 0m 14s");
    assert_eq!(Breakdown::from_seconds(86400 * 400 + 61).to_string(), "400days 0h 1m 1s");
}
