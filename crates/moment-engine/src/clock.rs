//! Current-time sources.
//!
//! The engine never reads the wall clock implicitly; [`Instant::now`] goes
//! through [`SystemClock`], and everything else can inject a [`Clock`] (for
//! example a [`FixedClock`] in tests).

use chrono::{Local, Offset};
use tracing::{trace, warn};

use crate::error::Result;
use crate::instant::Instant;
use crate::range::{MAX_NANOSECOND, MAX_OFFSET, MIN_OFFSET};

/// One observation of the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    /// Whole seconds since 1970-01-01T00:00:00Z.
    pub epoch_seconds: i64,
    pub nanosecond: u32,
    /// Local UTC offset in minutes east of Greenwich.
    pub local_offset: i32,
}

pub trait Clock {
    fn read(&self) -> ClockReading;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn read(&self) -> ClockReading {
        (**self).read()
    }
}

/// The operating system clock and local time zone, via `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn read(&self) -> ClockReading {
        let now = Local::now();
        let offset_seconds = now.offset().fix().local_minus_utc();
        ClockReading {
            epoch_seconds: now.timestamp(),
            // chrono reports a leap second as nanosecond >= 1e9.
            nanosecond: now.timestamp_subsec_nanos().min(MAX_NANOSECOND as u32),
            local_offset: offset_minutes(offset_seconds),
        }
    }
}

/// Convert a zone offset in seconds to whole minutes, falling back to UTC
/// when it cannot be represented.
fn offset_minutes(offset_seconds: i32) -> i32 {
    if offset_seconds % 60 != 0 {
        warn!(
            offset_seconds,
            "local offset is not a whole number of minutes, truncating"
        );
    }
    let minutes = offset_seconds / 60;
    if !(MIN_OFFSET..=MAX_OFFSET).contains(&minutes) {
        warn!(minutes, "local offset is outside ±18:00, using UTC");
        return 0;
    }
    minutes
}

/// A clock frozen at one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub ClockReading);

impl FixedClock {
    pub fn new(epoch_seconds: i64, nanosecond: u32, local_offset: i32) -> Self {
        FixedClock(ClockReading {
            epoch_seconds,
            nanosecond,
            local_offset,
        })
    }
}

impl Clock for FixedClock {
    fn read(&self) -> ClockReading {
        self.0
    }
}

impl Instant {
    /// The current instant in the system's local offset.
    pub fn now() -> Result<Self> {
        Instant::now_from(&SystemClock)
    }

    /// The current instant at offset zero.
    pub fn now_utc() -> Result<Self> {
        Instant::now_utc_from(&SystemClock)
    }

    pub fn now_from<C: Clock + ?Sized>(clock: &C) -> Result<Self> {
        let reading = clock.read();
        trace!(?reading, "clock read");
        Instant::from_epoch_seconds(
            reading.epoch_seconds,
            reading.nanosecond,
            reading.local_offset,
        )
    }

    pub fn now_utc_from<C: Clock + ?Sized>(clock: &C) -> Result<Self> {
        let reading = clock.read();
        trace!(?reading, "clock read");
        Instant::from_epoch_seconds(reading.epoch_seconds, reading.nanosecond, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MomentError;

    #[test]
    fn test_now_from_fixed_clock() {
        let clock = FixedClock::new(1_356_363_045, 42, 60);
        let t = Instant::now_from(&clock).unwrap();
        assert_eq!(t, Instant::from_epoch_seconds(1_356_363_045, 42, 60).unwrap());
        assert_eq!(t.hour(), 16);

        let u = Instant::now_utc_from(&clock).unwrap();
        assert_eq!(u.offset(), 0);
        assert!(t.is_simultaneous(&u));
    }

    #[test]
    fn test_clock_as_trait_object() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(0, 0, 0));
        let t = Instant::now_from(clock.as_ref()).unwrap();
        assert_eq!((t.year(), t.month(), t.day_of_month()), (1970, 1, 1));
    }

    #[test]
    fn test_invalid_reading_is_rejected() {
        let clock = FixedClock::new(0, 0, 5000);
        assert!(matches!(
            Instant::now_from(&clock),
            Err(MomentError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn test_offset_minutes() {
        assert_eq!(offset_minutes(3600), 60);
        assert_eq!(offset_minutes(-19_800), -330);
        assert_eq!(offset_minutes(3630), 60);
        assert_eq!(offset_minutes(19 * 3600), 0);
    }

    #[test]
    fn test_system_clock_produces_valid_instant() {
        let now = Instant::now().unwrap();
        let utc = Instant::now_utc().unwrap();
        assert!(now.year() >= 2024);
        assert_eq!(utc.offset(), 0);
        assert!(!utc.is_before(&now));
    }
}
