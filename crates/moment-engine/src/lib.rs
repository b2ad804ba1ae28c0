//! # moment-engine
//!
//! Immutable, nanosecond-precision instants with a fixed UTC offset on the
//! proleptic Gregorian calendar, years 1 through 9999.
//!
//! An [`Instant`] converts to and from civil fields, Unix epoch seconds and
//! Julian Day numbers, supports calendar-aware (`Years`, `Months`) and exact
//! (`Weeks` .. `Nanos`) arithmetic, replaces single fields, and can be ordered
//! either by absolute time or by wall-clock time. Rule-based date moves such as
//! "third Monday of the month" are [`Adjuster`]s applied with
//! [`Instant::with`].
//!
//! Every fallible operation returns [`MomentError`]; nothing panics on bad
//! input and nothing wraps silently.
//!
//! ## Modules
//!
//! - [`instant`] — the `Instant` type: construction, accessors, offsets, comparison
//! - [`arith`] — `plus` / `minus` by [`Unit`]
//! - [`fields`] — `with_component` and the named setters
//! - [`julian`] — Julian Day, Modified Julian Day and Rata Die conversions
//! - [`adjuster`] — the `Adjuster` trait and the built-in date rules
//! - [`calendar`] — pure proleptic Gregorian day-number algorithms
//! - [`clock`] — injectable current-time sources
//! - [`interop`] — `chrono::DateTime<FixedOffset>` conversions
//! - [`unit`], [`component`], [`weekday`] — closed enumerations
//! - [`range`] — published range constants
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use moment_engine::{adjuster, Instant, Ordinal, Unit, Weekday};
//!
//! let t = Instant::from_fields(2013, 1, 9, 9, 30, 0, 0, -300).unwrap();
//! let mlk = t
//!     .with(adjuster::nth_day_of_week_in_month(Ordinal::Third, Weekday::Monday))
//!     .unwrap();
//! assert_eq!(mlk.day_of_month(), 21);
//!
//! let later = mlk.plus(Unit::Months, 1).unwrap();
//! assert_eq!((later.month(), later.day_of_month(), later.hour()), (2, 21, 9));
//! ```

pub mod adjuster;
pub mod arith;
pub mod calendar;
pub mod clock;
pub mod component;
pub mod error;
pub mod fields;
pub mod instant;
pub mod interop;
pub mod julian;
pub mod range;
pub mod unit;
pub mod weekday;

pub use adjuster::{
    Adjuster, FirstDayOfWeekInMonth, LastDayOfWeekInMonth, NearestWorkday, NextDayOfWeek,
    NextOrSameDayOfWeek, NthDayOfWeekInMonth, PreviousDayOfWeek, PreviousOrSameDayOfWeek,
    WesternEasterSunday,
};
pub use clock::{Clock, ClockReading, FixedClock, SystemClock};
pub use component::Component;
pub use error::{MomentError, Result};
pub use instant::Instant;
pub use julian::JulianEpoch;
pub use range::{
    MAX_EPOCH_SECONDS, MAX_OFFSET, MAX_RANGE, MIN_EPOCH_SECONDS, MIN_OFFSET, MIN_RANGE,
    NANOS_PER_SEC, SECS_PER_DAY, UNIX_EPOCH,
};
pub use unit::{
    Unit, MAX_UNIT_DAYS, MAX_UNIT_HOURS, MAX_UNIT_MICROS, MAX_UNIT_MILLIS, MAX_UNIT_MINUTES,
    MAX_UNIT_MONTHS, MAX_UNIT_SECONDS, MAX_UNIT_WEEKS, MAX_UNIT_YEARS, MIN_UNIT_DAYS,
    MIN_UNIT_HOURS, MIN_UNIT_MICROS, MIN_UNIT_MILLIS, MIN_UNIT_MINUTES, MIN_UNIT_MONTHS,
    MIN_UNIT_SECONDS, MIN_UNIT_WEEKS, MIN_UNIT_YEARS,
};
pub use weekday::{Ordinal, Weekday};
