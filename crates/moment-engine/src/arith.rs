//! Unit arithmetic: `plus` / `minus` and the per-unit shortcuts.
//!
//! Two families:
//!
//! - Calendrical units (`Years`, `Months`) move the year/month fields and clamp
//!   the day of month to the target month. Time of day and offset stay.
//! - Exact-duration units (`Weeks` through `Nanos`) add a fixed number of
//!   seconds and nanoseconds to the absolute instant. The offset stays, so the
//!   wall clock moves by exactly the same amount.
//!
//! Every amount is checked against [`Unit::bounds`] first
//! ([`MomentError::Overflow`](crate::MomentError::Overflow)); the result is
//! then range-checked like any constructor
//! ([`MomentError::OutOfRange`](crate::MomentError::OutOfRange)).

use crate::calendar;
use crate::error::Result;
use crate::instant::Instant;
use crate::range::{add_seconds, carry_nanos, scale_seconds, NANOS_PER_SEC, SECS_PER_DAY};
use crate::unit::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

impl Instant {
    /// Add `amount` of `unit`. Years and months move the local date and clamp
    /// the day to the target month; the other units are exact durations.
    ///
    /// # Errors
    ///
    /// - [`MomentError::Overflow`](crate::MomentError::Overflow) if `amount`
    ///   is outside the unit's bound (see [`Unit::bounds`]).
    /// - [`MomentError::OutOfRange`](crate::MomentError::OutOfRange) if the
    ///   result falls outside years 1-9999.
    ///
    /// # Examples
    ///
    /// ```
    /// use moment_engine::{Instant, Unit};
    ///
    /// let jan31 = Instant::from_ymd(2012, 1, 31).unwrap();
    /// assert_eq!(
    ///     jan31.plus(Unit::Months, 1).unwrap(),
    ///     Instant::from_ymd(2012, 2, 29).unwrap()
    /// );
    /// assert_eq!(
    ///     jan31.plus(Unit::Hours, 36).unwrap(),
    ///     Instant::from_fields(2012, 2, 1, 12, 0, 0, 0, 0).unwrap()
    /// );
    /// ```
    pub fn plus(self, unit: Unit, amount: i64) -> Result<Self> {
        self.shift(unit, amount, Direction::Forward)
    }

    /// Subtract `amount` of `unit`; `amount` is never negated, so
    /// `i64::MIN` nanoseconds is accepted.
    ///
    /// # Errors
    ///
    /// - [`MomentError::Overflow`](crate::MomentError::Overflow) if `amount`
    ///   is outside the unit's bound (see [`Unit::bounds`]).
    /// - [`MomentError::OutOfRange`](crate::MomentError::OutOfRange) if the
    ///   result falls outside years 1-9999.
    pub fn minus(self, unit: Unit, amount: i64) -> Result<Self> {
        self.shift(unit, amount, Direction::Backward)
    }

    fn shift(self, unit: Unit, amount: i64, direction: Direction) -> Result<Self> {
        let v = unit.check(amount)?;
        let sign = direction.sign();
        match unit {
            Unit::Years => self.shift_months(v * 12 * sign),
            Unit::Months => self.shift_months(v * sign),
            Unit::Weeks => self.shift_local_days(v * 7 * sign),
            Unit::Days => self.shift_local_days(v * sign),
            Unit::Hours => self.shift_utc_seconds(v * 3600 * sign),
            Unit::Minutes => self.shift_utc_seconds(v * 60 * sign),
            Unit::Seconds => self.shift_utc_seconds(v * sign),
            Unit::Millis => self.shift_time(v / 1000, (v % 1000) * 1_000_000, sign),
            Unit::Micros => self.shift_time(v / 1_000_000, (v % 1_000_000) * 1000, sign),
            // The full i64 range is accepted, so the amount is never negated.
            Unit::Nanos => self.shift_time(0, v, sign),
        }
    }

    fn shift_months(self, months: i64) -> Result<Self> {
        // |months| <= 120_000 * 12 after the bound check.
        let rdn = calendar::add_months(self.local_rdn(), months as i32);
        self.with_local_rdn(rdn)
    }

    fn shift_local_days(self, days: i64) -> Result<Self> {
        let seconds = add_seconds(self.local_rd_seconds(), scale_seconds(days, SECS_PER_DAY)?)?;
        Instant::from_local(seconds, self.nanosecond() as i32, self.offset())
    }

    fn shift_utc_seconds(self, seconds: i64) -> Result<Self> {
        let seconds = add_seconds(self.utc_rd_seconds(), seconds)?;
        Instant::from_utc(seconds, self.nanosecond() as i32, self.offset())
    }

    fn shift_time(self, seconds: i64, nanos: i64, sign: i64) -> Result<Self> {
        let seconds = seconds + nanos / NANOS_PER_SEC;
        let nanos = nanos % NANOS_PER_SEC;

        let seconds = add_seconds(self.utc_rd_seconds(), seconds * sign)?;
        let (seconds, nanos) = carry_nanos(seconds, i64::from(self.nanosecond()) + nanos * sign)?;
        Instant::from_utc(seconds, nanos, self.offset())
    }
}

macro_rules! unit_shortcuts {
    ($($plus:ident, $minus:ident => $unit:ident;)*) => {
        impl Instant {
            $(
                #[doc = concat!("`plus(Unit::", stringify!($unit), ", amount)`.")]
                pub fn $plus(self, amount: i64) -> Result<Self> {
                    self.plus(Unit::$unit, amount)
                }

                #[doc = concat!("`minus(Unit::", stringify!($unit), ", amount)`.")]
                pub fn $minus(self, amount: i64) -> Result<Self> {
                    self.minus(Unit::$unit, amount)
                }
            )*
        }
    };
}

unit_shortcuts! {
    plus_years, minus_years => Years;
    plus_months, minus_months => Months;
    plus_weeks, minus_weeks => Weeks;
    plus_days, minus_days => Days;
    plus_hours, minus_hours => Hours;
    plus_minutes, minus_minutes => Minutes;
    plus_seconds, minus_seconds => Seconds;
    plus_millis, minus_millis => Millis;
    plus_micros, minus_micros => Micros;
    plus_nanos, minus_nanos => Nanos;
}
