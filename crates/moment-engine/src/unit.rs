//! Arithmetic units and their published safe input bounds.
//!
//! The bounds are derived from the calendar span (years 1-9999), not from the
//! integer width: an amount inside the bound can never overflow the scaling to
//! seconds, and an amount outside it can never produce a representable result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MomentError, Result};

pub const MIN_UNIT_YEARS: i64 = -10_000;
pub const MAX_UNIT_YEARS: i64 = 10_000;
pub const MIN_UNIT_MONTHS: i64 = -120_000;
pub const MAX_UNIT_MONTHS: i64 = 120_000;
pub const MIN_UNIT_WEEKS: i64 = -521_775;
pub const MAX_UNIT_WEEKS: i64 = 521_775;
pub const MIN_UNIT_DAYS: i64 = -3_652_425;
pub const MAX_UNIT_DAYS: i64 = 3_652_425;
pub const MIN_UNIT_HOURS: i64 = -87_658_200;
pub const MAX_UNIT_HOURS: i64 = 87_658_200;
pub const MIN_UNIT_MINUTES: i64 = -5_259_492_000;
pub const MAX_UNIT_MINUTES: i64 = 5_259_492_000;
pub const MIN_UNIT_SECONDS: i64 = -315_569_520_000;
pub const MAX_UNIT_SECONDS: i64 = 315_569_520_000;
pub const MIN_UNIT_MILLIS: i64 = -315_569_520_000_000;
pub const MAX_UNIT_MILLIS: i64 = 315_569_520_000_000;
pub const MIN_UNIT_MICROS: i64 = -315_569_520_000_000_000;
pub const MAX_UNIT_MICROS: i64 = 315_569_520_000_000_000;

/// A unit accepted by [`Instant::plus`](crate::Instant::plus) and
/// [`Instant::minus`](crate::Instant::minus).
///
/// `Years` and `Months` are calendrical (field-based, clamping the day of
/// month); every other unit is an exact duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl Unit {
    pub const ALL: [Unit; 10] = [
        Unit::Years,
        Unit::Months,
        Unit::Weeks,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
        Unit::Millis,
        Unit::Micros,
        Unit::Nanos,
    ];

    /// The inclusive `(min, max)` amount accepted for this unit.
    pub const fn bounds(self) -> (i64, i64) {
        match self {
            Unit::Years => (MIN_UNIT_YEARS, MAX_UNIT_YEARS),
            Unit::Months => (MIN_UNIT_MONTHS, MAX_UNIT_MONTHS),
            Unit::Weeks => (MIN_UNIT_WEEKS, MAX_UNIT_WEEKS),
            Unit::Days => (MIN_UNIT_DAYS, MAX_UNIT_DAYS),
            Unit::Hours => (MIN_UNIT_HOURS, MAX_UNIT_HOURS),
            Unit::Minutes => (MIN_UNIT_MINUTES, MAX_UNIT_MINUTES),
            Unit::Seconds => (MIN_UNIT_SECONDS, MAX_UNIT_SECONDS),
            Unit::Millis => (MIN_UNIT_MILLIS, MAX_UNIT_MILLIS),
            Unit::Micros => (MIN_UNIT_MICROS, MAX_UNIT_MICROS),
            Unit::Nanos => (i64::MIN, i64::MAX),
        }
    }

    pub const fn is_calendrical(self) -> bool {
        matches!(self, Unit::Years | Unit::Months)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
            Unit::Millis => "millis",
            Unit::Micros => "micros",
            Unit::Nanos => "nanos",
        }
    }

    /// Reject amounts outside [`Unit::bounds`] with [`MomentError::Overflow`].
    pub fn check(self, amount: i64) -> Result<i64> {
        let (min, max) = self.bounds();
        if amount < min || amount > max {
            return Err(MomentError::Overflow {
                unit: self,
                amount,
                min,
                max,
            });
        }
        Ok(amount)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" | "years" | "y" => Ok(Unit::Years),
            "month" | "months" => Ok(Unit::Months),
            "week" | "weeks" | "w" => Ok(Unit::Weeks),
            "day" | "days" | "d" => Ok(Unit::Days),
            "hour" | "hours" | "h" => Ok(Unit::Hours),
            "minute" | "minutes" | "min" => Ok(Unit::Minutes),
            "second" | "seconds" | "s" => Ok(Unit::Seconds),
            "milli" | "millis" | "ms" => Ok(Unit::Millis),
            "micro" | "micros" | "us" => Ok(Unit::Micros),
            "nano" | "nanos" | "ns" => Ok(Unit::Nanos),
            other => Err(format!("unknown unit '{other}'")),
        }
    }
}
