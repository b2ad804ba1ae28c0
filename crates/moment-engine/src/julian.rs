//! Julian Day, Modified Julian Day and Rata Die conversions.
//!
//! All three are linear day counts with a fractional time of day; they differ
//! only in where day zero sits. Conversions in are rounded to a caller-chosen
//! number of fractional-second digits, conversions out are plain `f64`.

use serde::{Deserialize, Serialize};

use crate::error::{MomentError, Result};
use crate::instant::Instant;
use crate::range::{carry_nanos, NANOS_PER_SEC, SECS_PER_DAY};

/// Rata Die day of MJD 0 (1858-11-17).
const MJD_EPOCH_RDN: i64 = 678_576;
/// JD of MJD 0.
const MJD_TO_JD: f64 = 2_400_000.5;

/// Inputs must lie strictly inside ±50 Gregorian cycles of 400 years.
const DAY_LIMIT: f64 = 146_097.0 * 50.0;

/// Last valid Rata Die day (9999-12-31).
const MAX_RDN: f64 = 3_652_059.0;

/// Which linear day count a real-valued day number is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JulianEpoch {
    /// Days since -4713-11-24T12:00Z (proleptic Gregorian).
    JulianDay,
    /// Days since 1858-11-17T00:00Z.
    ModifiedJulianDay,
    /// Days since 0000-12-31T00:00Z; day 1 is 0001-01-01.
    RataDie,
}

impl JulianEpoch {
    /// Offset that turns a day number in this convention into a Rata Die day.
    pub const fn rata_die_shift(self) -> f64 {
        match self {
            JulianEpoch::JulianDay => -1_721_424.5,
            JulianEpoch::ModifiedJulianDay => 678_576.0,
            JulianEpoch::RataDie => 0.0,
        }
    }
}

impl Instant {
    /// Build a UTC instant from a real-valued day number.
    ///
    /// `precision` is the number of fractional-second digits kept (0-9); the
    /// fraction is rounded half up at that digit.
    ///
    /// # Errors
    ///
    /// - [`MomentError::InvalidComponent`] if `precision` is above 9.
    /// - [`MomentError::OutOfRange`] if `value` is not finite, lies outside
    ///   ±7 304 850 days, or converts to a date outside years 1-9999.
    ///
    /// # Examples
    ///
    /// ```
    /// use moment_engine::{Instant, JulianEpoch};
    ///
    /// let j2000 = Instant::from_julian_day(2_451_545.0, JulianEpoch::JulianDay, 0).unwrap();
    /// assert_eq!(j2000, Instant::from_fields(2000, 1, 1, 12, 0, 0, 0, 0).unwrap());
    /// ```
    pub fn from_julian_day(value: f64, epoch: JulianEpoch, precision: u32) -> Result<Self> {
        if precision > 9 {
            return Err(MomentError::component(
                "precision",
                i64::from(precision),
                0,
                9,
            ));
        }
        if value.is_nan() || value <= -DAY_LIMIT || value >= DAY_LIMIT {
            return Err(MomentError::out_of_range(format!(
                "day number {value} is outside (-{DAY_LIMIT}, {DAY_LIMIT})"
            )));
        }

        // Split the larger and smaller addend separately so the fraction
        // keeps as many bits as possible.
        let shift = epoch.rata_die_shift();
        let (d1, d2) = if value >= shift {
            (value, shift)
        } else {
            (shift, value)
        };
        let f1 = d1 % 1.0;
        let f2 = d2 % 1.0;
        let d1 = (d1 - f1).floor();
        let d2 = (d2 - f2).floor();

        let mut f = (f1 + f2) % 1.0;
        if f < 0.0 {
            f += 1.0;
        }
        let day = d1 + d2 + (f1 + f2 - f).floor();
        if !(1.0..=MAX_RDN).contains(&day) {
            return Err(MomentError::out_of_range(format!(
                "day {day} is outside Rata Die [1, {MAX_RDN}]"
            )));
        }

        let f = f * SECS_PER_DAY as f64;
        let whole = f.floor();
        let denom = 10_f64.powi(precision as i32);
        let nanos = ((f - whole) * denom + 0.5).floor() / denom * NANOS_PER_SEC as f64;

        let seconds = day as i64 * SECS_PER_DAY + whole as i64;
        let (seconds, nanos) = carry_nanos(seconds, nanos as i64)?;
        Instant::from_utc(seconds, nanos, 0)
    }

    /// [`Instant::from_julian_day`] for a Julian Day number; fails with
    /// `InvalidComponent` for a precision above 9 and `OutOfRange` otherwise.
    pub fn from_jd(jd: f64, precision: u32) -> Result<Self> {
        Instant::from_julian_day(jd, JulianEpoch::JulianDay, precision)
    }

    /// [`Instant::from_julian_day`] for a Modified Julian Day number; fails with
    /// `InvalidComponent` for a precision above 9 and `OutOfRange` otherwise.
    pub fn from_mjd(mjd: f64, precision: u32) -> Result<Self> {
        Instant::from_julian_day(mjd, JulianEpoch::ModifiedJulianDay, precision)
    }

    /// [`Instant::from_julian_day`] for a Rata Die day number; fails with
    /// `InvalidComponent` for a precision above 9 and `OutOfRange` otherwise.
    pub fn from_rd(rd: f64, precision: u32) -> Result<Self> {
        Instant::from_julian_day(rd, JulianEpoch::RataDie, precision)
    }

    /// Julian Day of the absolute instant.
    pub fn jd(self) -> f64 {
        self.mjd() + MJD_TO_JD
    }

    /// Modified Julian Day of the absolute instant.
    pub fn mjd(self) -> f64 {
        day_number(self.utc_rd_seconds(), self.nanosecond(), MJD_EPOCH_RDN)
    }

    /// Rata Die of the local representation.
    pub fn rd(self) -> f64 {
        day_number(self.local_rd_seconds(), self.nanosecond(), 0)
    }
}

fn day_number(rd_seconds: i64, nanosecond: u32, epoch_rdn: i64) -> f64 {
    let day = rd_seconds / SECS_PER_DAY - epoch_rdn;
    let nanos = (rd_seconds % SECS_PER_DAY) * NANOS_PER_SEC + i64::from(nanosecond);
    day as f64 + nanos as f64 * (1e-9 / SECS_PER_DAY as f64)
}
