//! The immutable instant-with-offset value type.
//!
//! An [`Instant`] is a point on the proleptic Gregorian time line with
//! nanosecond precision, together with a fixed UTC offset that selects its
//! local (wall-clock) representation. Every operation returns a new value;
//! nothing mutates in place.
//!
//! # Two orders
//!
//! Instants are ordered in two distinct ways and the type deliberately
//! implements neither `PartialOrd` nor `Ord`:
//!
//! - [`Instant::compare_instant`] orders by the absolute point in time.
//! - [`Instant::compare_local`] orders by the printed wall-clock time.
//!
//! `12:00+01:00` and `11:00+00:00` are simultaneous, yet the first sorts
//! later by local time. Equality (`==`) is stricter than both: seconds,
//! nanoseconds *and* offset must match.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::adjuster::Adjuster;
use crate::calendar;
use crate::component::Component;
use crate::error::{MomentError, Result};
use crate::range::{
    self, add_seconds, check_epoch_seconds, check_local_seconds, check_nanosecond, check_offset,
    SECS_PER_DAY, UNIX_EPOCH,
};
use crate::weekday::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "EpochRepr", try_from = "EpochRepr")]
pub struct Instant {
    /// Local Rata Die seconds (offset already applied).
    seconds: i64,
    nanosecond: i32,
    /// Minutes east of UTC.
    offset: i32,
}

// ── Construction ────────────────────────────────────────────────────────────

impl Instant {
    /// Build from local Rata Die seconds; the only place the range invariant
    /// is enforced.
    pub(crate) fn from_local(seconds: i64, nanosecond: i32, offset: i32) -> Result<Self> {
        Ok(Instant {
            seconds: check_local_seconds(seconds)?,
            nanosecond,
            offset,
        })
    }

    /// Build from absolute (UTC) Rata Die seconds.
    pub(crate) fn from_utc(seconds: i64, nanosecond: i32, offset: i32) -> Result<Self> {
        let local = add_seconds(seconds, i64::from(offset) * 60)?;
        Instant::from_local(local, nanosecond, offset)
    }

    /// Build an instant from civil fields interpreted in the local time of
    /// `offset` (minutes east of UTC).
    ///
    /// # Errors
    ///
    /// - [`MomentError::OutOfRange`] if `year` is outside 1-9999.
    /// - [`MomentError::InvalidComponent`] if any other field is outside its
    ///   range, including a day that does not exist in the month.
    /// - [`MomentError::InvalidOffset`] if `offset` is outside ±1080 minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// use moment_engine::Instant;
    ///
    /// let t = Instant::from_fields(2012, 12, 24, 15, 30, 45, 500_000_000, 60).unwrap();
    /// assert_eq!(t.day_of_month(), 24);
    /// assert_eq!(t.hour(), 15);
    /// assert_eq!(t.millisecond(), 500);
    /// assert_eq!(t.epoch_seconds(), 1_356_359_445);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
        offset: i32,
    ) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(MomentError::out_of_range(format!(
                "year {year} is outside [1, 9999]"
            )));
        }
        Component::MonthOfYear.check(i64::from(month))?;
        Component::DayOfMonth.check(i64::from(day))?;
        Component::DayOfMonth.check_within(
            i64::from(day),
            i64::from(calendar::days_in_month(year, month)),
        )?;
        Component::HourOfDay.check(i64::from(hour))?;
        Component::MinuteOfHour.check(i64::from(minute))?;
        Component::SecondOfMinute.check(i64::from(second))?;
        let nanosecond = check_nanosecond(i64::from(nanosecond))?;
        let offset = check_offset(i64::from(offset))?;

        let rdn = calendar::rdn_from_ymd(year, month, day);
        let seconds = ((rdn * 24 + i64::from(hour)) * 60 + i64::from(minute)) * 60
            + i64::from(second);
        Instant::from_local(seconds, nanosecond, offset)
    }

    /// Midnight UTC at the start of the given date.
    ///
    /// # Errors
    ///
    /// As [`Instant::from_fields`].
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Instant::from_fields(year, month, day, 0, 0, 0, 0, 0)
    }

    /// Build an instant from seconds since 1970-01-01T00:00:00Z.
    ///
    /// # Errors
    ///
    /// - [`MomentError::OutOfRange`] if `epoch_seconds` is outside
    ///   [`MIN_EPOCH_SECONDS`](crate::MIN_EPOCH_SECONDS)`..=`[`MAX_EPOCH_SECONDS`](crate::MAX_EPOCH_SECONDS),
    ///   or if the offset pushes the local time outside years 1-9999.
    /// - [`MomentError::InvalidComponent`] for a nanosecond above 999 999 999.
    /// - [`MomentError::InvalidOffset`] for an offset outside ±1080 minutes.
    pub fn from_epoch_seconds(epoch_seconds: i64, nanosecond: u32, offset: i32) -> Result<Self> {
        let epoch_seconds = check_epoch_seconds(epoch_seconds)?;
        let nanosecond = check_nanosecond(i64::from(nanosecond))?;
        let offset = check_offset(i64::from(offset))?;
        Instant::from_utc(epoch_seconds + UNIX_EPOCH, nanosecond, offset)
    }

    /// Build a UTC instant from fractional seconds since the Unix epoch,
    /// rounded to the nearest nanosecond.
    ///
    /// # Errors
    ///
    /// [`MomentError::OutOfRange`] for NaN, infinities and values outside
    /// years 1-9999 UTC.
    pub fn from_epoch_f64(seconds: f64) -> Result<Self> {
        // Exclusive bounds: 0000-12-31T23:59:59Z and 10000-01-01T00:00:00Z.
        const SEC_MIN: f64 = -62_135_596_801.0;
        const SEC_MAX: f64 = 253_402_300_800.0;

        if seconds.is_nan() || seconds <= SEC_MIN || seconds >= SEC_MAX {
            return Err(MomentError::out_of_range(format!(
                "epoch seconds {seconds} is outside ({SEC_MIN}, {SEC_MAX})"
            )));
        }
        let fraction = seconds % 1.0;
        let mut whole = (seconds - fraction).floor();
        let mut nanos = fraction;
        if nanos < 0.0 {
            nanos += 1.0;
        }
        whole += (fraction - nanos).floor();
        let (whole, nanos) = range::carry_nanos(whole as i64, (nanos * 1e9 + 0.5).floor() as i64)?;
        let whole = check_epoch_seconds(whole)?;
        Instant::from_utc(whole + UNIX_EPOCH, nanos, 0)
    }
}

// ── Internal representation ─────────────────────────────────────────────────

impl Instant {
    /// Local Rata Die seconds.
    pub(crate) fn local_rd_seconds(self) -> i64 {
        self.seconds
    }

    /// Absolute (UTC) Rata Die seconds.
    pub(crate) fn utc_rd_seconds(self) -> i64 {
        self.seconds - i64::from(self.offset) * 60
    }

    /// Local Rata Die day number.
    pub(crate) fn local_rdn(self) -> i64 {
        self.seconds / SECS_PER_DAY
    }

    /// Replace the local date, keeping time of day, fraction and offset.
    pub(crate) fn with_local_rdn(self, rdn: i64) -> Result<Self> {
        let seconds = add_seconds(
            range::scale_seconds(rdn, SECS_PER_DAY)?,
            i64::from(self.second_of_day()),
        )?;
        Instant::from_local(seconds, self.nanosecond, self.offset)
    }

    /// `(rata_die_day, second_of_day, nanosecond)` of the absolute instant.
    pub fn to_instant_rd_values(self) -> (i64, u32, u32) {
        let s = self.utc_rd_seconds();
        (
            s / SECS_PER_DAY,
            (s % SECS_PER_DAY) as u32,
            self.nanosecond as u32,
        )
    }

    /// `(rata_die_day, second_of_day, nanosecond)` of the local representation.
    pub fn to_local_rd_values(self) -> (i64, u32, u32) {
        (
            self.local_rdn(),
            self.second_of_day(),
            self.nanosecond as u32,
        )
    }
}

// ── Component accessors ─────────────────────────────────────────────────────

impl Instant {
    /// Calendar year of the local date, 1-9999.
    pub fn year(self) -> i32 {
        calendar::yd_from_rdn(self.local_rdn()).0
    }

    /// Quarter of the year, 1-4.
    pub fn quarter(self) -> u32 {
        calendar::quarter_of_month(self.month())
    }

    /// Month of the local date, 1-12.
    pub fn month(self) -> u32 {
        calendar::ymd_from_rdn(self.local_rdn()).1
    }

    /// ISO-8601 week of the week-numbering year, 1-53.
    pub fn week(self) -> u32 {
        calendar::ywd_from_rdn(self.local_rdn()).1
    }

    /// The ISO-8601 week-numbering year that [`Instant::week`] belongs to.
    pub fn week_year(self) -> i32 {
        calendar::ywd_from_rdn(self.local_rdn()).0
    }

    /// Day of the year, 1-366.
    pub fn day_of_year(self) -> u32 {
        calendar::yd_from_rdn(self.local_rdn()).1
    }

    /// Day of the quarter, 1-92.
    pub fn day_of_quarter(self) -> u32 {
        calendar::yqd_from_rdn(self.local_rdn()).2
    }

    /// Day of the month, 1-31.
    pub fn day_of_month(self) -> u32 {
        calendar::ymd_from_rdn(self.local_rdn()).2
    }

    /// ISO day of week, 1 = Monday through 7 = Sunday.
    pub fn day_of_week(self) -> u32 {
        calendar::day_of_week(self.local_rdn())
    }

    /// [`Instant::day_of_week`] as a [`Weekday`].
    pub fn weekday(self) -> Weekday {
        Weekday::ALL[self.day_of_week() as usize - 1]
    }

    /// Local hour, 0-23.
    pub fn hour(self) -> u32 {
        ((self.seconds / 3600) % 24) as u32
    }

    /// Minute of the hour, 0-59.
    pub fn minute(self) -> u32 {
        ((self.seconds / 60) % 60) as u32
    }

    /// Minutes since local midnight, 0-1439.
    pub fn minute_of_day(self) -> u32 {
        ((self.seconds / 60) % 1440) as u32
    }

    /// Second of the minute, 0-59. Leap seconds are not modeled.
    pub fn second(self) -> u32 {
        (self.seconds % 60) as u32
    }

    /// Seconds since local midnight, 0-86399.
    pub fn second_of_day(self) -> u32 {
        (self.seconds % SECS_PER_DAY) as u32
    }

    /// Whole milliseconds of the fraction, 0-999.
    pub fn millisecond(self) -> u32 {
        self.nanosecond as u32 / 1_000_000
    }

    /// Milliseconds since local midnight, 0-86 399 999.
    pub fn millisecond_of_day(self) -> u32 {
        self.second_of_day() * 1000 + self.millisecond()
    }

    /// Whole microseconds of the fraction, 0-999 999.
    pub fn microsecond(self) -> u32 {
        self.nanosecond as u32 / 1000
    }

    /// Fraction of the second in nanoseconds, 0-999 999 999.
    pub fn nanosecond(self) -> u32 {
        self.nanosecond as u32
    }

    /// UTC offset in minutes east of Greenwich.
    pub fn offset(self) -> i32 {
        self.offset
    }

    /// Whole seconds since 1970-01-01T00:00:00Z (offset-independent).
    pub fn epoch_seconds(self) -> i64 {
        self.utc_rd_seconds() - UNIX_EPOCH
    }

    /// Days in the local year, 365 or 366.
    pub fn length_of_year(self) -> u32 {
        calendar::days_in_year(self.year())
    }

    /// Days in the local quarter, 90-92.
    pub fn length_of_quarter(self) -> u32 {
        let (year, quarter, _) = calendar::yqd_from_rdn(self.local_rdn());
        calendar::days_in_quarter(year, quarter)
    }

    /// Days in the local month, 28-31.
    pub fn length_of_month(self) -> u32 {
        let (year, month, _) = calendar::ymd_from_rdn(self.local_rdn());
        calendar::days_in_month(year, month)
    }

    /// Number of ISO weeks (52 or 53) in this instant's week-numbering year.
    pub fn length_of_week_year(self) -> u32 {
        calendar::weeks_in_year(self.week_year())
    }
}

// ── Offset transforms and canonicalization ──────────────────────────────────

impl Instant {
    /// Same absolute instant seen from a different offset; local fields change.
    ///
    /// # Errors
    ///
    /// - [`MomentError::InvalidOffset`] for an offset outside ±1080 minutes.
    /// - [`MomentError::OutOfRange`] when the new local time falls outside
    ///   years 1-9999.
    pub fn with_offset_same_instant(self, offset: i32) -> Result<Self> {
        let offset = check_offset(i64::from(offset))?;
        Instant::from_utc(self.utc_rd_seconds(), self.nanosecond, offset)
    }

    /// Same wall-clock fields under a different offset; the absolute instant
    /// moves.
    ///
    /// # Errors
    ///
    /// [`MomentError::InvalidOffset`] for an offset outside ±1080 minutes. The
    /// local time is unchanged, so it never leaves the range.
    pub fn with_offset_same_local(self, offset: i32) -> Result<Self> {
        let offset = check_offset(i64::from(offset))?;
        Instant::from_local(self.seconds, self.nanosecond, offset)
    }

    /// Shorthand for `with_offset_same_instant(0)`.
    ///
    /// # Errors
    ///
    /// [`MomentError::OutOfRange`] when the UTC date falls outside years 1-9999.
    pub fn at_utc(self) -> Result<Self> {
        self.with_offset_same_instant(0)
    }

    /// 00:00:00.000000000 local time on the same date.
    pub fn at_midnight(self) -> Result<Self> {
        self.with_component(Component::MilliOfDay, 0)
    }

    /// 12:00:00.000000000 local time on the same date.
    pub fn at_noon(self) -> Result<Self> {
        self.with_component(Component::MilliOfDay, 12 * 60 * 60 * 1000)
    }

    /// 31 December of the local year, keeping the time of day.
    pub fn at_last_day_of_year(self) -> Result<Self> {
        let year = self.year();
        self.with_local_rdn(calendar::rdn_from_ymd(year, 12, 31))
    }

    /// Last day of the local quarter, keeping the time of day.
    pub fn at_last_day_of_quarter(self) -> Result<Self> {
        let (year, quarter, _) = calendar::yqd_from_rdn(self.local_rdn());
        let last = calendar::days_in_quarter(year, quarter);
        self.with_local_rdn(calendar::rdn_from_yqd(year, quarter, last))
    }

    /// Last day of the local month, keeping the time of day.
    pub fn at_last_day_of_month(self) -> Result<Self> {
        let (year, month, _) = calendar::ymd_from_rdn(self.local_rdn());
        let last = calendar::days_in_month(year, month);
        self.with_local_rdn(calendar::rdn_from_ymd(year, month, last))
    }

    /// Apply an [`Adjuster`]; equivalent to `adjuster.apply(self)`.
    ///
    /// ```
    /// use moment_engine::{adjuster, Instant, Ordinal, Weekday};
    ///
    /// let jan = Instant::from_ymd(2013, 1, 1).unwrap();
    /// let mlk = jan
    ///     .with(adjuster::nth_day_of_week_in_month(Ordinal::Third, Weekday::Monday))
    ///     .unwrap();
    /// assert_eq!(mlk, Instant::from_ymd(2013, 1, 21).unwrap());
    /// ```
    pub fn with<A: Adjuster>(self, adjuster: A) -> Result<Self> {
        adjuster.apply(self)
    }
}

// ── Comparison ──────────────────────────────────────────────────────────────

impl Instant {
    /// Order by absolute point in time; the offset is irrelevant.
    ///
    /// Usable directly as `instants.sort_by(Instant::compare_instant)`.
    pub fn compare_instant(&self, other: &Instant) -> Ordering {
        self.utc_rd_seconds()
            .cmp(&other.utc_rd_seconds())
            .then(self.nanosecond.cmp(&other.nanosecond))
    }

    /// Order by local wall-clock representation, ignoring whether the two
    /// values are simultaneous.
    pub fn compare_local(&self, other: &Instant) -> Ordering {
        self.seconds
            .cmp(&other.seconds)
            .then(self.nanosecond.cmp(&other.nanosecond))
    }

    /// True when `self` is strictly earlier in absolute time.
    pub fn is_before(&self, other: &Instant) -> bool {
        self.compare_instant(other) == Ordering::Less
    }

    /// True when `self` is strictly later in absolute time.
    pub fn is_after(&self, other: &Instant) -> bool {
        self.compare_instant(other) == Ordering::Greater
    }

    /// True when both denote the same absolute instant, whatever their offsets.
    pub fn is_simultaneous(&self, other: &Instant) -> bool {
        self.compare_instant(other) == Ordering::Equal
    }
}

// ── Serialization ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct EpochRepr {
    epoch_seconds: i64,
    nanosecond: u32,
    offset: i32,
}

impl From<Instant> for EpochRepr {
    fn from(instant: Instant) -> Self {
        EpochRepr {
            epoch_seconds: instant.epoch_seconds(),
            nanosecond: instant.nanosecond(),
            offset: instant.offset(),
        }
    }
}

impl TryFrom<EpochRepr> for Instant {
    type Error = MomentError;

    /// Near the ends of the range the UTC epoch value of a valid instant can
    /// lie outside the epoch bounds, so only the local time is range-checked.
    fn try_from(repr: EpochRepr) -> Result<Self> {
        let nanosecond = check_nanosecond(i64::from(repr.nanosecond))?;
        let offset = check_offset(i64::from(repr.offset))?;
        let seconds = add_seconds(repr.epoch_seconds, UNIX_EPOCH)?;
        Instant::from_utc(seconds, nanosecond, offset)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
