//! Reusable date rules applied through [`Instant::with`].
//!
//! An [`Adjuster`] maps one instant to another. Every rule here is a small
//! stateless value built only on the public `Instant` operations; each keeps
//! the time of day and the offset and changes the date alone. Closures of
//! type `Fn(Instant) -> Result<Instant>` are adjusters too, so ad-hoc rules
//! compose with the named ones:
//!
//! ```
//! use moment_engine::{adjuster, Instant, Ordinal, Weekday};
//!
//! // US Thanksgiving, and the Friday after it.
//! let nov = Instant::from_ymd(1997, 11, 1).unwrap();
//! let thanksgiving = nov
//!     .with(adjuster::nth_day_of_week_in_month(Ordinal::Fourth, Weekday::Thursday))
//!     .unwrap();
//! let friday = thanksgiving.with(|t: Instant| t.plus_days(1)).unwrap();
//! assert_eq!(friday, Instant::from_ymd(1997, 11, 28).unwrap());
//! ```

use crate::calendar;
use crate::error::Result;
use crate::instant::Instant;
use crate::weekday::{Ordinal, Weekday};

/// A rule mapping one instant to another.
pub trait Adjuster {
    /// # Errors
    ///
    /// Whatever the underlying `Instant` operations report, typically
    /// [`MomentError::OutOfRange`](crate::MomentError::OutOfRange) when the
    /// result leaves years 1-9999.
    fn apply(&self, instant: Instant) -> Result<Instant>;
}

impl<F> Adjuster for F
where
    F: Fn(Instant) -> Result<Instant>,
{
    fn apply(&self, instant: Instant) -> Result<Instant> {
        self(instant)
    }
}

/// The `ordinal` occurrence of `weekday` in the instant's month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NthDayOfWeekInMonth {
    pub ordinal: Ordinal,
    pub weekday: Weekday,
}

impl Adjuster for NthDayOfWeekInMonth {
    fn apply(&self, instant: Instant) -> Result<Instant> {
        let (year, month) = (instant.year(), instant.month());
        let wanted = self.weekday.number();

        let day = match self.ordinal {
            Ordinal::Last => {
                let last = calendar::days_in_month(year, month);
                let last_dow = calendar::day_of_week(calendar::rdn_from_ymd(year, month, last));
                last - (last_dow + 7 - wanted) % 7
            }
            ordinal => {
                let first_dow = calendar::day_of_week(calendar::rdn_from_ymd(year, month, 1));
                let first = 1 + (wanted + 7 - first_dow) % 7;
                first + 7 * (ordinal.value() as u32 - 1)
            }
        };
        instant.with_day_of_month(day)
    }
}

/// Saturday moves back to Friday, Sunday forward to Monday; weekdays stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NearestWorkday;

impl Adjuster for NearestWorkday {
    fn apply(&self, instant: Instant) -> Result<Instant> {
        match instant.weekday() {
            Weekday::Saturday => instant.minus_days(1),
            Weekday::Sunday => instant.plus_days(1),
            _ => Ok(instant),
        }
    }
}

/// The next `weekday` strictly after the instant's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextDayOfWeek(pub Weekday);

impl Adjuster for NextDayOfWeek {
    fn apply(&self, instant: Instant) -> Result<Instant> {
        match days_until(instant, self.0) {
            0 => instant.plus_days(7),
            n => instant.plus_days(n),
        }
    }
}

/// The instant's date if it already falls on `weekday`, else the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextOrSameDayOfWeek(pub Weekday);

impl Adjuster for NextOrSameDayOfWeek {
    fn apply(&self, instant: Instant) -> Result<Instant> {
        instant.plus_days(days_until(instant, self.0))
    }
}

/// The previous `weekday` strictly before the instant's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviousDayOfWeek(pub Weekday);

impl Adjuster for PreviousDayOfWeek {
    fn apply(&self, instant: Instant) -> Result<Instant> {
        match days_since(instant, self.0) {
            0 => instant.minus_days(7),
            n => instant.minus_days(n),
        }
    }
}

/// The instant's date if it already falls on `weekday`, else the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviousOrSameDayOfWeek(pub Weekday);

impl Adjuster for PreviousOrSameDayOfWeek {
    fn apply(&self, instant: Instant) -> Result<Instant> {
        instant.minus_days(days_since(instant, self.0))
    }
}

/// [`NthDayOfWeekInMonth`] with [`Ordinal::First`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FirstDayOfWeekInMonth(pub Weekday);

impl Adjuster for FirstDayOfWeekInMonth {
    fn apply(&self, instant: Instant) -> Result<Instant> {
        nth_day_of_week_in_month(Ordinal::First, self.0).apply(instant)
    }
}

/// [`NthDayOfWeekInMonth`] with [`Ordinal::Last`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastDayOfWeekInMonth(pub Weekday);

impl Adjuster for LastDayOfWeekInMonth {
    fn apply(&self, instant: Instant) -> Result<Instant> {
        nth_day_of_week_in_month(Ordinal::Last, self.0).apply(instant)
    }
}

/// Easter Sunday (Gregorian computus) of the instant's year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WesternEasterSunday;

impl Adjuster for WesternEasterSunday {
    fn apply(&self, instant: Instant) -> Result<Instant> {
        let (month, day) = calendar::western_easter(instant.year());
        instant.with_month(month)?.with_day_of_month(day)
    }
}

/// Days forward from the instant's weekday to `weekday`, 0-6.
fn days_until(instant: Instant, weekday: Weekday) -> i64 {
    i64::from((weekday.number() + 7 - instant.day_of_week()) % 7)
}

/// Days back from the instant's weekday to `weekday`, 0-6.
fn days_since(instant: Instant, weekday: Weekday) -> i64 {
    i64::from((instant.day_of_week() + 7 - weekday.number()) % 7)
}

/// Rule for the `ordinal` `weekday` of the month, e.g. the third Monday.
///
/// Applying it fails with `InvalidComponent` when a fifth occurrence does not
/// exist in the month.
pub fn nth_day_of_week_in_month(ordinal: Ordinal, weekday: Weekday) -> NthDayOfWeekInMonth {
    NthDayOfWeekInMonth { ordinal, weekday }
}

/// Rule moving Saturday to Friday and Sunday to Monday. Fails with
/// `OutOfRange` only at the ends of year 1 and year 9999.
pub fn nearest_workday() -> NearestWorkday {
    NearestWorkday
}

/// Rule for the next `weekday` strictly after the date.
pub fn next(weekday: Weekday) -> NextDayOfWeek {
    NextDayOfWeek(weekday)
}

/// Rule for the date itself or the next `weekday`.
pub fn next_or_same(weekday: Weekday) -> NextOrSameDayOfWeek {
    NextOrSameDayOfWeek(weekday)
}

/// Rule for the previous `weekday` strictly before the date.
pub fn previous(weekday: Weekday) -> PreviousDayOfWeek {
    PreviousDayOfWeek(weekday)
}

/// Rule for the date itself or the previous `weekday`.
pub fn previous_or_same(weekday: Weekday) -> PreviousOrSameDayOfWeek {
    PreviousOrSameDayOfWeek(weekday)
}

/// Rule for the first `weekday` of the month.
pub fn first_in_month(weekday: Weekday) -> FirstDayOfWeekInMonth {
    FirstDayOfWeekInMonth(weekday)
}

/// Rule for the last `weekday` of the month.
pub fn last_in_month(weekday: Weekday) -> LastDayOfWeekInMonth {
    LastDayOfWeekInMonth(weekday)
}

/// Rule for Easter Sunday of the instant's year.
pub fn western_easter_sunday() -> WesternEasterSunday {
    WesternEasterSunday
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MomentError;

    fn ymd(y: i32, m: u32, d: u32) -> Instant {
        Instant::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_third_monday_of_january_2013() {
        let t = ymd(2013, 1, 9).with(nth_day_of_week_in_month(Ordinal::Third, Weekday::Monday));
        assert_eq!(t.unwrap(), ymd(2013, 1, 21));
    }

    #[test]
    fn test_last_monday_of_may_2013() {
        let t = ymd(2013, 5, 1).with(nth_day_of_week_in_month(Ordinal::Last, Weekday::Monday));
        assert_eq!(t.unwrap(), ymd(2013, 5, 27));
    }

    #[test]
    fn test_first_occurrence_on_the_first() {
        // 2024-09-01 is a Sunday.
        let t = ymd(2024, 9, 20);
        assert_eq!(t.with(first_in_month(Weekday::Sunday)).unwrap(), ymd(2024, 9, 1));
        assert_eq!(t.with(first_in_month(Weekday::Monday)).unwrap(), ymd(2024, 9, 2));
    }

    #[test]
    fn test_last_occurrence_on_the_last_day() {
        // 2013-05-31 is a Friday; 2024-02-29 a Thursday.
        assert_eq!(ymd(2013, 5, 2).with(last_in_month(Weekday::Friday)).unwrap(), ymd(2013, 5, 31));
        assert_eq!(ymd(2024, 2, 2).with(last_in_month(Weekday::Friday)).unwrap(), ymd(2024, 2, 23));
        assert_eq!(ymd(2024, 2, 2).with(last_in_month(Weekday::Thursday)).unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_every_fourth_occurrence_exists() {
        for month in 1..=12 {
            for weekday in Weekday::ALL {
                let t = ymd(2023, month, 15)
                    .with(nth_day_of_week_in_month(Ordinal::Fourth, weekday))
                    .unwrap();
                assert_eq!(t.weekday(), weekday);
                assert!((22..=28).contains(&t.day_of_month()));
            }
        }
    }

    #[test]
    fn test_nearest_workday() {
        // 2015-01-01 Thursday, 01-03 Saturday, 01-04 Sunday.
        assert_eq!(ymd(2015, 1, 1).with(nearest_workday()).unwrap(), ymd(2015, 1, 1));
        assert_eq!(ymd(2015, 1, 3).with(nearest_workday()).unwrap(), ymd(2015, 1, 2));
        assert_eq!(ymd(2015, 1, 4).with(nearest_workday()).unwrap(), ymd(2015, 1, 5));
    }

    #[test]
    fn test_nearest_workday_at_range_edge() {
        // 9999-12-25 is a Saturday.
        let t = ymd(9999, 12, 25);
        assert_eq!(t.with(nearest_workday()).unwrap(), ymd(9999, 12, 24));
    }

    #[test]
    fn test_next_and_previous() {
        let monday = ymd(2013, 1, 21);
        assert_eq!(monday.with(next(Weekday::Monday)).unwrap(), ymd(2013, 1, 28));
        assert_eq!(monday.with(next_or_same(Weekday::Monday)).unwrap(), monday);
        assert_eq!(monday.with(next(Weekday::Wednesday)).unwrap(), ymd(2013, 1, 23));
        assert_eq!(monday.with(previous(Weekday::Monday)).unwrap(), ymd(2013, 1, 14));
        assert_eq!(monday.with(previous_or_same(Weekday::Monday)).unwrap(), monday);
        assert_eq!(monday.with(previous(Weekday::Friday)).unwrap(), ymd(2013, 1, 18));
    }

    #[test]
    fn test_next_past_range_is_out_of_range() {
        // 9999-12-31 is a Friday.
        let last = ymd(9999, 12, 31);
        assert!(matches!(
            last.with(next(Weekday::Monday)),
            Err(MomentError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_western_easter() {
        for (year, month, day) in [(2019, 4, 21), (2024, 3, 31), (2025, 4, 20)] {
            let easter = ymd(year, 7, 1).with(western_easter_sunday()).unwrap();
            assert_eq!(easter, ymd(year, month, day));
            assert_eq!(easter.weekday(), Weekday::Sunday);
        }
    }

    #[test]
    fn test_western_easter_from_month_ends() {
        // Start days that do not exist in March or April.
        let easter = ymd(2024, 1, 31).with(western_easter_sunday()).unwrap();
        assert_eq!(easter, ymd(2024, 3, 31));
        let easter = ymd(2019, 12, 31).with(western_easter_sunday()).unwrap();
        assert_eq!(easter, ymd(2019, 4, 21));
        let easter = ymd(9999, 12, 31).with(western_easter_sunday()).unwrap();
        assert_eq!(easter.weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_adjusters_keep_time_and_offset() {
        let t = Instant::from_fields(2013, 1, 9, 17, 45, 12, 99, -480).unwrap();
        let mlk = t.with(nth_day_of_week_in_month(Ordinal::Third, Weekday::Monday)).unwrap();
        assert_eq!(mlk, Instant::from_fields(2013, 1, 21, 17, 45, 12, 99, -480).unwrap());
        let easter = t.with(western_easter_sunday()).unwrap();
        assert_eq!((easter.hour(), easter.nanosecond(), easter.offset()), (17, 99, -480));
    }

    #[test]
    fn test_closure_adjuster_and_chaining() {
        let noon_friday =
            |t: Instant| -> Result<Instant> { t.with(previous_or_same(Weekday::Friday))?.at_noon() };
        let t = ymd(2015, 1, 4).with(noon_friday).unwrap();
        assert_eq!(t, Instant::from_fields(2015, 1, 2, 12, 0, 0, 0, 0).unwrap());
    }
}
