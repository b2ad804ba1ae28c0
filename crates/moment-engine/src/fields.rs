//! Field replacement: `with_component` and the named setters built on it.
//!
//! Date components replace the local date and keep the time of day; time
//! components shift the local second count and keep the date. Year and month
//! replacement clamp the day of month to the target month, every other
//! component rejects values that do not exist in the current period.

use crate::calendar;
use crate::component::Component;
use crate::error::Result;
use crate::instant::Instant;
use crate::range::add_seconds;
use crate::weekday::Weekday;

impl Instant {
    /// Replace one semantic field, holding the others fixed.
    ///
    /// # Errors
    ///
    /// - [`MomentError::InvalidComponent`](crate::MomentError::InvalidComponent)
    ///   if `value` is outside the component's range, or does not exist in the
    ///   current period (day 30 of February, week 53 of a 52-week year).
    /// - [`MomentError::OutOfRange`](crate::MomentError::OutOfRange) if the
    ///   value is legal but the result leaves years 1-9999.
    ///
    /// # Examples
    ///
    /// ```
    /// use moment_engine::{Component, Instant, MomentError};
    ///
    /// let t = Instant::from_ymd(2012, 1, 31).unwrap();
    /// let feb = t.with_component(Component::MonthOfYear, 2).unwrap();
    /// assert_eq!(feb.day_of_month(), 29);
    ///
    /// let err = feb.with_component(Component::DayOfMonth, 30).unwrap_err();
    /// assert!(matches!(err, MomentError::InvalidComponent { .. }));
    /// ```
    pub fn with_component(self, component: Component, value: i64) -> Result<Self> {
        let v = component.check(value)?;
        let rdn = self.local_rdn();
        let local = self.local_rd_seconds();

        match component {
            Component::Year => {
                let (_, month, day) = calendar::ymd_from_rdn(rdn);
                let year = v as i32;
                let day = day.min(calendar::days_in_month(year, month));
                self.with_local_rdn(calendar::rdn_from_ymd(year, month, day))
            }
            Component::MonthOfYear => {
                let (year, _, day) = calendar::ymd_from_rdn(rdn);
                let month = v as u32;
                let day = day.min(calendar::days_in_month(year, month));
                self.with_local_rdn(calendar::rdn_from_ymd(year, month, day))
            }
            Component::WeekOfYear => {
                let (year, _, dow) = calendar::ywd_from_rdn(rdn);
                component.check_within(v, i64::from(calendar::weeks_in_year(year)))?;
                self.with_local_rdn(calendar::rdn_from_ywd(year, v as u32, dow))
            }
            Component::DayOfYear => {
                let (year, _) = calendar::yd_from_rdn(rdn);
                component.check_within(v, i64::from(calendar::days_in_year(year)))?;
                self.with_local_rdn(calendar::rdn_from_yd(year, v as u32))
            }
            Component::DayOfQuarter => {
                let (year, quarter, _) = calendar::yqd_from_rdn(rdn);
                component.check_within(v, i64::from(calendar::days_in_quarter(year, quarter)))?;
                self.with_local_rdn(calendar::rdn_from_yqd(year, quarter, v as u32))
            }
            Component::DayOfMonth => {
                let (year, month, _) = calendar::ymd_from_rdn(rdn);
                component.check_within(v, i64::from(calendar::days_in_month(year, month)))?;
                self.with_local_rdn(calendar::rdn_from_ymd(year, month, v as u32))
            }
            Component::DayOfWeek => {
                let dow = i64::from(calendar::day_of_week(rdn));
                self.with_local_rdn(rdn - (dow - v))
            }
            Component::HourOfDay => {
                self.with_local_seconds(local + (v - i64::from(self.hour())) * 3600)
            }
            Component::MinuteOfHour => {
                self.with_local_seconds(local + (v - i64::from(self.minute())) * 60)
            }
            Component::MinuteOfDay => {
                self.with_local_seconds(local + (v - i64::from(self.minute_of_day())) * 60)
            }
            Component::SecondOfMinute => {
                self.with_local_seconds(local + (v - i64::from(self.second())))
            }
            Component::SecondOfDay => {
                self.with_local_seconds(local + (v - i64::from(self.second_of_day())))
            }
            Component::MilliOfSecond => {
                Instant::from_local(local, (v * 1_000_000) as i32, self.offset())
            }
            Component::MilliOfDay => {
                let seconds = add_seconds(local, v / 1000 - i64::from(self.second_of_day()))?;
                Instant::from_local(seconds, ((v % 1000) * 1_000_000) as i32, self.offset())
            }
            Component::MicroOfSecond => Instant::from_local(local, (v * 1000) as i32, self.offset()),
            Component::NanoOfSecond => Instant::from_local(local, v as i32, self.offset()),
        }
    }

    fn with_local_seconds(self, seconds: i64) -> Result<Self> {
        Instant::from_local(seconds, self.nanosecond() as i32, self.offset())
    }

    /// Move to the given weekday within the current ISO week (Monday-Sunday).
    pub fn with_weekday(self, weekday: Weekday) -> Result<Self> {
        self.with_component(Component::DayOfWeek, i64::from(weekday.number()))
    }
}

macro_rules! named_setter {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $component:ident) => {
        impl Instant {
            $(#[$doc])*
            pub fn $name(self, value: $ty) -> Result<Self> {
                self.with_component(Component::$component, i64::from(value))
            }
        }
    };
}

named_setter!(
    /// Replace the year, clamping 29 February to the 28th in common years.
    with_year, i32, Year
);
named_setter!(
    /// Replace the month, clamping the day to the end of the target month.
    with_month, u32, MonthOfYear
);
named_setter!(with_week, u32, WeekOfYear);
named_setter!(with_day_of_year, u32, DayOfYear);
named_setter!(with_day_of_quarter, u32, DayOfQuarter);
named_setter!(
    /// Replace the day of month; never clamps.
    with_day_of_month, u32, DayOfMonth
);
named_setter!(with_hour, u32, HourOfDay);
named_setter!(with_minute, u32, MinuteOfHour);
named_setter!(with_second, u32, SecondOfMinute);
named_setter!(with_millisecond, u32, MilliOfSecond);
named_setter!(with_microsecond, u32, MicroOfSecond);
named_setter!(with_nanosecond, u32, NanoOfSecond);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MomentError;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32, ns: u32) -> Instant {
        Instant::from_fields(y, m, d, h, mi, s, ns, 120).unwrap()
    }

    #[test]
    fn test_with_year_clamps_leap_day() {
        let t = at(2012, 2, 29, 10, 0, 0, 0);
        assert_eq!(t.with_year(2013).unwrap(), at(2013, 2, 28, 10, 0, 0, 0));
        assert_eq!(t.with_year(2016).unwrap(), at(2016, 2, 29, 10, 0, 0, 0));
    }

    #[test]
    fn test_with_year_rejects_out_of_range_value() {
        let t = at(2012, 2, 29, 10, 0, 0, 0);
        assert!(matches!(
            t.with_year(10_000),
            Err(MomentError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn test_with_month_clamps_day() {
        let t = at(2013, 3, 31, 8, 0, 0, 0);
        assert_eq!(t.with_month(4).unwrap(), at(2013, 4, 30, 8, 0, 0, 0));
        assert_eq!(t.with_month(2).unwrap(), at(2013, 2, 28, 8, 0, 0, 0));
    }

    #[test]
    fn test_with_day_of_month_does_not_clamp() {
        let t = at(2013, 2, 10, 8, 0, 0, 0);
        let err = t.with_day_of_month(30).unwrap_err();
        assert_eq!(
            err,
            MomentError::InvalidComponent {
                component: "day_of_month",
                value: 30,
                min: 1,
                max: 28
            }
        );
        assert_eq!(t.with_day_of_month(28).unwrap(), at(2013, 2, 28, 8, 0, 0, 0));
    }

    #[test]
    fn test_with_week_keeps_weekday() {
        // Wednesday of ISO week 20, 2024.
        let t = at(2024, 5, 15, 6, 0, 0, 0);
        let moved = t.with_week(1).unwrap();
        assert_eq!(moved, at(2024, 1, 3, 6, 0, 0, 0));
        assert_eq!(moved.weekday(), Weekday::Wednesday);
        assert!(matches!(
            t.with_week(53),
            Err(MomentError::InvalidComponent { max: 52, .. })
        ));
    }

    #[test]
    fn test_with_day_of_year_and_quarter() {
        let t = at(2023, 7, 4, 0, 0, 0, 0);
        assert_eq!(t.with_day_of_year(1).unwrap(), at(2023, 1, 1, 0, 0, 0, 0));
        assert!(t.with_day_of_year(366).is_err());
        assert_eq!(t.with_day_of_quarter(92).unwrap(), at(2023, 9, 30, 0, 0, 0, 0));
        let q1 = at(2023, 2, 1, 0, 0, 0, 0);
        assert!(matches!(
            q1.with_day_of_quarter(91),
            Err(MomentError::InvalidComponent { max: 90, .. })
        ));
    }

    #[test]
    fn test_with_day_of_week_moves_within_iso_week() {
        // Friday 2013-06-14.
        let t = at(2013, 6, 14, 9, 30, 0, 0);
        assert_eq!(t.with_weekday(Weekday::Monday).unwrap(), at(2013, 6, 10, 9, 30, 0, 0));
        assert_eq!(t.with_weekday(Weekday::Sunday).unwrap(), at(2013, 6, 16, 9, 30, 0, 0));
    }

    #[test]
    fn test_with_day_of_week_past_year_9999_is_out_of_range() {
        // 9999-12-31 is a Friday; its Sunday is in year 10000.
        let t = Instant::from_ymd(9999, 12, 31).unwrap();
        assert!(matches!(
            t.with_weekday(Weekday::Sunday),
            Err(MomentError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_time_setters() {
        let t = at(2020, 1, 1, 10, 20, 30, 123_456_789);
        assert_eq!(t.with_hour(0).unwrap(), at(2020, 1, 1, 0, 20, 30, 123_456_789));
        assert_eq!(t.with_minute(59).unwrap(), at(2020, 1, 1, 10, 59, 30, 123_456_789));
        assert_eq!(t.with_second(0).unwrap(), at(2020, 1, 1, 10, 20, 0, 123_456_789));
        assert_eq!(
            t.with_component(Component::MinuteOfDay, 61).unwrap(),
            at(2020, 1, 1, 1, 1, 30, 123_456_789)
        );
        assert_eq!(
            t.with_component(Component::SecondOfDay, 86_399).unwrap(),
            at(2020, 1, 1, 23, 59, 59, 123_456_789)
        );
        assert!(matches!(
            t.with_hour(24),
            Err(MomentError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn test_fraction_setters_replace_whole_fraction() {
        let t = at(2020, 1, 1, 10, 20, 30, 123_456_789);
        assert_eq!(t.with_millisecond(5).unwrap().nanosecond(), 5_000_000);
        assert_eq!(t.with_microsecond(5).unwrap().nanosecond(), 5_000);
        assert_eq!(t.with_nanosecond(5).unwrap().nanosecond(), 5);
    }

    #[test]
    fn test_milli_of_day() {
        let t = at(2020, 1, 1, 10, 20, 30, 123_456_789);
        let m = t.with_component(Component::MilliOfDay, 3_723_004).unwrap();
        assert_eq!(m, at(2020, 1, 1, 1, 2, 3, 4_000_000));
        let end = t.with_component(Component::MilliOfDay, 86_400_000).unwrap();
        assert_eq!(end, at(2020, 1, 2, 0, 0, 0, 0));
    }
}
