//! Semantic fields that [`Instant::with_component`](crate::Instant::with_component)
//! can replace.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MomentError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Year,
    MonthOfYear,
    WeekOfYear,
    DayOfYear,
    DayOfQuarter,
    DayOfMonth,
    DayOfWeek,
    HourOfDay,
    MinuteOfHour,
    MinuteOfDay,
    SecondOfMinute,
    SecondOfDay,
    MilliOfSecond,
    MilliOfDay,
    MicroOfSecond,
    NanoOfSecond,
}

impl Component {
    pub const fn name(self) -> &'static str {
        match self {
            Component::Year => "year",
            Component::MonthOfYear => "month",
            Component::WeekOfYear => "week",
            Component::DayOfYear => "day_of_year",
            Component::DayOfQuarter => "day_of_quarter",
            Component::DayOfMonth => "day_of_month",
            Component::DayOfWeek => "day_of_week",
            Component::HourOfDay => "hour",
            Component::MinuteOfHour => "minute",
            Component::MinuteOfDay => "minute_of_day",
            Component::SecondOfMinute => "second",
            Component::SecondOfDay => "second_of_day",
            Component::MilliOfSecond => "millisecond",
            Component::MilliOfDay => "millisecond_of_day",
            Component::MicroOfSecond => "microsecond",
            Component::NanoOfSecond => "nanosecond",
        }
    }

    /// The widest inclusive range the component can ever take.
    ///
    /// Date components are further limited by the period they live in
    /// (month length, year length, number of ISO weeks); those checks happen
    /// when the value is applied.
    pub const fn range(self) -> (i64, i64) {
        match self {
            Component::Year => (1, 9999),
            Component::MonthOfYear => (1, 12),
            Component::WeekOfYear => (1, 53),
            Component::DayOfYear => (1, 366),
            Component::DayOfQuarter => (1, 92),
            Component::DayOfMonth => (1, 31),
            Component::DayOfWeek => (1, 7),
            Component::HourOfDay => (0, 23),
            Component::MinuteOfHour => (0, 59),
            Component::MinuteOfDay => (0, 1439),
            Component::SecondOfMinute => (0, 59),
            Component::SecondOfDay => (0, 86_399),
            Component::MilliOfSecond => (0, 999),
            // 86_400_000 designates the midnight that ends the day.
            Component::MilliOfDay => (0, 86_400_000),
            Component::MicroOfSecond => (0, 999_999),
            Component::NanoOfSecond => (0, 999_999_999),
        }
    }

    pub(crate) fn check(self, value: i64) -> Result<i64> {
        let (min, max) = self.range();
        if value < min || value > max {
            return Err(MomentError::component(self.name(), value, min, max));
        }
        Ok(value)
    }

    /// Check `value` against a period-dependent upper bound.
    pub(crate) fn check_within(self, value: i64, max: i64) -> Result<i64> {
        let (min, _) = self.range();
        if value > max {
            return Err(MomentError::component(self.name(), value, min, max));
        }
        Ok(value)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
