//! US federal holidays (5 U.S.C. 6103) built on the engine's adjusters.
//!
//! Fixed-date holidays falling on a weekend are observed on the nearest
//! workday, so New Year's Day can be observed on 31 December of the previous
//! year. Inauguration Day is a holiday only in the Washington D.C. area, but
//! is listed because the federal calendar carries it.

use anyhow::{Context, Result};
use moment_engine::adjuster::{last_in_month, nearest_workday, nth_day_of_week_in_month};
use moment_engine::{Instant, Ordinal, Weekday};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub date: Instant,
    pub name: &'static str,
}

/// First year Juneteenth was observed.
const JUNETEENTH_SINCE: i32 = 2021;

pub fn us_federal(year: i32) -> Result<Vec<Holiday>> {
    let jan1 = Instant::from_fields(year, 1, 1, 0, 0, 0, 0, 0)
        .with_context(|| format!("year {year} is not supported"))?;

    let observed = |month: u32, day: u32| -> Result<Instant> {
        Ok(jan1
            .with_month(month)?
            .with_day_of_month(day)?
            .with(nearest_workday())?)
    };
    let nth = |month: u32, ordinal: Ordinal, weekday: Weekday| -> Result<Instant> {
        Ok(jan1
            .with_month(month)?
            .with(nth_day_of_week_in_month(ordinal, weekday))?)
    };

    let mlk = nth(1, Ordinal::Third, Weekday::Monday)?;
    let mut holidays = vec![
        Holiday {
            date: observed(1, 1)?,
            name: "New Year's Day",
        },
        Holiday {
            date: mlk,
            name: "Birthday of Martin Luther King, Jr.",
        },
        Holiday {
            date: nth(2, Ordinal::Third, Weekday::Monday)?,
            name: "Washington's Birthday",
        },
        Holiday {
            date: jan1.with_month(5)?.with(last_in_month(Weekday::Monday))?,
            name: "Memorial Day",
        },
        Holiday {
            date: observed(7, 4)?,
            name: "Independence Day",
        },
        Holiday {
            date: nth(9, Ordinal::First, Weekday::Monday)?,
            name: "Labor Day",
        },
        Holiday {
            date: nth(10, Ordinal::Second, Weekday::Monday)?,
            name: "Columbus Day",
        },
        Holiday {
            date: observed(11, 11)?,
            name: "Veterans Day",
        },
        Holiday {
            date: nth(11, Ordinal::Fourth, Weekday::Thursday)?,
            name: "Thanksgiving Day",
        },
        Holiday {
            date: observed(12, 25)?,
            name: "Christmas Day",
        },
    ];

    if year >= JUNETEENTH_SINCE {
        holidays.push(Holiday {
            date: observed(6, 19)?,
            name: "Juneteenth National Independence Day",
        });
    }

    if year % 4 == 1 {
        let mut inauguration = jan1.with_day_of_month(20)?;
        if inauguration.weekday() == Weekday::Sunday {
            inauguration = inauguration.plus_days(1)?;
        }
        if inauguration == mlk {
            debug!(year, "Inauguration Day coincides with Martin Luther King, Jr. Day");
        } else {
            holidays.push(Holiday {
                date: inauguration,
                name: "Inauguration Day",
            });
        }
    }

    holidays.sort_by(|a, b| a.date.compare_instant(&b.date));
    Ok(holidays)
}
