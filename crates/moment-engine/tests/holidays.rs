//! A holiday table built purely from the public construction, field and
//! adjuster operations.

use moment_engine::adjuster::{last_in_month, nearest_workday, nth_day_of_week_in_month};
use moment_engine::{Instant, Ordinal, Result, Weekday};

fn us_federal_holidays(year: i32) -> Result<Vec<Instant>> {
    let jan1 = Instant::from_fields(year, 1, 1, 0, 0, 0, 0, 0)?;
    let on = |month: u32, day: u32| -> Result<Instant> {
        jan1.with_month(month)?.with_day_of_month(day)?.with(nearest_workday())
    };
    let nth = |month: u32, ordinal: Ordinal, weekday: Weekday| -> Result<Instant> {
        jan1.with_month(month)?
            .with(nth_day_of_week_in_month(ordinal, weekday))
    };

    Ok(vec![
        on(1, 1)?,
        nth(1, Ordinal::Third, Weekday::Monday)?,
        nth(2, Ordinal::Third, Weekday::Monday)?,
        jan1.with_month(5)?.with(last_in_month(Weekday::Monday))?,
        on(7, 4)?,
        nth(9, Ordinal::First, Weekday::Monday)?,
        nth(10, Ordinal::Second, Weekday::Monday)?,
        on(11, 11)?,
        nth(11, Ordinal::Fourth, Weekday::Thursday)?,
        on(12, 25)?,
    ])
}

fn iso_date(t: &Instant) -> String {
    format!("{:04}-{:02}-{:02}", t.year(), t.month(), t.day_of_month())
}

#[test]
fn test_us_federal_holidays_1997() {
    let dates: Vec<String> = us_federal_holidays(1997).unwrap().iter().map(iso_date).collect();
    assert_eq!(
        dates,
        [
            "1997-01-01",
            "1997-01-20",
            "1997-02-17",
            "1997-05-26",
            "1997-07-04",
            "1997-09-01",
            "1997-10-13",
            "1997-11-11",
            "1997-11-27",
            "1997-12-25",
        ]
    );
}

#[test]
fn test_holidays_are_sorted_by_instant() {
    let mut holidays = us_federal_holidays(2021).unwrap();
    let original = holidays.clone();
    holidays.sort_by(Instant::compare_instant);
    assert_eq!(holidays, original);
}

#[test]
fn test_observed_shift_in_2021() {
    // 2021-07-04 is a Sunday, 2021-12-25 a Saturday.
    let holidays = us_federal_holidays(2021).unwrap();
    assert_eq!(iso_date(&holidays[4]), "2021-07-05");
    assert_eq!(iso_date(&holidays[9]), "2021-12-24");
    for h in &holidays {
        assert!(!h.weekday().is_weekend(), "{}", iso_date(h));
    }
}
