//! Text and JSON rendering of instants.

use moment_engine::Instant;
use serde::Serialize;

/// `YYYY-MM-DD` of the local date.
pub fn iso_date(t: Instant) -> String {
    format!("{:04}-{:02}-{:02}", t.year(), t.month(), t.day_of_month())
}

/// Extended ISO 8601 with the shortest exact fraction (none, 3, 6 or 9
/// digits) and `Z` for offset zero.
pub fn iso_8601(t: Instant) -> String {
    let mut out = format!(
        "{}T{:02}:{:02}:{:02}",
        iso_date(t),
        t.hour(),
        t.minute(),
        t.second()
    );

    let ns = t.nanosecond();
    if ns != 0 {
        if ns % 1_000_000 == 0 {
            out.push_str(&format!(".{:03}", ns / 1_000_000));
        } else if ns % 1000 == 0 {
            out.push_str(&format!(".{:06}", ns / 1000));
        } else {
            out.push_str(&format!(".{ns:09}"));
        }
    }

    match t.offset() {
        0 => out.push('Z'),
        offset => {
            let sign = if offset < 0 { '-' } else { '+' };
            let abs = offset.unsigned_abs();
            out.push_str(&format!("{sign}{:02}:{:02}", abs / 60, abs % 60));
        }
    }
    out
}

/// Every component of an instant, as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct Breakdown {
    pub iso: String,
    pub epoch_seconds: i64,
    pub nanosecond: u32,
    pub offset: i32,
    pub year: i32,
    pub quarter: u32,
    pub month: u32,
    pub week_year: i32,
    pub week: u32,
    pub day_of_year: u32,
    pub day_of_quarter: u32,
    pub day_of_month: u32,
    pub day_of_week: u32,
    pub weekday: &'static str,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub microsecond: u32,
    pub minute_of_day: u32,
    pub second_of_day: u32,
    pub millisecond_of_day: u32,
    pub length_of_year: u32,
    pub length_of_quarter: u32,
    pub length_of_month: u32,
    pub length_of_week_year: u32,
    pub jd: f64,
    pub mjd: f64,
    pub rd: f64,
}

impl From<Instant> for Breakdown {
    fn from(t: Instant) -> Self {
        Breakdown {
            iso: iso_8601(t),
            epoch_seconds: t.epoch_seconds(),
            nanosecond: t.nanosecond(),
            offset: t.offset(),
            year: t.year(),
            quarter: t.quarter(),
            month: t.month(),
            week_year: t.week_year(),
            week: t.week(),
            day_of_year: t.day_of_year(),
            day_of_quarter: t.day_of_quarter(),
            day_of_month: t.day_of_month(),
            day_of_week: t.day_of_week(),
            weekday: t.weekday().name(),
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            millisecond: t.millisecond(),
            microsecond: t.microsecond(),
            minute_of_day: t.minute_of_day(),
            second_of_day: t.second_of_day(),
            millisecond_of_day: t.millisecond_of_day(),
            length_of_year: t.length_of_year(),
            length_of_quarter: t.length_of_quarter(),
            length_of_month: t.length_of_month(),
            length_of_week_year: t.length_of_week_year(),
            jd: t.jd(),
            mjd: t.mjd(),
            rd: t.rd(),
        }
    }
}
