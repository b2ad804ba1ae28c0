//! Proleptic Gregorian day-number math.
//!
//! Days are counted as Rata Die numbers: day 1 is Monday 0001-01-01. The
//! conversions accept any year representable as `i32` (floor division is used
//! throughout), so callers can build a candidate date first and range-check the
//! resulting second count afterwards.

const DAYS_BEFORE_MONTH: [[u32; 13]; 2] = [
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334],
    [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335],
];

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_100_YEARS: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Number of days in `quarter` (1-4) of `year`.
pub fn days_in_quarter(year: i32, quarter: u32) -> u32 {
    match quarter {
        1 if is_leap_year(year) => 91,
        1 => 90,
        2 => 91,
        _ => 92,
    }
}

/// Number of ISO weeks (52 or 53) in the ISO week-numbering `year`.
///
/// A week-year is long when 1 January is a Thursday, or a Wednesday in a
/// leap year.
pub fn weeks_in_year(year: i32) -> u32 {
    let jan1 = day_of_week(rdn_from_ymd(year, 1, 1));
    if jan1 == 4 || (jan1 == 3 && is_leap_year(year)) {
        53
    } else {
        52
    }
}

fn days_before_month(year: i32, month: u32) -> u32 {
    DAYS_BEFORE_MONTH[usize::from(is_leap_year(year))][month as usize]
}

pub fn rdn_from_ymd(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - 1;
    365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + i64::from(days_before_month(year, month))
        + i64::from(day)
}

pub fn rdn_from_yd(year: i32, day_of_year: u32) -> i64 {
    rdn_from_ymd(year, 1, 1) + i64::from(day_of_year) - 1
}

pub fn rdn_from_yqd(year: i32, quarter: u32, day_of_quarter: u32) -> i64 {
    rdn_from_ymd(year, quarter * 3 - 2, 1) + i64::from(day_of_quarter) - 1
}

/// Rata Die of the given ISO week date (`day_of_week` 1 = Monday).
pub fn rdn_from_ywd(year: i32, week: u32, day_of_week: u32) -> i64 {
    let jan4 = rdn_from_ymd(year, 1, 4);
    let week1_monday = jan4 - i64::from(self::day_of_week(jan4)) + 1;
    week1_monday + 7 * (i64::from(week) - 1) + i64::from(day_of_week) - 1
}

/// Split a Rata Die number into `(year, day_of_year)`.
pub fn yd_from_rdn(rdn: i64) -> (i32, u32) {
    let d = rdn - 1;
    let n400 = d.div_euclid(DAYS_PER_400_YEARS);
    let d = d.rem_euclid(DAYS_PER_400_YEARS);
    let n100 = d / DAYS_PER_100_YEARS;
    let d = d % DAYS_PER_100_YEARS;
    let n4 = d / DAYS_PER_4_YEARS;
    let d = d % DAYS_PER_4_YEARS;
    let n1 = d / 365;
    let d = d % 365;

    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // Last day of a 400- or 4-year cycle: the 366th day of the year just counted.
    if n100 == 4 || n1 == 4 {
        return (year as i32, 366);
    }
    (year as i32 + 1, d as u32 + 1)
}

/// Split a Rata Die number into `(year, month, day)`.
pub fn ymd_from_rdn(rdn: i64) -> (i32, u32, u32) {
    let (year, doy) = yd_from_rdn(rdn);
    let table = &DAYS_BEFORE_MONTH[usize::from(is_leap_year(year))];
    let month = (1..=12u32)
        .rev()
        .find(|&m| table[m as usize] < doy)
        .unwrap_or(1);
    (year, month, doy - table[month as usize])
}

/// Split a Rata Die number into `(year, quarter, day_of_quarter)`.
pub fn yqd_from_rdn(rdn: i64) -> (i32, u32, u32) {
    let (year, month, _) = ymd_from_rdn(rdn);
    let quarter = quarter_of_month(month);
    let start = rdn_from_ymd(year, quarter * 3 - 2, 1);
    (year, quarter, (rdn - start) as u32 + 1)
}

/// Split a Rata Die number into an ISO week date `(week_year, week, day_of_week)`.
pub fn ywd_from_rdn(rdn: i64) -> (i32, u32, u32) {
    let dow = day_of_week(rdn);
    let thursday = rdn + 4 - i64::from(dow);
    let (year, doy) = yd_from_rdn(thursday);
    (year, (doy - 1) / 7 + 1, dow)
}

/// ISO day of week, 1 = Monday through 7 = Sunday.
pub fn day_of_week(rdn: i64) -> u32 {
    (rdn - 1).rem_euclid(7) as u32 + 1
}

pub fn quarter_of_month(month: u32) -> u32 {
    (month + 2) / 3
}

/// Add `months` to the date, clamping the day to the end of the target month.
///
/// The target year is not range-checked here.
pub fn add_months(rdn: i64, months: i32) -> i64 {
    let (year, month, day) = ymd_from_rdn(rdn);
    let total = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(months);
    let year = total.div_euclid(12) as i32;
    let month = total.rem_euclid(12) as u32 + 1;
    rdn_from_ymd(year, month, day.min(days_in_month(year, month)))
}

/// Western (Gregorian) Easter Sunday of `year` as `(month, day)`.
pub fn western_easter(year: i32) -> (u32, u32) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u32, (n % 31 + 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        for year in [2000, 2012, 2016, 2024, 400, 4] {
            assert!(is_leap_year(year), "{year}");
            assert_eq!(days_in_month(year, 2), 29);
        }
        for year in [1900, 2001, 2100, 1, 100] {
            assert!(!is_leap_year(year), "{year}");
            assert_eq!(days_in_month(year, 2), 28);
        }
    }

    #[test]
    fn test_known_rata_die_numbers() {
        assert_eq!(rdn_from_ymd(1, 1, 1), 1);
        assert_eq!(rdn_from_ymd(1970, 1, 1), 719_163);
        assert_eq!(rdn_from_ymd(2000, 1, 1), 730_120);
        assert_eq!(rdn_from_ymd(9999, 12, 31), 3_652_059);
    }

    #[test]
    fn test_ymd_roundtrip_over_cycle_edges() {
        let dates = [
            (1, 1, 1),
            (4, 12, 31),
            (100, 12, 31),
            (400, 12, 31),
            (401, 1, 1),
            (1900, 2, 28),
            (1900, 3, 1),
            (2000, 2, 29),
            (2000, 12, 31),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            assert_eq!(ymd_from_rdn(rdn_from_ymd(y, m, d)), (y, m, d));
        }
    }

    #[test]
    fn test_rdn_sequence_is_contiguous() {
        let mut rdn = rdn_from_ymd(1999, 1, 1);
        for year in 1999..=2001 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    assert_eq!(ymd_from_rdn(rdn), (year, month, day));
                    rdn += 1;
                }
            }
        }
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(day_of_week(1), 1); // 0001-01-01 Monday
        assert_eq!(day_of_week(rdn_from_ymd(2015, 1, 1)), 4);
        assert_eq!(day_of_week(rdn_from_ymd(2013, 1, 1)), 2);
        assert_eq!(day_of_week(rdn_from_ymd(2021, 1, 3)), 7);
    }

    #[test]
    fn test_iso_week_dates() {
        assert_eq!(ywd_from_rdn(rdn_from_ymd(2024, 12, 30)), (2025, 1, 1));
        assert_eq!(ywd_from_rdn(rdn_from_ymd(2021, 1, 3)), (2020, 53, 7));
        assert_eq!(ywd_from_rdn(rdn_from_ymd(2016, 1, 1)), (2015, 53, 5));
        assert_eq!(ywd_from_rdn(rdn_from_ymd(2013, 1, 21)), (2013, 4, 1));
        assert_eq!(rdn_from_ywd(2020, 53, 7), rdn_from_ymd(2021, 1, 3));
        assert_eq!(rdn_from_ywd(2025, 1, 1), rdn_from_ymd(2024, 12, 30));
    }

    #[test]
    fn test_weeks_in_year() {
        for year in [2004, 2009, 2015, 2020, 2026, 1998] {
            assert_eq!(weeks_in_year(year), 53, "{year}");
        }
        for year in [2021, 2022, 2023, 2019] {
            assert_eq!(weeks_in_year(year), 52, "{year}");
        }
    }

    #[test]
    fn test_quarters() {
        assert_eq!(days_in_quarter(2023, 1), 90);
        assert_eq!(days_in_quarter(2024, 1), 91);
        assert_eq!(days_in_quarter(2024, 2), 91);
        assert_eq!(days_in_quarter(2024, 3), 92);
        assert_eq!(days_in_quarter(2024, 4), 92);
        assert_eq!(yqd_from_rdn(rdn_from_ymd(2024, 5, 15)), (2024, 2, 45));
        assert_eq!(rdn_from_yqd(2024, 2, 45), rdn_from_ymd(2024, 5, 15));
    }

    #[test]
    fn test_add_months_clamps_day() {
        let jan31 = rdn_from_ymd(2012, 1, 31);
        assert_eq!(ymd_from_rdn(add_months(jan31, 1)), (2012, 2, 29));
        assert_eq!(
            ymd_from_rdn(add_months(rdn_from_ymd(2013, 1, 31), 1)),
            (2013, 2, 28)
        );
        assert_eq!(ymd_from_rdn(add_months(jan31, -2)), (2011, 11, 30));
        assert_eq!(ymd_from_rdn(add_months(jan31, 12)), (2013, 1, 31));
    }

    #[test]
    fn test_western_easter() {
        assert_eq!(western_easter(1997), (3, 30));
        assert_eq!(western_easter(2000), (4, 23));
        assert_eq!(western_easter(2019), (4, 21));
        assert_eq!(western_easter(2024), (3, 31));
        assert_eq!(western_easter(2025), (4, 20));
    }
}
