//! Global range constants and range-checked second arithmetic.
//!
//! All second counts inside the engine are Rata Die seconds: day 1
//! (0001-01-01) starts at second 86 400. The valid span is exactly
//! [`MIN_RANGE`]`..=`[`MAX_RANGE`], which keeps every intermediate value of
//! the unit arithmetic far away from the `i64` limits. The helpers below still
//! use checked operations so that a bad input can only ever surface as a
//! [`MomentError`], never as a wrapped or panicking integer.

use crate::error::{MomentError, Result};

pub const SECS_PER_DAY: i64 = 86_400;
pub const NANOS_PER_SEC: i64 = 1_000_000_000;

/// 0001-01-01T00:00:00 in Rata Die seconds.
pub const MIN_RANGE: i64 = 86_400;
/// 9999-12-31T23:59:59 in Rata Die seconds.
pub const MAX_RANGE: i64 = 315_537_983_999;
/// 1970-01-01T00:00:00 in Rata Die seconds.
pub const UNIX_EPOCH: i64 = 62_135_683_200;

/// 0001-01-01T00:00:00Z in Unix seconds.
pub const MIN_EPOCH_SECONDS: i64 = -62_135_596_800;
/// 9999-12-31T23:59:59Z in Unix seconds.
pub const MAX_EPOCH_SECONDS: i64 = 253_402_300_799;

/// Smallest UTC offset in minutes (-18:00).
pub const MIN_OFFSET: i32 = -1080;
/// Largest UTC offset in minutes (+18:00).
pub const MAX_OFFSET: i32 = 1080;

pub const MAX_NANOSECOND: i64 = NANOS_PER_SEC - 1;

pub(crate) fn check_offset(offset: i64) -> Result<i32> {
    if offset < i64::from(MIN_OFFSET) || offset > i64::from(MAX_OFFSET) {
        return Err(MomentError::InvalidOffset {
            offset,
            min: i64::from(MIN_OFFSET),
            max: i64::from(MAX_OFFSET),
        });
    }
    Ok(offset as i32)
}

pub(crate) fn check_nanosecond(nanosecond: i64) -> Result<i32> {
    if !(0..=MAX_NANOSECOND).contains(&nanosecond) {
        return Err(MomentError::component(
            "nanosecond",
            nanosecond,
            0,
            MAX_NANOSECOND,
        ));
    }
    Ok(nanosecond as i32)
}

pub(crate) fn check_epoch_seconds(seconds: i64) -> Result<i64> {
    if !(MIN_EPOCH_SECONDS..=MAX_EPOCH_SECONDS).contains(&seconds) {
        return Err(MomentError::out_of_range(format!(
            "epoch seconds {seconds} is outside [{MIN_EPOCH_SECONDS}, {MAX_EPOCH_SECONDS}]"
        )));
    }
    Ok(seconds)
}

/// Validate a local Rata Die second count against the global span.
pub(crate) fn check_local_seconds(seconds: i64) -> Result<i64> {
    if !(MIN_RANGE..=MAX_RANGE).contains(&seconds) {
        return Err(MomentError::out_of_range(
            "result is outside 0001-01-01T00:00:00 ..= 9999-12-31T23:59:59",
        ));
    }
    Ok(seconds)
}

pub(crate) fn add_seconds(base: i64, delta: i64) -> Result<i64> {
    base.checked_add(delta)
        .ok_or_else(|| MomentError::out_of_range("second count overflowed"))
}

pub(crate) fn scale_seconds(amount: i64, scale: i64) -> Result<i64> {
    amount
        .checked_mul(scale)
        .ok_or_else(|| MomentError::out_of_range("second count overflowed"))
}

/// Fold a possibly negative or oversized nanosecond count into
/// `(seconds, 0..=999_999_999)`.
pub(crate) fn carry_nanos(seconds: i64, nanos: i64) -> Result<(i64, i32)> {
    let carry = nanos.div_euclid(NANOS_PER_SEC);
    let nanos = nanos.rem_euclid(NANOS_PER_SEC);
    Ok((add_seconds(seconds, carry)?, nanos as i32))
}
