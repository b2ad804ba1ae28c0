//! Conversions to and from `chrono::DateTime<FixedOffset>`.

use chrono::{DateTime, FixedOffset};

use crate::error::{MomentError, Result};
use crate::instant::Instant;
use crate::range::{MAX_OFFSET, MIN_OFFSET};

impl Instant {
    /// Convert a chrono value, validated like [`Instant::from_epoch_seconds`].
    ///
    /// Offsets with a seconds part and chrono's leap-second representation
    /// (nanosecond >= 1e9) cannot be expressed and are rejected.
    pub fn from_chrono(dt: DateTime<FixedOffset>) -> Result<Self> {
        let offset_seconds = dt.offset().local_minus_utc();
        if offset_seconds % 60 != 0 {
            return Err(MomentError::out_of_range(format!(
                "offset of {offset_seconds}s is not a whole number of minutes"
            )));
        }
        Instant::from_epoch_seconds(
            dt.timestamp(),
            dt.timestamp_subsec_nanos(),
            offset_seconds / 60,
        )
    }

    pub fn to_chrono(self) -> Result<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.offset() * 60).ok_or_else(|| {
            MomentError::InvalidOffset {
                offset: i64::from(self.offset()),
                min: i64::from(MIN_OFFSET),
                max: i64::from(MAX_OFFSET),
            }
        })?;
        let utc = DateTime::from_timestamp(self.epoch_seconds(), self.nanosecond())
            .ok_or_else(|| {
                MomentError::out_of_range(format!(
                    "epoch seconds {} not representable by chrono",
                    self.epoch_seconds()
                ))
            })?;
        Ok(utc.with_timezone(&offset))
    }
}

impl TryFrom<DateTime<FixedOffset>> for Instant {
    type Error = MomentError;

    fn try_from(dt: DateTime<FixedOffset>) -> Result<Self> {
        Instant::from_chrono(dt)
    }
}
