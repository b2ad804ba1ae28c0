//! Error types for moment-engine operations.

use thiserror::Error;

use crate::unit::Unit;

/// The ways an instant construction or transformation can fail.
///
/// Every fallible operation either returns a valid [`Instant`](crate::Instant)
/// or exactly one of these kinds. Nothing here is transient: a failure always
/// means the input was invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MomentError {
    /// A single field lies outside its own legal range.
    #[error("Invalid component: '{component}' must be in the range [{min}, {max}], got {value}")]
    InvalidComponent {
        component: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The fields are individually legal but the instant falls outside
    /// 0001-01-01T00:00:00 ..= 9999-12-31T23:59:59.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// A unit amount exceeds the unit's documented safe bound.
    #[error("Overflow: {unit} amount {amount} is outside [{min}, {max}]")]
    Overflow {
        unit: Unit,
        amount: i64,
        min: i64,
        max: i64,
    },

    /// The UTC offset (in minutes) is outside its bounded range.
    #[error("Invalid offset: {offset} minutes is outside [{min}, {max}]")]
    InvalidOffset { offset: i64, min: i64, max: i64 },
}

impl MomentError {
    pub(crate) fn component(component: &'static str, value: i64, min: i64, max: i64) -> Self {
        MomentError::InvalidComponent {
            component,
            value,
            min,
            max,
        }
    }

    pub(crate) fn out_of_range(what: impl Into<String>) -> Self {
        MomentError::OutOfRange(what.into())
    }
}

pub type Result<T> = std::result::Result<T, MomentError>;
