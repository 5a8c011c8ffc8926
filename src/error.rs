//! Error types for the valuation engine
//!
//! Every failure is an input-validation-class error surfaced synchronously
//! to the caller; the engine does no I/O, so nothing here is retryable.
//! The engine never substitutes a sentinel for an undefined metric — how to
//! display "undefined" is the caller's concern.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ValuationError>;

/// Failures raised by the valuation engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// Discounting requires `1 + rate > 0`; rate = -1 divides by zero and
    /// rates below -1 put a fractional power over a negative base
    #[error("invalid discount rate {rate}: 1 + rate must be positive")]
    InvalidDiscountRate { rate: f64 },

    /// Blend weights interpolate, they do not extrapolate
    #[error("blend weight {weight} is outside [0, 1]")]
    InvalidWeight { weight: f64 },

    #[error("division by zero: {context}")]
    DivisionByZero { context: &'static str },

    #[error("holding period must be positive, got {years} years")]
    InvalidHoldingPeriod { years: f64 },

    /// A fractional power of a non-positive MOIC has no real value
    #[error("IRR is undefined for MOIC {moic}: requires MOIC > 0")]
    UndefinedIrr { moic: f64 },

    /// Forecast periods must be contiguous and strictly increasing
    #[error("non-contiguous forecast periods: expected {expected}, found {found}")]
    NonContiguousPeriods { expected: i32, found: i32 },

    /// A terminal value requires at least one forecast period
    #[error("forecast has no periods")]
    EmptyProjection,

    /// Wraps a failure with the segment it occurred in, so the caller can
    /// render a message naming the offending input
    #[error("segment '{name}': {source}")]
    Segment {
        name: String,
        #[source]
        source: Box<ValuationError>,
    },
}

impl ValuationError {
    /// Attach a segment name to an error raised while valuing that segment
    pub fn in_segment(self, name: &str) -> Self {
        ValuationError::Segment {
            name: name.to_string(),
            source: Box::new(self),
        }
    }

    /// The underlying error, unwrapping any segment context
    pub fn root_cause(&self) -> &ValuationError {
        match self {
            ValuationError::Segment { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
