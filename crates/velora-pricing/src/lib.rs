//! # velora-pricing
//!
//! Rate validation and pricing derivation for earner call rates.
//!
//! Earners price video calls per duration; everything else is derived:
//! audio rates are a fixed percentage of the video rate, and creator
//! earnings are a fixed share of the credit value. Validation is two-tier:
//! single edits are softly clamped as they happen ([`clamp`]), and the full
//! four-rate set is hard-validated before it is persisted ([`validate`]).
//!
//! ## Modules
//!
//! - [`policy`] — bounds, floors, and revenue ratios
//! - [`validate`] — monotonic pricing and per-minute floor checks
//! - [`clamp`] — live clamping of a single edited rate
//! - [`derive`] — audio rate derivation
//! - [`earnings`] — creator earnings from credit prices

pub mod clamp;
pub mod derive;
pub mod earnings;
pub mod policy;
pub mod validate;

use velora_types::calls::CallDuration;
use velora_types::Credits;

/// Error types for pricing operations.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// A rate is below its duration-specific floor.
    #[error("{duration} rate {rate} is below the minimum of {min}")]
    RateBelowMinimum {
        duration: CallDuration,
        rate: Credits,
        min: Credits,
    },

    /// A rate is above the global ceiling.
    #[error("{duration} rate {rate} is above the maximum of {max}")]
    RateAboveMaximum {
        duration: CallDuration,
        rate: Credits,
        max: Credits,
    },

    /// A longer duration is priced below what the shorter duration implies.
    #[error(
        "{longer} rate {rate} is inconsistent with the {shorter} rate: \
         must be at least {implied_min}"
    )]
    MonotonicityViolation {
        shorter: CallDuration,
        longer: CallDuration,
        rate: Credits,
        implied_min: Credits,
    },

    /// A rate works out below the per-minute price floor.
    #[error(
        "{duration} rate {rate} is {per_minute:.2} credits/min, \
         below the floor of {floor:.2}"
    )]
    PerMinuteFloorViolation {
        duration: CallDuration,
        rate: Credits,
        per_minute: f64,
        floor: f64,
    },

    /// The pricing policy itself is inconsistent.
    #[error("invalid pricing policy: {0}")]
    InvalidPolicy(String),

    /// Arithmetic overflow.
    #[error("arithmetic overflow in earnings calculation")]
    Overflow,
}

/// Convenience result type for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;
