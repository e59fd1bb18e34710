//! Rate-set validation: bounds, monotonic pricing, and the per-minute floor.
//!
//! Per-minute price is expected to fall as calls get longer, but not
//! collapse: for each adjacent duration pair, the longer duration must keep
//! at least [`PricingPolicy::consistency_floor`] of the shorter duration's
//! per-minute price. These checks run on the full four-rate set before it
//! is persisted; single edits are handled by the softer [`crate::clamp`].
//!
//! All checks are pure, synchronous, and total.

use velora_types::calls::{CallDuration, ADJACENT_DURATIONS, CALL_DURATIONS};
use velora_types::rates::RateSet;
use velora_types::Credits;

use crate::policy::PricingPolicy;
use crate::{PricingError, Result};

/// The minimum rate a longer duration may carry, implied by a shorter
/// duration's rate.
///
/// `ceil(shorter_rate * (longer_minutes / shorter_minutes) * consistency_floor)`
pub fn implied_minimum(
    policy: &PricingPolicy,
    shorter: CallDuration,
    shorter_rate: Credits,
    longer: CallDuration,
) -> Credits {
    let scale = longer.minutes() as f64 / shorter.minutes() as f64;
    (shorter_rate as f64 * scale * policy.consistency_floor).ceil() as Credits
}

/// Check every rate against its duration floor and the global ceiling.
///
/// # Errors
///
/// - [`PricingError::RateBelowMinimum`]
/// - [`PricingError::RateAboveMaximum`]
pub fn validate_bounds(policy: &PricingPolicy, rates: &RateSet) -> Result<()> {
    for duration in CALL_DURATIONS {
        let rate = rates.rate(duration);
        let min = policy.min_rate_for(duration);
        if rate < min {
            return Err(PricingError::RateBelowMinimum {
                duration,
                rate,
                min,
            });
        }
        if rate > policy.max_rate {
            return Err(PricingError::RateAboveMaximum {
                duration,
                rate,
                max: policy.max_rate,
            });
        }
    }
    Ok(())
}

/// Check that no longer duration is priced below the minimum implied by its
/// shorter neighbor.
///
/// # Errors
///
/// [`PricingError::MonotonicityViolation`] naming the failing pair.
pub fn validate_monotonic_pricing(policy: &PricingPolicy, rates: &RateSet) -> Result<()> {
    for (shorter, longer) in ADJACENT_DURATIONS {
        let implied_min = implied_minimum(policy, shorter, rates.rate(shorter), longer);
        let rate = rates.rate(longer);
        if rate < implied_min {
            return Err(PricingError::MonotonicityViolation {
                shorter,
                longer,
                rate,
                implied_min,
            });
        }
    }
    Ok(())
}

/// Check that every rate meets the per-minute price floor.
///
/// # Errors
///
/// [`PricingError::PerMinuteFloorViolation`] naming the offending duration.
pub fn validate_per_minute_floor(policy: &PricingPolicy, rates: &RateSet) -> Result<()> {
    for duration in CALL_DURATIONS {
        let rate = rates.rate(duration);
        let per_minute = rate as f64 / duration.minutes() as f64;
        if per_minute < policy.per_minute_floor {
            return Err(PricingError::PerMinuteFloorViolation {
                duration,
                rate,
                per_minute,
                floor: policy.per_minute_floor,
            });
        }
    }
    Ok(())
}

/// The full save-time check: bounds, monotonicity, and the per-minute floor.
pub fn validate_rate_set(policy: &PricingPolicy, rates: &RateSet) -> Result<()> {
    validate_bounds(policy, rates)?;
    validate_monotonic_pricing(policy, rates)?;
    validate_per_minute_floor(policy, rates)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DEFAULT_POLICY;
    use velora_types::rates::DEFAULT_RATES;

    fn rates(video_15: u64, video_30: u64, video_60: u64, video_90: u64) -> RateSet {
        RateSet {
            video_15,
            video_30,
            video_60,
            video_90,
        }
    }

    #[test]
    fn test_defaults_accepted() {
        validate_rate_set(&DEFAULT_POLICY, &DEFAULT_RATES).expect("defaults are valid");
        validate_monotonic_pricing(&DEFAULT_POLICY, &DEFAULT_RATES).expect("monotonic");
        validate_per_minute_floor(&DEFAULT_POLICY, &DEFAULT_RATES).expect("above floor");
    }

    #[test]
    fn test_monotonic_rejection() {
        // A 900-credit 15-minute call implies at least 900 for 30 minutes.
        let set = rates(900, 200, 200, 200);
        let err = validate_monotonic_pricing(&DEFAULT_POLICY, &set).expect_err("inconsistent");
        match err {
            PricingError::MonotonicityViolation {
                shorter,
                longer,
                rate,
                implied_min,
            } => {
                assert_eq!(shorter, CallDuration::Min15);
                assert_eq!(longer, CallDuration::Min30);
                assert_eq!(rate, 200);
                assert_eq!(implied_min, 900);
            }
            other => unreachable!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_monotonic_names_later_pair() {
        // First two pairs consistent, 60->90 broken (implied minimum 600).
        let set = rates(200, 300, 800, 599);
        let err = validate_monotonic_pricing(&DEFAULT_POLICY, &set).expect_err("inconsistent");
        match err {
            PricingError::MonotonicityViolation {
                shorter, longer, ..
            } => {
                assert_eq!(shorter, CallDuration::Min60);
                assert_eq!(longer, CallDuration::Min90);
            }
            other => unreachable!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_implied_minimum_doubling() {
        // At a 0.5 consistency floor, doubling the duration implies at
        // least the same total price.
        for rate in [200u64, 450, 900] {
            assert_eq!(
                implied_minimum(&DEFAULT_POLICY, CallDuration::Min15, rate, CallDuration::Min30),
                rate
            );
            assert_eq!(
                implied_minimum(&DEFAULT_POLICY, CallDuration::Min30, rate, CallDuration::Min60),
                rate
            );
        }
        // 60 -> 90 scales by 1.5: implied minimum is 0.75x, rounded up.
        assert_eq!(
            implied_minimum(&DEFAULT_POLICY, CallDuration::Min60, 500, CallDuration::Min90),
            375
        );
        assert_eq!(
            implied_minimum(&DEFAULT_POLICY, CallDuration::Min60, 401, CallDuration::Min90),
            301
        );
    }

    #[test]
    fn test_per_minute_floor_violation_names_duration() {
        // 540 credits over 90 minutes is exactly 6.0/min; 539 is below.
        let set = rates(200, 300, 500, 539);
        let err = validate_per_minute_floor(&DEFAULT_POLICY, &set).expect_err("below floor");
        match err {
            PricingError::PerMinuteFloorViolation { duration, .. } => {
                assert_eq!(duration, CallDuration::Min90);
            }
            other => unreachable!("unexpected error: {other}"),
        }
        let set = rates(200, 300, 500, 540);
        validate_per_minute_floor(&DEFAULT_POLICY, &set).expect("exactly at floor");
    }

    #[test]
    fn test_floor_validation_idempotent() {
        let set = rates(200, 300, 500, 539);
        let first = validate_per_minute_floor(&DEFAULT_POLICY, &set).is_err();
        let second = validate_per_minute_floor(&DEFAULT_POLICY, &set).is_err();
        assert_eq!(first, second);

        let ok = DEFAULT_RATES;
        assert_eq!(
            validate_per_minute_floor(&DEFAULT_POLICY, &ok).is_ok(),
            validate_per_minute_floor(&DEFAULT_POLICY, &ok).is_ok()
        );
    }

    #[test]
    fn test_bounds_checked_per_duration() {
        let set = rates(200, 300, 390, 700);
        let err = validate_bounds(&DEFAULT_POLICY, &set).expect_err("below 60min floor");
        assert!(matches!(
            err,
            PricingError::RateBelowMinimum {
                duration: CallDuration::Min60,
                ..
            }
        ));

        let set = rates(200, 300, 500, 901);
        assert!(matches!(
            validate_bounds(&DEFAULT_POLICY, &set),
            Err(PricingError::RateAboveMaximum {
                duration: CallDuration::Min90,
                ..
            })
        ));
    }
}
