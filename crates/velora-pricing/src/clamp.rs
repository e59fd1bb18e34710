//! Live clamping of a single edited rate.
//!
//! While an earner drags a slider, each changed value is immediately pulled
//! into range instead of being rejected: the lower bound is the duration's
//! floor or the minimum implied by the nearest shorter duration's current
//! rate, whichever is higher; the upper bound is the global ceiling. The
//! full set is still hard-validated at save time by [`crate::validate`].

use velora_types::calls::CallDuration;
use velora_types::rates::{ClampBound, ClampCorrection, RateSet};
use velora_types::Credits;

use crate::policy::PricingPolicy;
use crate::validate::implied_minimum;

/// Result of clamping a proposed rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clamped {
    /// The value to apply.
    pub value: Credits,
    /// The correction, when one was needed.
    pub correction: Option<ClampCorrection>,
}

/// The lowest value the given duration may currently take, considering both
/// its floor and the nearest shorter duration's rate in `rates`.
pub fn lower_bound(policy: &PricingPolicy, rates: &RateSet, duration: CallDuration) -> Credits {
    let floor = policy.min_rate_for(duration);
    let implied = match duration.shorter() {
        Some(shorter) => implied_minimum(policy, shorter, rates.rate(shorter), duration),
        None => floor,
    };
    // The implied minimum can never exceed the ceiling under a consistent
    // policy, but a neighboring rate mid-edit might push it there.
    floor.max(implied).min(policy.max_rate)
}

/// Clamp a proposed rate for one duration into its current valid range.
pub fn clamp_rate(
    policy: &PricingPolicy,
    rates: &RateSet,
    duration: CallDuration,
    proposed: Credits,
) -> Clamped {
    let lo = lower_bound(policy, rates, duration);
    let hi = policy.max_rate;

    let (value, bound) = if proposed < lo {
        (lo, Some(ClampBound::Floor))
    } else if proposed > hi {
        (hi, Some(ClampBound::Ceiling))
    } else {
        (proposed, None)
    };

    let correction = bound.map(|bound| {
        tracing::debug!(
            duration = duration.label(),
            proposed,
            applied = value,
            "rate edit clamped"
        );
        ClampCorrection {
            duration,
            proposed,
            applied: value,
            bound,
        }
    });

    Clamped { value, correction }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DEFAULT_POLICY;
    use velora_types::rates::DEFAULT_RATES;

    #[test]
    fn test_in_range_untouched() {
        let clamped = clamp_rate(&DEFAULT_POLICY, &DEFAULT_RATES, CallDuration::Min30, 450);
        assert_eq!(clamped.value, 450);
        assert!(clamped.correction.is_none());
    }

    #[test]
    fn test_clamp_to_duration_floor() {
        // 50 is far below the 30-minute floor of 250.
        let clamped = clamp_rate(&DEFAULT_POLICY, &DEFAULT_RATES, CallDuration::Min30, 50);
        assert_eq!(clamped.value, 250);
        let correction = clamped.correction.expect("correction applied");
        assert_eq!(correction.proposed, 50);
        assert_eq!(correction.applied, 250);
        assert_eq!(correction.bound, ClampBound::Floor);
    }

    #[test]
    fn test_clamp_to_implied_neighbor_minimum() {
        // With a 600-credit 15-minute rate, the 30-minute rate cannot drop
        // below 600 even though its floor is 250.
        let rates = RateSet {
            video_15: 600,
            ..DEFAULT_RATES
        };
        let clamped = clamp_rate(&DEFAULT_POLICY, &rates, CallDuration::Min30, 300);
        assert_eq!(clamped.value, 600);
        assert_eq!(
            clamped.correction.expect("correction").bound,
            ClampBound::Floor
        );
    }

    #[test]
    fn test_clamp_to_ceiling() {
        let clamped = clamp_rate(&DEFAULT_POLICY, &DEFAULT_RATES, CallDuration::Min90, 1200);
        assert_eq!(clamped.value, 900);
        assert_eq!(
            clamped.correction.expect("correction").bound,
            ClampBound::Ceiling
        );
    }

    #[test]
    fn test_clamp_convergence() {
        // Repeated application of the clamp always lands inside
        // [lower_bound, max_rate] and is a fixed point after one step.
        for proposed in [0u64, 1, 199, 250, 600, 899, 900, 901, 10_000] {
            for duration in velora_types::calls::CALL_DURATIONS {
                let first = clamp_rate(&DEFAULT_POLICY, &DEFAULT_RATES, duration, proposed);
                let lo = lower_bound(&DEFAULT_POLICY, &DEFAULT_RATES, duration);
                assert!(first.value >= lo);
                assert!(first.value <= DEFAULT_POLICY.max_rate);

                let second = clamp_rate(&DEFAULT_POLICY, &DEFAULT_RATES, duration, first.value);
                assert_eq!(second.value, first.value);
                assert!(second.correction.is_none());
            }
        }
    }

    #[test]
    fn test_shortest_duration_uses_own_floor() {
        let clamped = clamp_rate(&DEFAULT_POLICY, &DEFAULT_RATES, CallDuration::Min15, 100);
        assert_eq!(clamped.value, DEFAULT_POLICY.min_rate_15);
    }
}
