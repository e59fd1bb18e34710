//! Audio rate derivation.
//!
//! Audio calls are not priced directly: each audio rate is a fixed
//! percentage of the corresponding video rate, rounded to the nearest
//! credit. Derived rates are display values and are never persisted.

use velora_types::calls::CALL_DURATIONS;
use velora_types::rates::RateSet;
use velora_types::Credits;

use crate::policy::PricingPolicy;

/// Derive the audio rate for a video rate.
///
/// Assumes the video rate is already valid; this is a display derivation,
/// not a validation site.
pub fn derive_audio_rate(policy: &PricingPolicy, video_rate: Credits) -> Credits {
    // Round half up to the nearest credit.
    (video_rate * policy.audio_rate_pct as u64 + 50) / 100
}

/// Derive audio rates for a whole rate set.
pub fn derive_audio_rates(policy: &PricingPolicy, rates: &RateSet) -> RateSet {
    let mut audio = *rates;
    for duration in CALL_DURATIONS {
        audio.set_rate(duration, derive_audio_rate(policy, rates.rate(duration)));
    }
    audio
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DEFAULT_POLICY;
    use velora_types::rates::DEFAULT_RATES;

    #[test]
    fn test_audio_rate_is_rounded_seventy_percent() {
        for video in DEFAULT_POLICY.min_rate..=DEFAULT_POLICY.max_rate {
            let audio = derive_audio_rate(&DEFAULT_POLICY, video);
            // Within half a credit of exactly 70%.
            assert!((audio * 100).abs_diff(video * 70) <= 50);
        }
    }

    #[test]
    fn test_default_rates_derivation() {
        let audio = derive_audio_rates(&DEFAULT_POLICY, &DEFAULT_RATES);
        assert_eq!(audio.as_array(), [140, 210, 350, 490]);
    }

    #[test]
    fn test_rounding_to_nearest() {
        // 0.70 * 255 = 178.5, rounds up.
        assert_eq!(derive_audio_rate(&DEFAULT_POLICY, 255), 179);
        // 0.70 * 249 = 174.3, rounds down.
        assert_eq!(derive_audio_rate(&DEFAULT_POLICY, 249), 174);
    }
}
