//! Rate card derivation for settings views.
//!
//! The card is recomputed from the in-memory rate set on every render:
//! four derived audio rates and a formatted creator-earnings string for
//! each of the eight (duration, medium) combinations.

use velora_pricing::derive::derive_audio_rate;
use velora_pricing::earnings::format_creator_earnings;
use velora_pricing::policy::PricingPolicy;
use velora_types::calls::CALL_DURATIONS;
use velora_types::rates::{RateCard, RateCardEntry, RateSet};

use crate::Result;

/// Build the display card for a rate set.
pub fn rate_card(policy: &PricingPolicy, rates: &RateSet) -> Result<RateCard> {
    let mut entries = Vec::with_capacity(CALL_DURATIONS.len());
    for duration in CALL_DURATIONS {
        let video_rate = rates.rate(duration);
        let audio_rate = derive_audio_rate(policy, video_rate);
        entries.push(RateCardEntry {
            duration,
            video_rate,
            audio_rate,
            video_earnings: format_creator_earnings(policy, video_rate)?,
            audio_earnings: format_creator_earnings(policy, audio_rate)?,
        });
    }
    Ok(RateCard { entries })
}
