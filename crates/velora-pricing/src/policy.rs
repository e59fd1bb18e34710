//! Pricing policy: bounds, floors, and revenue ratios.
//!
//! The policy is process-wide read-only configuration. It is constructed
//! once (from defaults or the daemon config) and passed by reference into
//! the validators and derivers; nothing mutates it after startup.

use serde::{Deserialize, Serialize};

use velora_types::calls::CallDuration;
use velora_types::Credits;

use crate::{PricingError, Result};

/// Global minimum rate in credits (also the 15-minute floor).
pub const MIN_RATE: Credits = 200;

/// Global maximum rate in credits (slider ceiling for every duration).
pub const MAX_RATE: Credits = 900;

/// Duration-specific floor for 30-minute calls.
pub const MIN_RATE_30: Credits = 250;

/// Duration-specific floor for 60-minute calls.
pub const MIN_RATE_60: Credits = 400;

/// Duration-specific floor for 90-minute calls.
pub const MIN_RATE_90: Credits = 600;

/// Minimum price in credits per minute, across all durations.
pub const PER_MINUTE_FLOOR: f64 = 6.0;

/// A longer call must retain at least this fraction of the shorter call's
/// per-minute price. 0.5 means a call twice as long can never cost less in
/// total than the shorter call.
pub const CONSISTENCY_FLOOR: f64 = 0.5;

/// Creator share of a credit's dollar value, in percent.
pub const CREATOR_SHARE_PCT: u8 = 70;

/// Audio rate as a percentage of the corresponding video rate.
pub const AUDIO_RATE_PCT: u8 = 70;

/// Dollar value of one credit, in micro-USD (1 credit = $0.10).
pub const MICRO_USD_PER_CREDIT: u64 = 100_000;

/// The complete pricing policy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub min_rate: Credits,
    pub max_rate: Credits,
    pub min_rate_15: Credits,
    pub min_rate_30: Credits,
    pub min_rate_60: Credits,
    pub min_rate_90: Credits,
    pub per_minute_floor: f64,
    pub consistency_floor: f64,
    pub creator_share_pct: u8,
    pub audio_rate_pct: u8,
    pub micro_usd_per_credit: u64,
}

/// The platform default policy.
pub const DEFAULT_POLICY: PricingPolicy = PricingPolicy {
    min_rate: MIN_RATE,
    max_rate: MAX_RATE,
    min_rate_15: MIN_RATE,
    min_rate_30: MIN_RATE_30,
    min_rate_60: MIN_RATE_60,
    min_rate_90: MIN_RATE_90,
    per_minute_floor: PER_MINUTE_FLOOR,
    consistency_floor: CONSISTENCY_FLOOR,
    creator_share_pct: CREATOR_SHARE_PCT,
    audio_rate_pct: AUDIO_RATE_PCT,
    micro_usd_per_credit: MICRO_USD_PER_CREDIT,
};

impl PricingPolicy {
    /// The floor for a duration.
    pub fn min_rate_for(&self, duration: CallDuration) -> Credits {
        match duration {
            CallDuration::Min15 => self.min_rate_15,
            CallDuration::Min30 => self.min_rate_30,
            CallDuration::Min60 => self.min_rate_60,
            CallDuration::Min90 => self.min_rate_90,
        }
    }

    /// Platform share of a credit's dollar value, in percent.
    pub fn platform_share_pct(&self) -> u8 {
        100 - self.creator_share_pct
    }

    /// Validate internal consistency.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidPolicy`] describing the first inconsistency
    /// found.
    pub fn validate(&self) -> Result<()> {
        if self.min_rate == 0 {
            return Err(PricingError::InvalidPolicy(
                "min_rate must be positive".to_string(),
            ));
        }
        if self.min_rate > self.max_rate {
            return Err(PricingError::InvalidPolicy(format!(
                "min_rate {} exceeds max_rate {}",
                self.min_rate, self.max_rate
            )));
        }

        let floors = [
            (CallDuration::Min15, self.min_rate_15),
            (CallDuration::Min30, self.min_rate_30),
            (CallDuration::Min60, self.min_rate_60),
            (CallDuration::Min90, self.min_rate_90),
        ];
        let mut previous: Option<Credits> = None;
        for (duration, floor) in floors {
            if floor < self.min_rate || floor > self.max_rate {
                return Err(PricingError::InvalidPolicy(format!(
                    "{duration} floor {floor} is outside [{}, {}]",
                    self.min_rate, self.max_rate
                )));
            }
            if let Some(prev) = previous {
                if floor < prev {
                    return Err(PricingError::InvalidPolicy(format!(
                        "{duration} floor {floor} is below the previous duration's floor {prev}"
                    )));
                }
            }
            previous = Some(floor);

            // Floors must themselves satisfy the per-minute floor, or no
            // valid rate set could exist at the floor.
            let per_minute = floor as f64 / duration.minutes() as f64;
            if per_minute < self.per_minute_floor {
                return Err(PricingError::InvalidPolicy(format!(
                    "{duration} floor {floor} is below the per-minute floor"
                )));
            }
        }

        if !(self.per_minute_floor > 0.0) {
            return Err(PricingError::InvalidPolicy(
                "per_minute_floor must be positive".to_string(),
            ));
        }
        if !(self.consistency_floor > 0.0 && self.consistency_floor <= 1.0) {
            return Err(PricingError::InvalidPolicy(format!(
                "consistency_floor {} must be in (0, 1]",
                self.consistency_floor
            )));
        }
        if self.creator_share_pct > 100 {
            return Err(PricingError::InvalidPolicy(format!(
                "creator_share_pct {} exceeds 100",
                self.creator_share_pct
            )));
        }
        if self.audio_rate_pct > 100 {
            return Err(PricingError::InvalidPolicy(format!(
                "audio_rate_pct {} exceeds 100",
                self.audio_rate_pct
            )));
        }
        if self.micro_usd_per_credit == 0 {
            return Err(PricingError::InvalidPolicy(
                "micro_usd_per_credit must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        DEFAULT_POLICY
    }
}
