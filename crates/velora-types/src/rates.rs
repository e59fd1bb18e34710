//! Rate structures: the four per-duration call prices and their derived
//! display forms.

use serde::{Deserialize, Serialize};

use crate::calls::CallDuration;
use crate::Credits;

/// The four creator-set video rates for a single earner profile, in credits.
///
/// A rate set is owned by exactly one profile and is only ever persisted as a
/// whole (all four values in one update).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct RateSet {
    pub video_15: Credits,
    pub video_30: Credits,
    pub video_60: Credits,
    pub video_90: Credits,
}

/// Platform default rates for new earner profiles.
pub const DEFAULT_RATES: RateSet = RateSet {
    video_15: 200,
    video_30: 300,
    video_60: 500,
    video_90: 700,
};

impl RateSet {
    /// The rate for a duration.
    pub fn rate(&self, duration: CallDuration) -> Credits {
        match duration {
            CallDuration::Min15 => self.video_15,
            CallDuration::Min30 => self.video_30,
            CallDuration::Min60 => self.video_60,
            CallDuration::Min90 => self.video_90,
        }
    }

    /// Replace the rate for a duration.
    pub fn set_rate(&mut self, duration: CallDuration, rate: Credits) {
        match duration {
            CallDuration::Min15 => self.video_15 = rate,
            CallDuration::Min30 => self.video_30 = rate,
            CallDuration::Min60 => self.video_60 = rate,
            CallDuration::Min90 => self.video_90 = rate,
        }
    }

    /// Rates in ascending duration order.
    pub fn as_array(&self) -> [Credits; 4] {
        [self.video_15, self.video_30, self.video_60, self.video_90]
    }
}

impl Default for RateSet {
    fn default() -> Self {
        DEFAULT_RATES
    }
}

/// Which bound a live-clamp correction hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ClampBound {
    Floor,
    Ceiling,
}

/// A correction applied by the live clamp during editing.
///
/// Not an error: the UI surfaces it as an informational notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct ClampCorrection {
    pub duration: CallDuration,
    /// The value the user entered.
    pub proposed: Credits,
    /// The value actually applied.
    pub applied: Credits,
    pub bound: ClampBound,
}

/// One row of the settings rate card: a duration's video rate, the derived
/// audio rate, and the formatted creator earnings for both media.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct RateCardEntry {
    pub duration: CallDuration,
    pub video_rate: Credits,
    pub audio_rate: Credits,
    /// Formatted currency, e.g. "$35.00".
    pub video_earnings: String,
    pub audio_earnings: String,
}

/// The full display card, recomputed on every render. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct RateCard {
    pub entries: Vec<RateCardEntry>,
}

impl RateCard {
    /// Look up the entry for a duration.
    pub fn entry(&self, duration: CallDuration) -> Option<&RateCardEntry> {
        self.entries.iter().find(|e| e.duration == duration)
    }
}

/// A rate set keyed by the persisted column names, as sent over the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct RateColumns {
    pub video_15min_rate: Credits,
    pub video_30min_rate: Credits,
    pub video_60min_rate: Credits,
    pub video_90min_rate: Credits,
}

impl From<RateSet> for RateColumns {
    fn from(rates: RateSet) -> Self {
        Self {
            video_15min_rate: rates.video_15,
            video_30min_rate: rates.video_30,
            video_60min_rate: rates.video_60,
            video_90min_rate: rates.video_90,
        }
    }
}

impl From<RateColumns> for RateSet {
    fn from(cols: RateColumns) -> Self {
        Self {
            video_15: cols.video_15min_rate,
            video_30: cols.video_30min_rate,
            video_60: cols.video_60min_rate,
            video_90: cols.video_90min_rate,
        }
    }
}
