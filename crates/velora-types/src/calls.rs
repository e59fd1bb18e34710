//! Call durations and media.

use serde::{Deserialize, Serialize};

/// Bookable call durations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CallDuration {
    Min15,
    Min30,
    Min60,
    Min90,
}

/// All bookable durations in ascending order.
pub const CALL_DURATIONS: [CallDuration; 4] = [
    CallDuration::Min15,
    CallDuration::Min30,
    CallDuration::Min60,
    CallDuration::Min90,
];

/// Adjacent (shorter, longer) duration pairs in ascending order.
pub const ADJACENT_DURATIONS: [(CallDuration, CallDuration); 3] = [
    (CallDuration::Min15, CallDuration::Min30),
    (CallDuration::Min30, CallDuration::Min60),
    (CallDuration::Min60, CallDuration::Min90),
];

impl CallDuration {
    /// Duration length in minutes.
    pub fn minutes(self) -> u64 {
        match self {
            CallDuration::Min15 => 15,
            CallDuration::Min30 => 30,
            CallDuration::Min60 => 60,
            CallDuration::Min90 => 90,
        }
    }

    /// Short label used in settings views and log output.
    pub fn label(self) -> &'static str {
        match self {
            CallDuration::Min15 => "15min",
            CallDuration::Min30 => "30min",
            CallDuration::Min60 => "60min",
            CallDuration::Min90 => "90min",
        }
    }

    /// The nearest shorter bookable duration, if any.
    pub fn shorter(self) -> Option<CallDuration> {
        match self {
            CallDuration::Min15 => None,
            CallDuration::Min30 => Some(CallDuration::Min15),
            CallDuration::Min60 => Some(CallDuration::Min30),
            CallDuration::Min90 => Some(CallDuration::Min60),
        }
    }

    /// Parse the wire form used by the RPC layer (e.g. "15min").
    pub fn parse(label: &str) -> Option<CallDuration> {
        CALL_DURATIONS.iter().copied().find(|d| d.label() == label)
    }
}

impl std::fmt::Display for CallDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Call media. Audio prices are derived from video prices, never set directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CallMedium {
    Video,
    Audio,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_ascending() {
        let minutes: Vec<u64> = CALL_DURATIONS.iter().map(|d| d.minutes()).collect();
        assert_eq!(minutes, vec![15, 30, 60, 90]);
    }

    #[test]
    fn test_adjacent_pairs_cover_all() {
        assert_eq!(ADJACENT_DURATIONS.len(), CALL_DURATIONS.len() - 1);
        for (shorter, longer) in ADJACENT_DURATIONS {
            assert!(shorter.minutes() < longer.minutes());
            assert_eq!(longer.shorter(), Some(shorter));
        }
    }

    #[test]
    fn test_shortest_has_no_shorter() {
        assert_eq!(CallDuration::Min15.shorter(), None);
    }

    #[test]
    fn test_label_round_trip() {
        for d in CALL_DURATIONS {
            assert_eq!(CallDuration::parse(d.label()), Some(d));
        }
        assert_eq!(CallDuration::parse("45min"), None);
    }
}
