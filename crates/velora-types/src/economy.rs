//! Credit economy structures: the earnings ledger and its summaries.

use serde::{Deserialize, Serialize};

use crate::{Credits, MicroUsd, ProfileId};

/// What a credit transaction paid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    Message,
    VideoCall,
    AudioCall,
    Gift,
    Payout,
}

/// Unknown transaction kind label on the wire or in the database.
#[derive(Debug, thiserror::Error)]
#[error("unknown transaction kind '{0}'")]
pub struct UnknownTxKind(pub String);

impl TxKind {
    /// The stored/wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            TxKind::Message => "message",
            TxKind::VideoCall => "video_call",
            TxKind::AudioCall => "audio_call",
            TxKind::Gift => "gift",
            TxKind::Payout => "payout",
        }
    }

    /// Parse the stored/wire form.
    pub fn parse(s: &str) -> Result<Self, UnknownTxKind> {
        match s {
            "message" => Ok(TxKind::Message),
            "video_call" => Ok(TxKind::VideoCall),
            "audio_call" => Ok(TxKind::AudioCall),
            "gift" => Ok(TxKind::Gift),
            "payout" => Ok(TxKind::Payout),
            other => Err(UnknownTxKind(other.to_string())),
        }
    }
}

/// One row of the earnings ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct CreditTransaction {
    #[ts(type = "string")]
    pub tx_id: [u8; 16],
    #[ts(type = "string")]
    pub profile_id: ProfileId,
    pub kind: TxKind,
    /// Credits spent by the seeker.
    pub credits: Credits,
    /// The creator's share of the credit value at the time of the transaction.
    pub creator_micro_usd: MicroUsd,
    /// Seeker display handle, if known.
    pub counterparty: Option<String>,
    /// Accounting day index (Unix time / day length).
    pub day: u64,
    pub timestamp: u64,
}

/// Aggregated earnings for one profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct EarningsSummary {
    pub credits_all_time: Credits,
    pub credits_today: Credits,
    pub creator_micro_usd_all_time: MicroUsd,
    pub creator_micro_usd_today: MicroUsd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_kind_round_trip() {
        for kind in [
            TxKind::Message,
            TxKind::VideoCall,
            TxKind::AudioCall,
            TxKind::Gift,
            TxKind::Payout,
        ] {
            assert_eq!(TxKind::parse(kind.as_str()).expect("parse"), kind);
        }
        assert!(TxKind::parse("tip").is_err());
    }

    #[test]
    fn test_transaction_serde_shape() {
        let tx = CreditTransaction {
            tx_id: [1u8; 16],
            profile_id: [2u8; 16],
            kind: TxKind::VideoCall,
            credits: 500,
            creator_micro_usd: 35_000_000,
            counterparty: None,
            day: 19_676,
            timestamp: 1_700_000_000,
        };
        let json = serde_json::to_value(&tx).expect("serialize");
        assert_eq!(json["kind"], "video_call");
        assert_eq!(json["credits"], 500);
    }
}
