//! Earner profile structures.

use serde::{Deserialize, Serialize};

use crate::rates::RateSet;
use crate::ProfileId;

/// Whether an earner is currently taking calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Available,
    Busy,
    Offline,
}

/// Unknown availability label on the wire or in the database.
#[derive(Debug, thiserror::Error)]
#[error("unknown availability '{0}'")]
pub struct UnknownAvailability(pub String);

impl AvailabilityStatus {
    /// The stored/wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "available",
            AvailabilityStatus::Busy => "busy",
            AvailabilityStatus::Offline => "offline",
        }
    }

    /// Parse the stored/wire form.
    pub fn parse(s: &str) -> Result<Self, UnknownAvailability> {
        match s {
            "available" => Ok(AvailabilityStatus::Available),
            "busy" => Ok(AvailabilityStatus::Busy),
            "offline" => Ok(AvailabilityStatus::Offline),
            other => Err(UnknownAvailability(other.to_string())),
        }
    }
}

/// An earner profile with its rate set.
///
/// Rate fields are required and defaulted at construction; readers never
/// fall back to literals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct EarnerProfile {
    #[ts(type = "string")]
    pub profile_id: ProfileId,
    pub display_name: String,
    pub availability: AvailabilityStatus,
    pub rates: RateSet,
    pub created_at: u64,
    pub updated_at: u64,
}

impl EarnerProfile {
    /// Create a new profile with the platform default rates.
    pub fn new(profile_id: ProfileId, display_name: impl Into<String>, now: u64) -> Self {
        Self {
            profile_id,
            display_name: display_name.into(),
            availability: AvailabilityStatus::Offline,
            rates: RateSet::default(),
            created_at: now,
            updated_at: now,
        }
    }
}
