//! Earner profile and rate query functions.

use rusqlite::Connection;

use velora_types::profile::{AvailabilityStatus, EarnerProfile};
use velora_types::rates::RateSet;
use velora_types::ProfileId;

use crate::{DbError, Result};

/// Insert a new earner profile.
pub fn insert_profile(conn: &Connection, profile: &EarnerProfile) -> Result<()> {
    conn.execute(
        "INSERT INTO earner_profiles
             (profile_id, display_name, availability,
              video_15min_rate, video_30min_rate, video_60min_rate, video_90min_rate,
              created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        rusqlite::params![
            profile.profile_id.as_slice(),
            profile.display_name,
            profile.availability.as_str(),
            profile.rates.video_15 as i64,
            profile.rates.video_30 as i64,
            profile.rates.video_60 as i64,
            profile.rates.video_90 as i64,
            profile.created_at as i64,
            profile.updated_at as i64,
        ],
    )?;
    Ok(())
}

/// Fetch a profile by id.
pub fn get_profile(conn: &Connection, profile_id: &ProfileId) -> Result<EarnerProfile> {
    conn.query_row(
        "SELECT profile_id, display_name, availability,
                video_15min_rate, video_30min_rate, video_60min_rate, video_90min_rate,
                created_at, updated_at
         FROM earner_profiles WHERE profile_id = ?1",
        [profile_id.as_slice()],
        |row| {
            Ok(RawProfile {
                profile_id: row.get(0)?,
                display_name: row.get(1)?,
                availability: row.get(2)?,
                rates: [
                    row.get::<_, i64>(3)? as u64,
                    row.get::<_, i64>(4)? as u64,
                    row.get::<_, i64>(5)? as u64,
                    row.get::<_, i64>(6)? as u64,
                ],
                created_at: row.get::<_, i64>(7)? as u64,
                updated_at: row.get::<_, i64>(8)? as u64,
            })
        },
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => DbError::NotFound("profile".to_string()),
        other => DbError::Sqlite(other),
    })?
    .into_profile()
}

/// Fetch just the rate set for a profile.
pub fn get_rates(conn: &Connection, profile_id: &ProfileId) -> Result<RateSet> {
    Ok(get_profile(conn, profile_id)?.rates)
}

/// Persist a validated rate set: all four columns in a single UPDATE, plus
/// an audit row recording the old and new vectors.
pub fn update_rates(
    conn: &Connection,
    profile_id: &ProfileId,
    rates: &RateSet,
    changed_at: u64,
) -> Result<()> {
    let old = get_rates(conn, profile_id)?;

    let updated = conn.execute(
        "UPDATE earner_profiles
         SET video_15min_rate = ?1, video_30min_rate = ?2,
             video_60min_rate = ?3, video_90min_rate = ?4,
             updated_at = ?5
         WHERE profile_id = ?6",
        rusqlite::params![
            rates.video_15 as i64,
            rates.video_30 as i64,
            rates.video_60 as i64,
            rates.video_90 as i64,
            changed_at as i64,
            profile_id.as_slice(),
        ],
    )?;
    if updated == 0 {
        return Err(DbError::NotFound("profile".to_string()));
    }

    conn.execute(
        "INSERT INTO rate_change_log
             (profile_id, old_15, old_30, old_60, old_90,
              new_15, new_30, new_60, new_90, changed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        rusqlite::params![
            profile_id.as_slice(),
            old.video_15 as i64,
            old.video_30 as i64,
            old.video_60 as i64,
            old.video_90 as i64,
            rates.video_15 as i64,
            rates.video_30 as i64,
            rates.video_60 as i64,
            rates.video_90 as i64,
            changed_at as i64,
        ],
    )?;

    tracing::info!(
        profile = ?profile_id,
        rates = ?rates.as_array(),
        "call rates updated"
    );
    Ok(())
}

/// Count audit rows for a profile.
pub fn rate_change_count(conn: &Connection, profile_id: &ProfileId) -> Result<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM rate_change_log WHERE profile_id = ?1",
        [profile_id.as_slice()],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

/// Update the display name.
pub fn update_display_name(
    conn: &Connection,
    profile_id: &ProfileId,
    display_name: &str,
    now: u64,
) -> Result<()> {
    let updated = conn.execute(
        "UPDATE earner_profiles SET display_name = ?1, updated_at = ?2 WHERE profile_id = ?3",
        rusqlite::params![display_name, now as i64, profile_id.as_slice()],
    )?;
    if updated == 0 {
        return Err(DbError::NotFound("profile".to_string()));
    }
    Ok(())
}

/// Update availability.
pub fn set_availability(
    conn: &Connection,
    profile_id: &ProfileId,
    availability: AvailabilityStatus,
    now: u64,
) -> Result<()> {
    let updated = conn.execute(
        "UPDATE earner_profiles SET availability = ?1, updated_at = ?2 WHERE profile_id = ?3",
        rusqlite::params![availability.as_str(), now as i64, profile_id.as_slice()],
    )?;
    if updated == 0 {
        return Err(DbError::NotFound("profile".to_string()));
    }
    Ok(())
}

/// Raw row shape before conversion into the typed profile.
struct RawProfile {
    profile_id: Vec<u8>,
    display_name: String,
    availability: String,
    rates: [u64; 4],
    created_at: u64,
    updated_at: u64,
}

impl RawProfile {
    fn into_profile(self) -> Result<EarnerProfile> {
        let profile_id: ProfileId = self
            .profile_id
            .try_into()
            .map_err(|_| DbError::Serialization("profile_id is not 16 bytes".to_string()))?;
        let availability = AvailabilityStatus::parse(&self.availability)
            .map_err(|e| DbError::Serialization(e.to_string()))?;
        Ok(EarnerProfile {
            profile_id,
            display_name: self.display_name,
            availability,
            rates: RateSet {
                video_15: self.rates[0],
                video_30: self.rates[1],
                video_60: self.rates[2],
                video_90: self.rates[3],
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
