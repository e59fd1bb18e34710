//! Profile command handlers.

use std::sync::Arc;

use serde_json::Value;

use velora_types::profile::{AvailabilityStatus, EarnerProfile};
use velora_types::rates::RateColumns;

use crate::accounting;
use crate::commands::{map_db_error, parse_profile_id};
use crate::events::Event;
use crate::rpc::RpcError;
use crate::DaemonState;

type Result = std::result::Result<Value, RpcError>;

/// JSON shape for one profile.
fn profile_json(profile: &EarnerProfile) -> Value {
    serde_json::json!({
        "profile_id": hex::encode(profile.profile_id),
        "display_name": profile.display_name,
        "availability": profile.availability.as_str(),
        "rates": RateColumns::from(profile.rates),
        "created_at": profile.created_at,
        "updated_at": profile.updated_at,
    })
}

/// Create a new earner profile with the platform default rates.
pub async fn create_profile(state: &Arc<DaemonState>, params: &Value) -> Result {
    let display_name = params
        .get("display_name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params("display_name required"))?;
    if display_name.is_empty() {
        return Err(RpcError::invalid_params("display_name must not be empty"));
    }

    let profile_id: [u8; 16] = rand::random();
    let now = accounting::now_unix();
    let profile = EarnerProfile::new(profile_id, display_name, now);

    let db = state.db.lock().await;
    velora_db::queries::profiles::insert_profile(&db, &profile)
        .map_err(|e| RpcError::internal_error(&format!("db error: {e}")))?;

    state.event_bus.emit(Event {
        event_type: "ProfileCreated".to_string(),
        timestamp: now,
        payload: serde_json::json!({"profile_id": hex::encode(profile_id)}),
    });

    Ok(profile_json(&profile))
}

/// Fetch a profile.
pub async fn get_profile(state: &Arc<DaemonState>, params: &Value) -> Result {
    let profile_id = parse_profile_id(params)?;

    let db = state.db.lock().await;
    let profile =
        velora_db::queries::profiles::get_profile(&db, &profile_id).map_err(map_db_error)?;

    Ok(profile_json(&profile))
}

/// Update a profile's display name.
pub async fn update_display_name(state: &Arc<DaemonState>, params: &Value) -> Result {
    let profile_id = parse_profile_id(params)?;
    let display_name = params
        .get("display_name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params("display_name required"))?;
    if display_name.is_empty() {
        return Err(RpcError::invalid_params("display_name must not be empty"));
    }

    let db = state.db.lock().await;
    let now = accounting::now_unix();
    velora_db::queries::profiles::update_display_name(&db, &profile_id, display_name, now)
        .map_err(map_db_error)?;

    Ok(serde_json::json!({"updated": true}))
}

/// Update a profile's availability.
pub async fn set_availability(state: &Arc<DaemonState>, params: &Value) -> Result {
    let profile_id = parse_profile_id(params)?;
    let availability = params
        .get("availability")
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params("availability required"))?;
    let availability = AvailabilityStatus::parse(availability)
        .map_err(|e| RpcError::invalid_params(&e.to_string()))?;

    let db = state.db.lock().await;
    let now = accounting::now_unix();
    velora_db::queries::profiles::set_availability(&db, &profile_id, availability, now)
        .map_err(map_db_error)?;

    state.event_bus.emit(Event {
        event_type: "AvailabilityChanged".to_string(),
        timestamp: now,
        payload: serde_json::json!({
            "profile_id": hex::encode(profile_id),
            "availability": availability.as_str(),
        }),
    });

    Ok(serde_json::json!({"updated": true}))
}
