//! Rate settings command handlers.
//!
//! Two-tier flow: `preview_call_rates` runs the live-clamp edit session for
//! settings screens (each submitted value is pulled into range and the
//! corrections are reported back), while `update_call_rates` is the save
//! path: the full set is hard-validated and either persisted as a whole or
//! rejected with the validator's reason.

use std::sync::Arc;

use serde_json::Value;

use velora_pricing::validate::validate_rate_set;
use velora_session::display::rate_card;
use velora_session::session::RateEditSession;
use velora_types::calls::CALL_DURATIONS;
use velora_types::rates::{RateColumns, RateSet};

use crate::accounting;
use crate::commands::{map_db_error, parse_profile_id};
use crate::events::Event;
use crate::rpc::RpcError;
use crate::DaemonState;

type Result = std::result::Result<Value, RpcError>;

/// Extract the full four-rate object from request params.
fn parse_rates(params: &Value) -> std::result::Result<RateSet, RpcError> {
    let raw = params
        .get("rates")
        .cloned()
        .ok_or_else(|| RpcError::invalid_params("rates required"))?;
    let columns: RateColumns = serde_json::from_value(raw)
        .map_err(|e| RpcError::invalid_params(&format!("malformed rates: {e}")))?;
    Ok(columns.into())
}

/// Get the persisted rates for a profile.
pub async fn get_call_rates(state: &Arc<DaemonState>, params: &Value) -> Result {
    let profile_id = parse_profile_id(params)?;

    let db = state.db.lock().await;
    let profile =
        velora_db::queries::profiles::get_profile(&db, &profile_id).map_err(map_db_error)?;

    Ok(serde_json::json!({
        "rates": RateColumns::from(profile.rates),
        "updated_at": profile.updated_at,
    }))
}

/// Run a submitted rate set through the live-clamp edit session without
/// persisting anything.
///
/// Values are clamped in ascending duration order, so each duration sees
/// its shorter neighbor's already-corrected value. The result is always a
/// saveable set; the corrections tell the UI what to surface.
pub async fn preview_call_rates(state: &Arc<DaemonState>, params: &Value) -> Result {
    let profile_id = parse_profile_id(params)?;
    let submitted = parse_rates(params)?;

    let current = {
        let db = state.db.lock().await;
        velora_db::queries::profiles::get_rates(&db, &profile_id).map_err(map_db_error)?
    };

    let mut session = RateEditSession::new(state.policy, current);
    let mut corrections = Vec::new();
    for duration in CALL_DURATIONS {
        let correction = session
            .edit(duration, submitted.rate(duration))
            .map_err(|e| RpcError::internal_error(&e.to_string()))?;
        corrections.extend(correction);
    }
    let preview = *session.draft();

    let card = rate_card(&state.policy, &preview)
        .map_err(|e| RpcError::internal_error(&e.to_string()))?;

    Ok(serde_json::json!({
        "rates": RateColumns::from(preview),
        "corrections": corrections,
        "rate_card": card,
    }))
}

/// Validate and persist a full rate set: all four values in one update.
///
/// An invalid set blocks the save and nothing is written.
pub async fn update_call_rates(state: &Arc<DaemonState>, params: &Value) -> Result {
    let profile_id = parse_profile_id(params)?;
    let submitted = parse_rates(params)?;

    if let Err(e) = validate_rate_set(&state.policy, &submitted) {
        return Err(RpcError::invalid_rates(&e.to_string()));
    }

    let db = state.db.lock().await;
    let now = accounting::now_unix();
    velora_db::queries::profiles::update_rates(&db, &profile_id, &submitted, now)
        .map_err(map_db_error)?;

    state.event_bus.emit(Event {
        event_type: "RatesUpdated".to_string(),
        timestamp: now,
        payload: serde_json::json!({
            "profile_id": hex::encode(profile_id),
            "rates": RateColumns::from(submitted),
        }),
    });

    let card = rate_card(&state.policy, &submitted)
        .map_err(|e| RpcError::internal_error(&e.to_string()))?;

    Ok(serde_json::json!({
        "saved_rates": RateColumns::from(submitted),
        "corrections": [],
        "rate_card": card,
    }))
}

/// Get the display card derived from the persisted rates.
pub async fn get_rate_card(state: &Arc<DaemonState>, params: &Value) -> Result {
    let profile_id = parse_profile_id(params)?;

    let rates = {
        let db = state.db.lock().await;
        velora_db::queries::profiles::get_rates(&db, &profile_id).map_err(map_db_error)?
    };

    let card = rate_card(&state.policy, &rates)
        .map_err(|e| RpcError::internal_error(&e.to_string()))?;

    Ok(serde_json::json!({ "rate_card": card }))
}
