//! Diagnostics & Settings command handlers.

use std::sync::Arc;

use serde_json::Value;

use crate::accounting;
use crate::rpc::RpcError;
use crate::DaemonState;

type Result = std::result::Result<Value, RpcError>;

/// Report the active pricing policy so settings screens can render bounds
/// without hardcoding them.
pub async fn get_pricing_policy(state: &Arc<DaemonState>) -> Result {
    serde_json::to_value(state.policy).map_err(|e| RpcError::internal_error(&e.to_string()))
}

/// Set theme settings.
pub async fn set_theme_settings(state: &Arc<DaemonState>, params: &Value) -> Result {
    let mode = params
        .get("mode")
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params("mode required"))?;

    if !["light", "dark", "system"].contains(&mode) {
        return Err(RpcError::settings_invalid("mode must be light/dark/system"));
    }

    let db = state.db.lock().await;
    velora_db::queries::settings::set(&db, "theme_mode", mode)
        .map_err(|e| RpcError::internal_error(&format!("db error: {e}")))?;

    if let Some(accent) = params.get("accent_color").and_then(|v| v.as_str()) {
        velora_db::queries::settings::set(&db, "accent_color", accent)
            .map_err(|e| RpcError::internal_error(&format!("db error: {e}")))?;
    }

    Ok(serde_json::json!({"updated": true}))
}

/// Report daemon status.
pub async fn daemon_status(state: &Arc<DaemonState>) -> Result {
    Ok(serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "accounting_day": accounting::current_day(),
        "events_emitted": state.event_bus.sequence(),
        "data_dir": state.config.data_dir(),
    }))
}

/// Subscribe to daemon events.
pub async fn subscribe_events(_state: &Arc<DaemonState>, params: &Value) -> Result {
    let _filter = params.get("filter");

    let sub_id: [u8; 16] = rand::random();
    Ok(serde_json::json!({
        "subscription_id": hex::encode(sub_id),
    }))
}

/// Unsubscribe from daemon events.
pub async fn unsubscribe_events(_state: &Arc<DaemonState>, params: &Value) -> Result {
    let _subscription_id = params
        .get("subscription_id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params("subscription_id required"))?;

    Ok(serde_json::json!({"unsubscribed": true}))
}
