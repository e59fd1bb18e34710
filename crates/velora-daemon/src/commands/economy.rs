//! Earnings ledger command handlers.

use std::sync::Arc;

use serde_json::Value;

use velora_pricing::earnings::creator_earnings_micro_usd;
use velora_types::economy::{CreditTransaction, TxKind};

use crate::accounting;
use crate::commands::{map_db_error, parse_profile_id};
use crate::events::Event;
use crate::rpc::RpcError;
use crate::DaemonState;

type Result = std::result::Result<Value, RpcError>;

/// Get a profile's earnings, all-time and for the current accounting day.
pub async fn get_earnings_summary(state: &Arc<DaemonState>, params: &Value) -> Result {
    let profile_id = parse_profile_id(params)?;

    let db = state.db.lock().await;
    let summary = velora_db::queries::transactions::earnings_summary(
        &db,
        &profile_id,
        accounting::current_day(),
    )
    .map_err(map_db_error)?;

    serde_json::to_value(summary).map_err(|e| RpcError::internal_error(&e.to_string()))
}

/// List a profile's recent transactions.
pub async fn get_transaction_history(state: &Arc<DaemonState>, params: &Value) -> Result {
    let profile_id = parse_profile_id(params)?;
    let limit = params
        .get("limit")
        .and_then(|v| v.as_u64())
        .unwrap_or(50)
        .min(500) as u32;

    let db = state.db.lock().await;
    let txs = velora_db::queries::transactions::recent(&db, &profile_id, limit)
        .map_err(map_db_error)?;

    let result: Vec<Value> = txs
        .iter()
        .map(|tx| {
            serde_json::json!({
                "tx_id": hex::encode(tx.tx_id),
                "kind": tx.kind.as_str(),
                "credits": tx.credits,
                "creator_micro_usd": tx.creator_micro_usd,
                "counterparty": tx.counterparty,
                "day": tx.day,
                "timestamp": tx.timestamp,
            })
        })
        .collect();

    Ok(serde_json::json!(result))
}

/// Record a paid interaction in the earnings ledger.
///
/// The creator's dollar share is computed from the credit price at the
/// current policy and stored with the row.
pub async fn record_transaction(state: &Arc<DaemonState>, params: &Value) -> Result {
    let profile_id = parse_profile_id(params)?;
    let kind = params
        .get("kind")
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params("kind required"))?;
    let kind = TxKind::parse(kind).map_err(|e| RpcError::invalid_params(&e.to_string()))?;
    let credits = params
        .get("credits")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| RpcError::invalid_params("credits required"))?;
    if credits == 0 {
        return Err(RpcError::invalid_params("credits must be positive"));
    }
    let counterparty = params
        .get("counterparty")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let creator_micro_usd = creator_earnings_micro_usd(&state.policy, credits)
        .map_err(|e| RpcError::invalid_params(&e.to_string()))?;

    let now = accounting::now_unix();
    let tx = CreditTransaction {
        tx_id: rand::random(),
        profile_id,
        kind,
        credits,
        creator_micro_usd,
        counterparty,
        day: accounting::day_of(now),
        timestamp: now,
    };

    let db = state.db.lock().await;
    velora_db::queries::transactions::record(&db, &tx).map_err(map_db_error)?;

    state.event_bus.emit(Event {
        event_type: "EarningsRecorded".to_string(),
        timestamp: now,
        payload: serde_json::json!({
            "profile_id": hex::encode(profile_id),
            "kind": tx.kind.as_str(),
            "credits": tx.credits,
            "creator_micro_usd": tx.creator_micro_usd,
        }),
    });

    Ok(serde_json::json!({"tx_id": hex::encode(tx.tx_id)}))
}
