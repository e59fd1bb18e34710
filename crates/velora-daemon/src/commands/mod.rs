//! IPC command handlers.
//!
//! Each submodule implements the commands for one IPC category.

pub mod diagnostics;
pub mod economy;
pub mod profile;
pub mod rates;

use serde_json::Value;

use velora_types::ProfileId;

use crate::rpc::RpcError;

/// Extract and decode the `profile_id` parameter (32 hex chars).
pub(crate) fn parse_profile_id(params: &Value) -> Result<ProfileId, RpcError> {
    let hex_id = params
        .get("profile_id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params("profile_id required"))?;

    let bytes = hex::decode(hex_id)
        .map_err(|_| RpcError::invalid_params("profile_id must be hex"))?;
    bytes
        .try_into()
        .map_err(|_| RpcError::invalid_params("profile_id must be 16 bytes"))
}

/// Map a database error onto the RPC error space.
pub(crate) fn map_db_error(e: velora_db::DbError) -> RpcError {
    match e {
        velora_db::DbError::NotFound(_) => RpcError::profile_not_found(),
        other => RpcError::internal_error(&format!("db error: {other}")),
    }
}
