//! JSON-RPC server over Unix socket.
//!
//! Listens on a Unix domain socket, accepts connections, and dispatches
//! newline-delimited JSON-RPC 2.0 method calls to the appropriate command
//! handlers.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixListener;
use tracing::{debug, error, info, warn};

use crate::commands;
use crate::DaemonState;

/// JSON-RPC request.
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version (must be "2.0").
    pub jsonrpc: String,
    /// Request ID.
    pub id: serde_json::Value,
    /// Method name.
    pub method: String,
    /// Parameters.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// JSON-RPC response.
#[derive(Debug, Serialize)]
pub struct RpcResponse {
    /// JSON-RPC version.
    pub jsonrpc: String,
    /// Request ID.
    pub id: serde_json::Value,
    /// Result or error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// JSON-RPC error object.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RpcError {
    /// Error code.
    pub code: i32,
    /// Error name.
    pub message: String,
    /// Optional structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcResponse {
    /// Create a success response.
    pub fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: serde_json::Value, error: RpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

impl RpcError {
    // Standard JSON-RPC errors

    /// Parse error (-32700).
    pub fn parse_error() -> Self {
        Self {
            code: -32700,
            message: "PARSE_ERROR".to_string(),
            data: None,
        }
    }

    /// Invalid request (-32600).
    pub fn invalid_request() -> Self {
        Self {
            code: -32600,
            message: "INVALID_REQUEST".to_string(),
            data: None,
        }
    }

    /// Method not found (-32601).
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "METHOD_NOT_FOUND".to_string(),
            data: Some(serde_json::json!({"method": method})),
        }
    }

    /// Invalid params (-32602).
    pub fn invalid_params(detail: &str) -> Self {
        Self {
            code: -32602,
            message: "INVALID_PARAMS".to_string(),
            data: Some(serde_json::json!({"detail": detail})),
        }
    }

    /// Internal error (-32603).
    pub fn internal_error(detail: &str) -> Self {
        Self {
            code: -32603,
            message: "INTERNAL_ERROR".to_string(),
            data: Some(serde_json::json!({"detail": detail})),
        }
    }

    // Domain errors

    /// Rate set rejected by validation (-32020). Blocks the save; the
    /// reason names the failing duration or pair.
    pub fn invalid_rates(reason: &str) -> Self {
        Self {
            code: -32020,
            message: "INVALID_RATES".to_string(),
            data: Some(serde_json::json!({"reason": reason})),
        }
    }

    /// Profile not found (-32021).
    pub fn profile_not_found() -> Self {
        Self {
            code: -32021,
            message: "PROFILE_NOT_FOUND".to_string(),
            data: None,
        }
    }

    /// Invalid settings value (-32125).
    pub fn settings_invalid(detail: &str) -> Self {
        Self {
            code: -32125,
            message: "SETTINGS_INVALID".to_string(),
            data: Some(serde_json::json!({"detail": detail})),
        }
    }
}

/// The RPC server.
pub struct RpcServer {
    state: Arc<DaemonState>,
    socket_path: PathBuf,
}

impl RpcServer {
    /// Create a new RPC server.
    pub fn new(state: Arc<DaemonState>, socket_path: PathBuf) -> Self {
        Self { state, socket_path }
    }

    /// Run the server, accepting connections.
    pub async fn run(&self) -> anyhow::Result<()> {
        // Remove stale socket file
        let _ = std::fs::remove_file(&self.socket_path);

        let listener = UnixListener::bind(&self.socket_path)?;
        info!("IPC server listening on {:?}", self.socket_path);

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    let state = self.state.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(state, stream).await {
                            warn!("Connection error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    error!("Accept error: {}", e);
                }
            }
        }
    }
}

/// Handle a single client connection.
async fn handle_connection(
    state: Arc<DaemonState>,
    stream: tokio::net::UnixStream,
) -> anyhow::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            break; // EOF
        }

        let response = match serde_json::from_str::<RpcRequest>(&line) {
            Ok(request) => dispatch_request(state.clone(), request).await,
            Err(_) => RpcResponse::error(serde_json::Value::Null, RpcError::parse_error()),
        };

        let mut response_json = serde_json::to_string(&response)?;
        response_json.push('\n');
        writer.write_all(response_json.as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}

/// Dispatch a JSON-RPC request to the appropriate command handler.
async fn dispatch_request(state: Arc<DaemonState>, request: RpcRequest) -> RpcResponse {
    let id = request.id.clone();
    let method = request.method.as_str();

    if request.jsonrpc != "2.0" {
        return RpcResponse::error(id, RpcError::invalid_request());
    }

    debug!("Dispatching RPC method: {}", method);

    let result = match method {
        // Profile commands
        "create_profile" => commands::profile::create_profile(&state, &request.params).await,
        "get_profile" => commands::profile::get_profile(&state, &request.params).await,
        "update_display_name" => {
            commands::profile::update_display_name(&state, &request.params).await
        }
        "set_availability" => commands::profile::set_availability(&state, &request.params).await,

        // Rate commands
        "get_call_rates" => commands::rates::get_call_rates(&state, &request.params).await,
        "preview_call_rates" => commands::rates::preview_call_rates(&state, &request.params).await,
        "update_call_rates" => commands::rates::update_call_rates(&state, &request.params).await,
        "get_rate_card" => commands::rates::get_rate_card(&state, &request.params).await,

        // Economy commands
        "get_earnings_summary" => {
            commands::economy::get_earnings_summary(&state, &request.params).await
        }
        "get_transaction_history" => {
            commands::economy::get_transaction_history(&state, &request.params).await
        }
        "record_transaction" => {
            commands::economy::record_transaction(&state, &request.params).await
        }

        // Diagnostics & settings commands
        "get_pricing_policy" => commands::diagnostics::get_pricing_policy(&state).await,
        "set_theme_settings" => {
            commands::diagnostics::set_theme_settings(&state, &request.params).await
        }
        "daemon_status" => commands::diagnostics::daemon_status(&state).await,
        "subscribe_events" => commands::diagnostics::subscribe_events(&state, &request.params).await,
        "unsubscribe_events" => {
            commands::diagnostics::unsubscribe_events(&state, &request.params).await
        }

        _ => Err(RpcError::method_not_found(method)),
    };

    match result {
        Ok(value) => RpcResponse::success(id, value),
        Err(err) => RpcResponse::error(id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_codes() {
        let err = RpcError::invalid_rates("30min rate too low");
        assert_eq!(err.code, -32020);
        assert_eq!(err.message, "INVALID_RATES");

        let err = RpcError::profile_not_found();
        assert_eq!(err.code, -32021);

        let err = RpcError::method_not_found("unknown");
        assert_eq!(err.code, -32601);
    }

    #[test]
    fn test_rpc_response_success() {
        let resp = RpcResponse::success(
            serde_json::json!(1),
            serde_json::json!({"video_15min_rate": 200}),
        );
        assert!(resp.result.is_some());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_rpc_response_error() {
        let resp = RpcResponse::error(serde_json::json!(1), RpcError::internal_error("test"));
        assert!(resp.result.is_none());
        assert!(resp.error.is_some());
    }
}
