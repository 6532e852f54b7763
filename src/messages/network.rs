//! Network messages - communication between App and Network layers

use crate::models::FetchFailure;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch page info for `target`
    FetchPageInfo {
        id: u64,
        target: String,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// Body arrived and parsed as JSON, whatever the HTTP status
    Loaded {
        id: u64,
        payload: serde_json::Value,
        time_ms: u64,
    },
    /// Transport or parse failure
    Failed {
        id: u64,
        failure: FetchFailure,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Loaded { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::Loaded { time_ms, .. } => *time_ms,
            NetworkResponse::Failed { time_ms, .. } => *time_ms,
        }
    }
}
