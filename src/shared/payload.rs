//! Request and response payloads
//!
//! JSON bodies exchanged with the browser client. Field names are part of
//! the wire contract.

use serde::{Deserialize, Serialize};

/// Save diagram request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DiagramRequest {
    /// Full BPMN XML replacing the stored diagram
    pub new_diagram: String,
}

/// Current diagram, `null` until the first accepted save
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiagramResponse {
    pub diagram: Option<String>,
}

/// Confirmation of an accepted save
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SaveDiagramResponse {
    /// Always `"saved"`
    pub status: String,
    /// Byte length of the stored diagram
    pub size: usize,
}

/// Counter value after an add or delete
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserChangeResponse {
    /// `"added"` or `"deleted"`
    pub status: String,
    pub user_count: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserCountResponse {
    pub user_count: u32,
}

/// Result of a best-effort leave signal
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CleanupResponse {
    /// `"cleaned"` when a user was removed, `"unchanged"` otherwise
    pub status: String,
    pub user_count: u32,
    pub cleaned: bool,
}

/// Liveness probe body
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 timestamp of the probe
    pub timestamp: String,
    pub user_count: u32,
    pub diagram_bytes: usize,
}
