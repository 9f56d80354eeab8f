//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies for summaries, shot charts and validation reports are the
//! crate's own serializable types, re-exported here.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Players
    PlayerInfo, PlayerSummary,
    // Shot chart
    GameShotChart, PlottedShot, ShotChartData,
    // Validation
    ValidationIssue, ValidationReport,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Summary provider status
    pub database: String,
}

/// Player list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerListResponse {
    pub players: Vec<PlayerInfo>,
    /// Total count
    pub total: usize,
}

/// Query parameters for the summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SummaryQuery {
    /// Reject summaries with error-level validation issues (default: false)
    #[serde(default)]
    pub strict: bool,
}

/// Query parameters for the shot chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShotChartQuery {
    /// Diagram scale (optional, default: server configuration)
    #[serde(default)]
    pub pixels_per_foot: Option<f64>,
}
