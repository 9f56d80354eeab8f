//! Public API surface for the backend.
//!
//! This file consolidates the data model and the DTO types served over HTTP.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    to_pixels, CourtScale, Game, GameId, PixelPoint, PlayerId, PlayerSummary, ScaleError,
    ShootingSplit, Shot, TeamId, DEFAULT_PIXELS_PER_FOOT,
};
pub use crate::routes::players::PlayerInfo;
pub use crate::routes::shot_chart::GameShotChart;
pub use crate::routes::shot_chart::PlottedShot;
pub use crate::routes::shot_chart::ShotChartData;
pub use crate::routes::validation::IssueCategory;
pub use crate::routes::validation::Severity;
pub use crate::routes::validation::ValidationIssue;
pub use crate::routes::validation::ValidationReport;
