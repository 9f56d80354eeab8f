use serde::{Deserialize, Serialize};

use crate::api::PixelPoint;

/// One shot placed on the court diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottedShot {
    pub is_make: bool,
    pub location_x: qtty::Feet,
    pub location_y: qtty::Feet,
    /// Offset from the basket in diagram pixels (unrounded).
    pub pixel: PixelPoint,
}

/// Shots of a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameShotChart {
    pub date: String,
    pub shots: Vec<PlottedShot>,
    /// Shots left off the chart because their location was not a finite number.
    pub skipped_shots: usize,
}

/// Shot chart for one player summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotChartData {
    pub player_name: String,
    pub pixels_per_foot: f64,
    pub games: Vec<GameShotChart>,
}

impl ShotChartData {
    /// The "no games" state.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn shot_count(&self) -> usize {
        self.games.iter().map(|g| g.shots.len()).sum()
    }
}

/// Route function name constant
pub const GET_SHOT_CHART: &str = "get_shot_chart";
