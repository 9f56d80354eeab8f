//! Player summary data model.
//!
//! These types are the contract between the summary provider and the shot chart
//! renderer. They carry no behavior beyond structural access and perform no
//! validation on construction: a summary whose counters contradict each other is
//! still representable, and is flagged later by
//! [`crate::services::validation::validate_summary`].
//!
//! The serde layout matches the wire format served by the API (camelCase keys,
//! shooting splits flattened into `*Made` / `*Attempted` pairs).

use chrono::NaiveDate;
use qtty::{Feet, Minutes};
use serde::{Deserialize, Serialize};

/// ISO 8601 calendar date format used for game dates.
pub const GAME_DATE_FORMAT: &str = "%Y-%m-%d";

/// One attempted field goal.
///
/// Locations are measured in feet from the centre of the basket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub is_make: bool,
    pub location_x: Feet,
    pub location_y: Feet,
}

impl Shot {
    pub fn new(is_make: bool, location_x_ft: f64, location_y_ft: f64) -> Self {
        Self {
            is_make,
            location_x: Feet::new(location_x_ft),
            location_y: Feet::new(location_y_ft),
        }
    }

    /// True when both coordinates are finite numbers.
    pub fn has_finite_location(&self) -> bool {
        self.location_x.value().is_finite() && self.location_y.value().is_finite()
    }
}

/// A made/attempted pair for one shot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShootingSplit {
    pub made: u32,
    pub attempted: u32,
}

impl ShootingSplit {
    pub fn new(made: u32, attempted: u32) -> Self {
        Self { made, attempted }
    }

    /// Whether `made <= attempted`.
    pub fn is_consistent(&self) -> bool {
        self.made <= self.attempted
    }
}

/// One player's performance in a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    /// ISO 8601 date (`YYYY-MM-DD`), kept verbatim from the provider.
    pub date: String,
    pub is_starter: bool,
    pub minutes: Minutes,
    pub points: u32,
    pub assists: u32,
    pub offensive_rebounds: u32,
    pub defensive_rebounds: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub defensive_fouls: u32,
    pub offensive_fouls: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
    pub two_pointers_made: u32,
    pub two_pointers_attempted: u32,
    pub three_pointers_made: u32,
    pub three_pointers_attempted: u32,
    /// Field goal attempts in the order they were taken.
    pub shots: Vec<Shot>,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            date: String::new(),
            is_starter: false,
            minutes: Minutes::new(0.0),
            points: 0,
            assists: 0,
            offensive_rebounds: 0,
            defensive_rebounds: 0,
            steals: 0,
            blocks: 0,
            turnovers: 0,
            defensive_fouls: 0,
            offensive_fouls: 0,
            free_throws_made: 0,
            free_throws_attempted: 0,
            two_pointers_made: 0,
            two_pointers_attempted: 0,
            three_pointers_made: 0,
            three_pointers_attempted: 0,
            shots: Vec::new(),
        }
    }
}

impl Game {
    /// An empty stat line for the given date.
    pub fn on(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn free_throws(&self) -> ShootingSplit {
        ShootingSplit::new(self.free_throws_made, self.free_throws_attempted)
    }

    pub fn two_pointers(&self) -> ShootingSplit {
        ShootingSplit::new(self.two_pointers_made, self.two_pointers_attempted)
    }

    pub fn three_pointers(&self) -> ShootingSplit {
        ShootingSplit::new(self.three_pointers_made, self.three_pointers_attempted)
    }

    /// All three splits, labelled with their wire field prefix.
    pub fn splits(&self) -> [(&'static str, ShootingSplit); 3] {
        [
            ("freeThrows", self.free_throws()),
            ("twoPointers", self.two_pointers()),
            ("threePointers", self.three_pointers()),
        ]
    }

    /// Parse [`Game::date`]; `None` when it is not a `YYYY-MM-DD` date.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, GAME_DATE_FORMAT).ok()
    }
}

/// Aggregate root: a player and the games delivered for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl PlayerSummary {
    pub fn new(name: impl Into<String>, games: Vec<Game>) -> Self {
        Self {
            name: name.into(),
            games,
        }
    }

    /// True when the provider delivered no games for the player.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Every shot across all games, in game order.
    pub fn shots(&self) -> impl Iterator<Item = &Shot> {
        self.games.iter().flat_map(|game| game.shots.iter())
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
