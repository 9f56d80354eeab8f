//! Stored records behind the summary provider.
//!
//! The provider keeps teams, players, games and per-game stat lines as separate
//! records and joins them into a [`PlayerSummary`](crate::models::PlayerSummary)
//! on request.

use serde::{Deserialize, Serialize};

use crate::models::{Game, GameId, PlayerId, TeamId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
}

/// A contest between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    /// ISO 8601 date (`YYYY-MM-DD`)
    pub date: String,
    pub home_team: TeamId,
    pub away_team: TeamId,
}

/// One player's box score line for one game.
///
/// `line.date` is ignored when a summary is assembled; the date of the
/// referenced [`GameRecord`] wins.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatLine {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub team_id: TeamId,
    pub line: Game,
}

impl PlayerStatLine {
    pub fn new(player_id: PlayerId, game_id: GameId, team_id: TeamId, line: Game) -> Self {
        Self {
            player_id,
            game_id,
            team_id,
            line,
        }
    }
}
