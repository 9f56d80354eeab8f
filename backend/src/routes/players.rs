use crate::api::PlayerId;
use serde::{Deserialize, Serialize};

/// Lightweight player listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub player_id: PlayerId,
    pub name: String,
}

pub const LIST_PLAYERS: &str = "list_players";
pub const GET_PLAYER_SUMMARY: &str = "get_player_summary";
