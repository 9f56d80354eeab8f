//! Write side of the summary provider, used by the dataset loader.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::models::{GameRecord, PlayerRecord, PlayerStatLine, TeamRecord};

/// Repository trait for importing teams, players, games and stat lines.
///
/// Records are insert-only. Storing an id that already exists, or a record that
/// references an unknown id, fails with `RepositoryError::ValidationError`.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    async fn store_team(&self, team: TeamRecord) -> RepositoryResult<()>;

    async fn store_player(&self, player: PlayerRecord) -> RepositoryResult<()>;

    /// Store a game. Both teams must already exist and the date must parse as
    /// `YYYY-MM-DD`.
    async fn store_game(&self, game: GameRecord) -> RepositoryResult<()>;

    /// Store a player's line for a game. The player, game and team must exist,
    /// and the player may have at most one line per game.
    async fn store_player_stat(&self, stat: PlayerStatLine) -> RepositoryResult<()>;
}
