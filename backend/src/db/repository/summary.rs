//! Read side of the summary provider.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::PlayerInfo;
use crate::models::{PlayerId, PlayerSummary};

/// Repository trait answering summary lookups.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait SummaryRepository: Send + Sync {
    /// Check if the backing store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Build the summary for one player.
    ///
    /// Games are ordered by date; the shots of each game keep their stored order.
    ///
    /// # Returns
    /// * `Ok(PlayerSummary)` - Name plus every game the player has a stat line for
    /// * `Err(RepositoryError::NotFound)` - If the player doesn't exist
    /// * `Err(RepositoryError)` - If the provider cannot answer
    async fn get_player_summary(&self, player_id: PlayerId) -> RepositoryResult<PlayerSummary>;

    /// List all known players, ordered by id.
    async fn list_players(&self) -> RepositoryResult<Vec<PlayerInfo>>;
}
