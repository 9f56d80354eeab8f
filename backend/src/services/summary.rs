//! Summary retrieval.
//!
//! Retrieval is a plain async function returning the summary or a failure. It
//! does not cache, retry or notify anyone; consumers that want change
//! notifications register with a [`SummaryFeed`](super::summary_feed::SummaryFeed).

use log::{debug, warn};

use crate::api::{PlayerId, PlayerInfo, PlayerSummary, ValidationReport};
use crate::db::repository::{RepositoryError, RepositoryResult, SummaryRepository};

use super::validation::validate_summary;

/// Failure to deliver a usable summary.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// The provider could not supply the data (unknown player, connection, timeout).
    #[error("summary provider failure: {0}")]
    ProviderFailure(#[from] RepositoryError),

    /// The provider answered, but the data violates the model's invariants.
    #[error("malformed summary for player {player_id}: {} error(s)", .report.errors.len())]
    MalformedData {
        player_id: PlayerId,
        report: Box<ValidationReport>,
    },
}

impl SummaryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SummaryError::ProviderFailure(e) if e.is_not_found())
    }
}

/// Fetch the summary of `player_id` from the provider.
///
/// The summary is returned exactly as delivered; see [`fetch_validated_summary`]
/// for the checked variant.
pub async fn fetch_player_summary<R>(
    repo: &R,
    player_id: PlayerId,
) -> Result<PlayerSummary, SummaryError>
where
    R: SummaryRepository + ?Sized,
{
    debug!("Fetching summary for player {}", player_id);
    let summary = repo
        .get_player_summary(player_id)
        .await
        .map_err(|e| e.with_operation("fetch_player_summary"))?;
    debug!(
        "Player {} summary: {} game(s)",
        player_id,
        summary.games.len()
    );
    Ok(summary)
}

/// Fetch a summary and reject it if validation finds any error-level issue.
///
/// Warnings do not fail the call; they are returned alongside the summary.
pub async fn fetch_validated_summary<R>(
    repo: &R,
    player_id: PlayerId,
) -> Result<(PlayerSummary, ValidationReport), SummaryError>
where
    R: SummaryRepository + ?Sized,
{
    let summary = fetch_player_summary(repo, player_id).await?;
    let report = validate_summary(&summary);

    if report.has_errors() {
        warn!(
            "Summary for player {} is malformed: {} error(s)",
            player_id,
            report.errors.len()
        );
        return Err(SummaryError::MalformedData {
            player_id,
            report: Box::new(report),
        });
    }
    Ok((summary, report))
}

/// List every player the provider knows about.
pub async fn list_players<R>(repo: &R) -> Result<Vec<PlayerInfo>, SummaryError>
where
    R: SummaryRepository + ?Sized,
{
    Ok(repo.list_players().await?)
}

pub async fn health_check<R>(repo: &R) -> RepositoryResult<bool>
where
    R: SummaryRepository + ?Sized,
{
    repo.health_check().await
}
