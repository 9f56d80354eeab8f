//! Shot chart projection.
//!
//! Turns a summary's shot locations (feet from the basket) into pixel offsets
//! on a court diagram using a [`CourtScale`]. The summary itself is not
//! validated here; non-finite locations are skipped, anything else is drawn.

use log::warn;

use crate::api::{
    CourtScale, GameShotChart, PlayerId, PlayerSummary, PlottedShot, ShotChartData,
};
use crate::db::repository::SummaryRepository;

use super::summary::{fetch_player_summary, SummaryError};

/// Place every shot of a summary on the court diagram.
///
/// Games keep their order. Shots whose location is not finite are left off
/// the chart and counted in `skipped_shots`. Pixel offsets are not rounded.
pub fn build_shot_chart(summary: &PlayerSummary, scale: &CourtScale) -> ShotChartData {
    let games = summary
        .games
        .iter()
        .map(|game| {
            let mut shots = Vec::with_capacity(game.shots.len());
            let mut skipped_shots = 0;

            for shot in &game.shots {
                if !shot.has_finite_location() {
                    skipped_shots += 1;
                    continue;
                }
                shots.push(PlottedShot {
                    is_make: shot.is_make,
                    location_x: shot.location_x,
                    location_y: shot.location_y,
                    pixel: scale.project(shot),
                });
            }

            if skipped_shots > 0 {
                warn!(
                    "{} on {}: {} shot(s) with non-finite location left off the chart",
                    summary.name, game.date, skipped_shots
                );
            }

            GameShotChart {
                date: game.date.clone(),
                shots,
                skipped_shots,
            }
        })
        .collect();

    ShotChartData {
        player_name: summary.name.clone(),
        pixels_per_foot: scale.pixels_per_foot(),
        games,
    }
}

/// Fetch a player's summary and build its shot chart.
pub async fn get_shot_chart<R>(
    repo: &R,
    player_id: PlayerId,
    scale: &CourtScale,
) -> Result<ShotChartData, SummaryError>
where
    R: SummaryRepository + ?Sized,
{
    let summary = fetch_player_summary(repo, player_id).await?;
    Ok(build_shot_chart(&summary, scale))
}
