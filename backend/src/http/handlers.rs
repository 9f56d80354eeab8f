//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    HealthResponse, PlayerListResponse, PlayerSummary, ShotChartData, ShotChartQuery,
    SummaryQuery, ValidationReport,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::PlayerId;
use crate::models::CourtScale;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the provider is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Players
// =============================================================================

/// GET /v1/players
pub async fn list_players(State(state): State<AppState>) -> HandlerResult<PlayerListResponse> {
    let players = services::list_players(state.repository.as_ref()).await?;
    let total = players.len();

    Ok(Json(PlayerListResponse { players, total }))
}

/// GET /v1/players/{player_id}/summary
///
/// Returns the summary as delivered by the provider. With `?strict=true`,
/// a summary with error-level validation issues is rejected with 422.
pub async fn get_player_summary(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Query(query): Query<SummaryQuery>,
) -> HandlerResult<PlayerSummary> {
    let player_id = PlayerId::new(player_id);

    let summary = if query.strict {
        services::fetch_validated_summary(state.repository.as_ref(), player_id)
            .await?
            .0
    } else {
        services::fetch_player_summary(state.repository.as_ref(), player_id).await?
    };

    Ok(Json(summary))
}

// =============================================================================
// Visualization Endpoints
// =============================================================================

/// GET /v1/players/{player_id}/shot-chart
///
/// Shot locations projected onto the court diagram.
pub async fn get_shot_chart(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Query(query): Query<ShotChartQuery>,
) -> HandlerResult<ShotChartData> {
    let player_id = PlayerId::new(player_id);
    let scale = match query.pixels_per_foot {
        Some(ppf) => CourtScale::new(ppf)?,
        None => state.scale,
    };

    let data = services::get_shot_chart(state.repository.as_ref(), player_id, &scale).await?;

    Ok(Json(data))
}

/// GET /v1/players/{player_id}/validation-report
pub async fn get_validation_report(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> HandlerResult<ValidationReport> {
    let player_id = PlayerId::new(player_id);

    let summary = services::fetch_player_summary(state.repository.as_ref(), player_id).await?;

    Ok(Json(services::validate_summary(&summary)))
}
