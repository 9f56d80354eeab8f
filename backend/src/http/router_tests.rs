use super::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::api::{Game, GameId, PlayerId, Shot, TeamId};
use crate::db::models::{GameRecord, PlayerRecord, PlayerStatLine, TeamRecord};
use crate::db::repositories::LocalRepository;
use crate::db::repository::{FullRepository, RosterRepository};

async fn seeded_repo() -> Arc<LocalRepository> {
    let repo = Arc::new(LocalRepository::new());
    repo.store_team(TeamRecord {
        id: TeamId::new(1),
        name: "Harbor Hawks".to_string(),
    })
    .await
    .unwrap();
    for (id, name) in [(7, "Rae Dunmore"), (8, "Ike Ballard")] {
        repo.store_player(PlayerRecord {
            id: PlayerId::new(id),
            name: name.to_string(),
        })
        .await
        .unwrap();
    }
    repo.store_game(GameRecord {
        id: GameId::new(1),
        date: "2023-01-20".to_string(),
        home_team: TeamId::new(1),
        away_team: TeamId::new(1),
    })
    .await
    .unwrap();

    let good = Game {
        points: 12,
        shots: vec![Shot::new(true, 5.0, -3.0)],
        ..Game::default()
    };
    repo.store_player_stat(PlayerStatLine::new(
        PlayerId::new(7),
        GameId::new(1),
        TeamId::new(1),
        good,
    ))
    .await
    .unwrap();

    let bad = Game {
        free_throws_made: 3,
        free_throws_attempted: 2,
        ..Game::default()
    };
    repo.store_player_stat(PlayerStatLine::new(
        PlayerId::new(8),
        GameId::new(1),
        TeamId::new(1),
        bad,
    ))
    .await
    .unwrap();
    repo
}

async fn app() -> (Arc<LocalRepository>, Router) {
    let repo = seeded_repo().await;
    let state = AppState::new(repo.clone() as Arc<dyn FullRepository>);
    (repo, create_router(state))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let (repo, router) = app().await;
    let (status, body) = get(router.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");

    repo.set_healthy(false);
    let (status, body) = get(router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_list_players() {
    let (_repo, router) = app().await;
    let (status, body) = get(router, "/v1/players").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["players"][0]["player_id"], 7);
    assert_eq!(body["players"][0]["name"], "Rae Dunmore");
}

#[tokio::test]
async fn test_summary_uses_camel_case_wire_format() {
    let (_repo, router) = app().await;
    let (status, body) = get(router, "/v1/players/7/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Rae Dunmore");
    assert_eq!(body["games"][0]["date"], "2023-01-20");
    assert_eq!(body["games"][0]["points"], 12);
    assert_eq!(body["games"][0]["shots"][0]["isMake"], true);
    assert_eq!(body["games"][0]["shots"][0]["locationX"], 5.0);
}

#[tokio::test]
async fn test_unknown_player_is_404() {
    let (_repo, router) = app().await;
    let (status, body) = get(router, "/v1/players/999/summary").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_summary_passes_through_unless_strict() {
    let (_repo, router) = app().await;
    let (status, body) = get(router.clone(), "/v1/players/8/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["games"][0]["freeThrowsMade"], 3);

    let (status, body) = get(router, "/v1/players/8/summary?strict=true").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "MALFORMED_DATA");
    assert_eq!(body["details"][0]["field_name"], "freeThrows");
}

#[tokio::test]
async fn test_shot_chart_scales() {
    let (_repo, router) = app().await;
    let (status, body) = get(router.clone(), "/v1/players/7/shot-chart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pixels_per_foot"], 10.0);
    assert_eq!(body["games"][0]["shots"][0]["pixel"]["x"], 50.0);
    assert_eq!(body["games"][0]["shots"][0]["pixel"]["y"], -30.0);

    let (_, body) = get(router, "/v1/players/7/shot-chart?pixels_per_foot=2").await;
    assert_eq!(body["games"][0]["shots"][0]["pixel"]["x"], 10.0);
}

#[tokio::test]
async fn test_shot_chart_rejects_bad_scale() {
    let (_repo, router) = app().await;
    let (status, body) = get(router.clone(), "/v1/players/7/shot-chart?pixels_per_foot=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, _) = get(router, "/v1/players/7/shot-chart?pixels_per_foot=wide").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validation_report() {
    let (_repo, router) = app().await;
    let (status, body) = get(router.clone(), "/v1/players/8/validation-report").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_games"], 1);
    assert_eq!(body["valid_games"], 0);
    assert_eq!(body["errors"][0]["issue_type"], "made_exceeds_attempted");

    let (_, body) = get(router, "/v1/players/7/validation-report").await;
    assert_eq!(body["errors"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_unhealthy_provider_is_502() {
    let (repo, router) = app().await;
    repo.set_healthy(false);
    let (status, body) = get(router, "/v1/players/7/summary").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "PROVIDER_UNAVAILABLE");
}
