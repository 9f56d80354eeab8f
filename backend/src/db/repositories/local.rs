//! In-memory local repository implementation.
//!
//! Stores every record in `BTreeMap`s behind a single lock. Suitable for local
//! development, for serving a dataset imported at startup, and for tests that
//! need isolation and deterministic ordering.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::PlayerInfo;
use crate::db::models::{GameRecord, PlayerRecord, PlayerStatLine, TeamRecord};
use crate::db::repository::*;
use crate::models::{Game, GameId, PlayerId, PlayerSummary, TeamId, GAME_DATE_FORMAT};

/// In-memory local repository.
///
/// Cloning is cheap and clones share the same data.
///
/// # Example
/// ```
/// use player_summary::db::repositories::LocalRepository;
/// use player_summary::db::models::PlayerRecord;
/// use player_summary::db::repository::{RosterRepository, SummaryRepository};
/// use player_summary::models::PlayerId;
///
/// # tokio_test_block_on(async {
/// let repo = LocalRepository::new();
/// repo.store_player(PlayerRecord { id: PlayerId::new(1), name: "Ada".into() }).await.unwrap();
///
/// let summary = repo.get_player_summary(PlayerId::new(1)).await.unwrap();
/// assert_eq!(summary.name, "Ada");
/// assert!(summary.games.is_empty());
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    teams: BTreeMap<TeamId, TeamRecord>,
    players: BTreeMap<PlayerId, PlayerRecord>,
    games: BTreeMap<GameId, GameRecord>,
    /// Stat lines keyed by (player, game); insertion order is irrelevant
    /// because summaries are re-sorted by date.
    stat_lines: BTreeMap<(PlayerId, GameId), PlayerStatLine>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            teams: BTreeMap::new(),
            players: BTreeMap::new(),
            games: BTreeMap::new(),
            stat_lines: BTreeMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing provider failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    pub fn player_count(&self) -> usize {
        self.data.read().players.len()
    }

    pub fn game_count(&self) -> usize {
        self.data.read().games.len()
    }

    pub fn stat_line_count(&self) -> usize {
        self.data.read().stat_lines.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Provider is not healthy").with_operation(operation));
        }
        Ok(())
    }

    fn duplicate(operation: &str, entity: &str, id: impl ToString) -> RepositoryError {
        let id = id.to_string();
        RepositoryError::rejected(
            format!("{} {} already exists", entity, id),
            ErrorContext::new(operation)
                .with_entity(entity)
                .with_entity_id(id),
        )
    }

    fn dangling(operation: &str, entity: &str, id: impl ToString) -> RepositoryError {
        let id = id.to_string();
        RepositoryError::rejected(
            format!("unknown {} {}", entity, id),
            ErrorContext::new(operation)
                .with_entity(entity)
                .with_entity_id(id),
        )
    }

    fn undated(game: &GameRecord) -> RepositoryError {
        RepositoryError::rejected(
            format!("game {} has date {:?}, expected YYYY-MM-DD", game.id, game.date),
            ErrorContext::new("store_game")
                .with_entity("game")
                .with_entity_id(game.id),
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummaryRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn get_player_summary(&self, player_id: PlayerId) -> RepositoryResult<PlayerSummary> {
        self.check_health("get_player_summary")?;
        let data = self.data.read();

        let player = data.players.get(&player_id).ok_or_else(|| {
            RepositoryError::not_found(
                format!("Player {} not found", player_id),
                ErrorContext::new("get_player_summary")
                    .with_entity("player")
                    .with_entity_id(player_id),
            )
        })?;

        let mut games: Vec<Game> = data
            .stat_lines
            .range((player_id, GameId::new(i64::MIN))..=(player_id, GameId::new(i64::MAX)))
            .filter_map(|(_, stat)| {
                let record = data.games.get(&stat.game_id)?;
                let mut game = stat.line.clone();
                game.date = record.date.clone();
                Some(game)
            })
            .collect();

        // Stable, so same-day games keep game-id order.
        games.sort_by(|a, b| {
            a.calendar_date()
                .cmp(&b.calendar_date())
                .then_with(|| a.date.cmp(&b.date))
        });

        Ok(PlayerSummary::new(player.name.clone(), games))
    }

    async fn list_players(&self) -> RepositoryResult<Vec<PlayerInfo>> {
        self.check_health("list_players")?;
        let data = self.data.read();
        Ok(data
            .players
            .values()
            .map(|p| PlayerInfo {
                player_id: p.id,
                name: p.name.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl RosterRepository for LocalRepository {
    async fn store_team(&self, team: TeamRecord) -> RepositoryResult<()> {
        self.check_health("store_team")?;
        let mut data = self.data.write();
        if data.teams.contains_key(&team.id) {
            return Err(Self::duplicate("store_team", "team", team.id));
        }
        data.teams.insert(team.id, team);
        Ok(())
    }

    async fn store_player(&self, player: PlayerRecord) -> RepositoryResult<()> {
        self.check_health("store_player")?;
        let mut data = self.data.write();
        if data.players.contains_key(&player.id) {
            return Err(Self::duplicate("store_player", "player", player.id));
        }
        data.players.insert(player.id, player);
        Ok(())
    }

    async fn store_game(&self, game: GameRecord) -> RepositoryResult<()> {
        self.check_health("store_game")?;
        if NaiveDate::parse_from_str(&game.date, GAME_DATE_FORMAT).is_err() {
            return Err(Self::undated(&game));
        }
        let mut data = self.data.write();
        if data.games.contains_key(&game.id) {
            return Err(Self::duplicate("store_game", "game", game.id));
        }
        for team_id in [game.home_team, game.away_team] {
            if !data.teams.contains_key(&team_id) {
                return Err(Self::dangling("store_game", "team", team_id));
            }
        }
        data.games.insert(game.id, game);
        Ok(())
    }

    async fn store_player_stat(&self, stat: PlayerStatLine) -> RepositoryResult<()> {
        self.check_health("store_player_stat")?;
        let mut data = self.data.write();
        if !data.players.contains_key(&stat.player_id) {
            return Err(Self::dangling("store_player_stat", "player", stat.player_id));
        }
        if !data.games.contains_key(&stat.game_id) {
            return Err(Self::dangling("store_player_stat", "game", stat.game_id));
        }
        if !data.teams.contains_key(&stat.team_id) {
            return Err(Self::dangling("store_player_stat", "team", stat.team_id));
        }
        let key = (stat.player_id, stat.game_id);
        if data.stat_lines.contains_key(&key) {
            return Err(Self::duplicate(
                "store_player_stat",
                "stat line",
                format!("{}/{}", stat.player_id, stat.game_id),
            ));
        }
        data.stat_lines.insert(key, stat);
        Ok(())
    }
}
