//! Raw dataset import.
//!
//! A dataset directory holds three JSON files, imported in this order:
//!
//! - `teams.json`: `[{"id": 1, "name": "…"}]`
//! - `players.json`: `[{"id": 7, "name": "…"}]`
//! - `games.json`: one entry per game with the box score of each side:
//!
//! ```json
//! [{ "id": 1, "date": "2023-01-05",
//!    "homeTeam": { "id": 1, "players": [ { "id": 7, "isStarter": true, "points": 12, …,
//!                                          "shots": [ { "isMake": true, "locationX": 1.5, "locationY": 3.0 } ] } ] },
//!    "awayTeam": { "id": 2, "players": [] } }]
//! ```
//!
//! A record the repository rejects (duplicate id, unknown reference, a game date
//! that is not `YYYY-MM-DD`) is skipped and counted; the rest of the file still
//! loads. If a game itself is rejected, its stat lines are skipped with it. A
//! file whose content was already imported under the same name by this loader
//! is not imported again.

use log::{debug, info, warn};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::checksum::calculate_checksum;
use super::models::{GameRecord, PlayerRecord, PlayerStatLine, TeamRecord};
use super::repository::{RepositoryResult, RosterRepository};
use crate::models::{Game, GameId, PlayerId, TeamId};

pub const TEAMS_FILE: &str = "teams.json";
pub const PLAYERS_FILE: &str = "players.json";
pub const GAMES_FILE: &str = "games.json";

/// Error raised when a dataset file cannot be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {file} at `{path}`: {source}")]
    Json {
        file: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of importing one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub checksum: String,
    /// The same content had already been imported; nothing was written.
    pub unchanged: bool,
    pub inserted: usize,
    pub rejected: usize,
}

/// Outcome of importing a dataset directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub files: Vec<FileReport>,
}

impl LoadReport {
    pub fn inserted(&self) -> usize {
        self.files.iter().map(|f| f.inserted).sum()
    }

    pub fn rejected(&self) -> usize {
        self.files.iter().map(|f| f.rejected).sum()
    }
}

#[derive(Debug, Deserialize)]
struct RawNamed {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGame {
    id: GameId,
    date: String,
    home_team: RawTeamBox,
    away_team: RawTeamBox,
}

#[derive(Debug, Deserialize)]
struct RawTeamBox {
    id: TeamId,
    #[serde(default)]
    players: Vec<RawPlayerLine>,
}

#[derive(Debug, Deserialize)]
struct RawPlayerLine {
    id: PlayerId,
    #[serde(flatten)]
    line: Game,
}

/// Imports dataset files into a roster repository.
pub struct DatasetLoader<R: ?Sized> {
    repository: Arc<R>,
    /// `(file name, checksum)` of every file imported so far
    imported: Mutex<HashSet<(String, String)>>,
}

impl<R> DatasetLoader<R>
where
    R: RosterRepository + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            imported: Mutex::new(HashSet::new()),
        }
    }

    /// Import `teams.json`, `players.json` and `games.json` from `dir`.
    pub async fn load_dir(&self, dir: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        let dir = dir.as_ref();
        info!("Loading dataset from {}", dir.display());

        let teams = read_file(&dir.join(TEAMS_FILE)).await?;
        let players = read_file(&dir.join(PLAYERS_FILE)).await?;
        let games = read_file(&dir.join(GAMES_FILE)).await?;

        let report = LoadReport {
            files: vec![
                self.load_teams(&teams).await?,
                self.load_players(&players).await?,
                self.load_games(&games).await?,
            ],
        };

        info!(
            "Dataset loaded: {} records inserted, {} rejected",
            report.inserted(),
            report.rejected()
        );
        Ok(report)
    }

    pub async fn load_teams(&self, content: &str) -> Result<FileReport, LoadError> {
        let Some(mut report) = self.begin(TEAMS_FILE, content) else {
            return Ok(unchanged(TEAMS_FILE, content));
        };
        let teams: Vec<RawNamed> = parse(TEAMS_FILE, content)?;

        for team in teams {
            let record = TeamRecord {
                id: TeamId::new(team.id),
                name: team.name,
            };
            tally(&mut report, self.repository.store_team(record).await);
        }
        Ok(self.finish(report))
    }

    pub async fn load_players(&self, content: &str) -> Result<FileReport, LoadError> {
        let Some(mut report) = self.begin(PLAYERS_FILE, content) else {
            return Ok(unchanged(PLAYERS_FILE, content));
        };
        let players: Vec<RawNamed> = parse(PLAYERS_FILE, content)?;

        for player in players {
            let record = PlayerRecord {
                id: PlayerId::new(player.id),
                name: player.name,
            };
            tally(&mut report, self.repository.store_player(record).await);
        }
        Ok(self.finish(report))
    }

    pub async fn load_games(&self, content: &str) -> Result<FileReport, LoadError> {
        let Some(mut report) = self.begin(GAMES_FILE, content) else {
            return Ok(unchanged(GAMES_FILE, content));
        };
        let games: Vec<RawGame> = parse(GAMES_FILE, content)?;

        for game in games {
            let record = GameRecord {
                id: game.id,
                date: game.date.clone(),
                home_team: game.home_team.id,
                away_team: game.away_team.id,
            };
            if !tally(&mut report, self.repository.store_game(record).await) {
                continue;
            }

            for side in [game.away_team, game.home_team] {
                for raw in side.players {
                    let mut line = raw.line;
                    line.date = game.date.clone();
                    let stat = PlayerStatLine::new(raw.id, game.id, side.id, line);
                    tally(&mut report, self.repository.store_player_stat(stat).await);
                }
            }
        }
        Ok(self.finish(report))
    }

    /// Returns `None` when this exact content was imported before as `file`.
    fn begin(&self, file: &str, content: &str) -> Option<FileReport> {
        let checksum = calculate_checksum(content);
        if self
            .imported
            .lock()
            .contains(&(file.to_string(), checksum.clone()))
        {
            debug!("{} unchanged (checksum {}), skipping", file, checksum);
            return None;
        }
        Some(FileReport {
            file: file.to_string(),
            checksum,
            ..Default::default()
        })
    }

    fn finish(&self, report: FileReport) -> FileReport {
        self.imported
            .lock()
            .insert((report.file.clone(), report.checksum.clone()));
        info!(
            "{}: {} inserted, {} rejected",
            report.file, report.inserted, report.rejected
        );
        report
    }
}

fn unchanged(file: &str, content: &str) -> FileReport {
    FileReport {
        file: file.to_string(),
        checksum: calculate_checksum(content),
        unchanged: true,
        ..Default::default()
    }
}

/// Count one insert attempt; returns whether it succeeded.
fn tally(report: &mut FileReport, result: RepositoryResult<()>) -> bool {
    match result {
        Ok(()) => {
            report.inserted += 1;
            true
        }
        Err(e) => {
            warn!("{}: skipping record: {}", report.file, e);
            report.rejected += 1;
            false
        }
    }
}

async fn read_file(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn parse<T: DeserializeOwned>(file: &str, content: &str) -> Result<T, LoadError> {
    let deserializer = &mut serde_json::Deserializer::from_str(content);
    serde_path_to_error::deserialize(deserializer).map_err(|e| LoadError::Json {
        file: file.to_string(),
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
