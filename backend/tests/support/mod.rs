#![allow(dead_code)]

use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Variables are restored on unwind, and access to the process environment is
/// serialized across tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// =============================================================================
// Dataset fixtures
// =============================================================================

pub const TEAMS_JSON: &str = r#"[
    {"id": 1, "name": "Harbor Hawks"},
    {"id": 2, "name": "Valley Owls"}
]"#;

pub const PLAYERS_JSON: &str = r#"[
    {"id": 7, "name": "Rae Dunmore"},
    {"id": 8, "name": "Ike Ballard"},
    {"id": 9, "name": "Lou Park"}
]"#;

/// Two games, listed newest first. Player 7 plays both, player 8 has an
/// impossible free-throw line, player 9 never plays.
pub const GAMES_JSON: &str = r#"[
    {
        "id": 2, "date": "2023-02-10",
        "homeTeam": {
            "id": 2,
            "players": [
                {
                    "id": 8, "isStarter": false, "minutes": 9, "points": 2,
                    "freeThrowsMade": 3, "freeThrowsAttempted": 2,
                    "shots": []
                }
            ]
        },
        "awayTeam": {
            "id": 1,
            "players": [
                {
                    "id": 7, "isStarter": true, "minutes": 35.5, "points": 21,
                    "assists": 6, "offensiveRebounds": 1, "defensiveRebounds": 7,
                    "twoPointersMade": 6, "twoPointersAttempted": 11,
                    "threePointersMade": 3, "threePointersAttempted": 7,
                    "shots": [
                        {"isMake": true, "locationX": 5, "locationY": -3},
                        {"isMake": false, "locationX": -22.5, "locationY": 3.5},
                        {"isMake": true, "locationX": 0.0, "locationY": 24.0}
                    ]
                }
            ]
        }
    },
    {
        "id": 1, "date": "2023-01-05",
        "homeTeam": {
            "id": 1,
            "players": [
                {
                    "id": 7, "isStarter": true, "minutes": 30, "points": 14,
                    "freeThrowsMade": 4, "freeThrowsAttempted": 4,
                    "twoPointersMade": 5, "twoPointersAttempted": 9,
                    "shots": [{"isMake": true, "locationX": 1.5, "locationY": 2.0}]
                }
            ]
        },
        "awayTeam": {"id": 2, "players": []}
    }
]"#;

pub fn write_dataset(dir: &Path) {
    std::fs::write(dir.join("teams.json"), TEAMS_JSON).unwrap();
    std::fs::write(dir.join("players.json"), PLAYERS_JSON).unwrap();
    std::fs::write(dir.join("games.json"), GAMES_JSON).unwrap();
}
