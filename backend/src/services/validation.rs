//! Summary validation.
//!
//! Error-level findings (a summary carrying any of them is malformed):
//! - made > attempted in a shooting split
//! - a date that is not `YYYY-MM-DD`
//! - negative or non-finite minutes
//! - a shot location that is not a finite number
//!
//! Warning-level findings:
//! - a shot outside the playing surface
//! - two games on the same date
//! - games not in chronological order
//!
//! Shots are not reconciled with the shooting counters.

use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

use crate::api::{
    Game, IssueCategory, PlayerSummary, Severity, Shot, ValidationIssue, ValidationReport,
};
use crate::models::GAME_DATE_FORMAT;

/// Half the court width, in feet from the basket.
pub const COURT_HALF_WIDTH_FT: f64 = 25.0;
/// Distance from the basket back to the baseline.
pub const BASELINE_OFFSET_FT: f64 = 5.25;
/// Distance from the basket to the far baseline.
pub const FAR_BASELINE_FT: f64 = 94.0 - BASELINE_OFFSET_FT;

/// Validate every game of a summary.
pub fn validate_summary(summary: &PlayerSummary) -> ValidationReport {
    let mut issues = Vec::new();
    let mut seen_dates: HashMap<&str, usize> = HashMap::new();
    let mut previous: Option<NaiveDate> = None;

    for (index, game) in summary.games.iter().enumerate() {
        check_splits(index, game, &mut issues);
        check_minutes(index, game, &mut issues);
        check_shots(index, game, &mut issues);

        match game.calendar_date() {
            Some(date) => {
                if let Some(prev) = previous {
                    if date < prev {
                        issues.push(
                            issue(index, game, "out_of_order", IssueCategory::GameOrder)
                                .warning()
                                .field("date")
                                .values(&game.date, format!("on or after {prev}"))
                                .describe("game is dated before the game preceding it"),
                        );
                    }
                }
                previous = Some(date);
            }
            None => issues.push(
                issue(index, game, "invalid_date", IssueCategory::Date)
                    .error()
                    .field("date")
                    .values(&game.date, GAME_DATE_FORMAT)
                    .describe("game date is not a calendar date"),
            ),
        }

        match seen_dates.get(game.date.as_str()) {
            Some(&first) => issues.push(
                issue(index, game, "duplicate_date", IssueCategory::Date)
                    .warning()
                    .field("date")
                    .values(&game.date, "unique date")
                    .describe(format!("same date as game #{first}")),
            ),
            None => {
                seen_dates.insert(game.date.as_str(), index);
            }
        }
    }

    let invalid: std::collections::HashSet<usize> = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .filter_map(|i| i.game_index)
        .collect();

    let (errors, warnings): (Vec<_>, Vec<_>) = issues
        .into_iter()
        .partition(|i| i.severity == Severity::Error);

    debug!(
        "Validated {} game(s) for {}: {} error(s), {} warning(s)",
        summary.games.len(),
        summary.name,
        errors.len(),
        warnings.len()
    );

    ValidationReport {
        player_name: summary.name.clone(),
        total_games: summary.games.len(),
        valid_games: summary.games.len() - invalid.len(),
        errors,
        warnings,
    }
}

fn check_splits(index: usize, game: &Game, issues: &mut Vec<ValidationIssue>) {
    for (label, split) in game.splits() {
        if !split.is_consistent() {
            issues.push(
                issue(index, game, "made_exceeds_attempted", IssueCategory::ShootingSplit)
                    .error()
                    .field(label)
                    .values(
                        format!("{}/{}", split.made, split.attempted),
                        "made <= attempted",
                    )
                    .describe(format!("{label}: more made than attempted")),
            );
        }
    }
}

fn check_minutes(index: usize, game: &Game, issues: &mut Vec<ValidationIssue>) {
    let minutes = game.minutes.value();
    if !minutes.is_finite() || minutes < 0.0 {
        issues.push(
            issue(index, game, "invalid_minutes", IssueCategory::Minutes)
                .error()
                .field("minutes")
                .values(minutes.to_string(), ">= 0")
                .describe("minutes played must be a non-negative number"),
        );
    }
}

fn check_shots(index: usize, game: &Game, issues: &mut Vec<ValidationIssue>) {
    for (n, shot) in game.shots.iter().enumerate() {
        let field = format!("shots[{n}]");
        let position = format!(
            "({}, {})",
            shot.location_x.value(),
            shot.location_y.value()
        );

        if !shot.has_finite_location() {
            issues.push(
                issue(index, game, "non_finite_location", IssueCategory::ShotLocation)
                    .error()
                    .field(field)
                    .values(position, "finite coordinates")
                    .describe("shot location is not a finite number"),
            );
        } else if !on_court(shot) {
            issues.push(
                issue(index, game, "outside_court", IssueCategory::ShotLocation)
                    .warning()
                    .field(field)
                    .values(
                        position,
                        format!(
                            "|x| <= {COURT_HALF_WIDTH_FT}, -{BASELINE_OFFSET_FT} <= y <= {FAR_BASELINE_FT}"
                        ),
                    )
                    .describe("shot location is outside the court"),
            );
        }
    }
}

fn on_court(shot: &Shot) -> bool {
    let x = shot.location_x.value();
    let y = shot.location_y.value();
    x.abs() <= COURT_HALF_WIDTH_FT && (-BASELINE_OFFSET_FT..=FAR_BASELINE_FT).contains(&y)
}

fn issue(index: usize, game: &Game, issue_type: &str, category: IssueCategory) -> ValidationIssue {
    ValidationIssue {
        game_index: Some(index),
        game_date: Some(game.date.clone()),
        issue_type: issue_type.to_string(),
        category,
        severity: Severity::Warning,
        field_name: None,
        current_value: None,
        expected_value: None,
        description: String::new(),
    }
}

trait IssueBuilder {
    fn error(self) -> Self;
    fn warning(self) -> Self;
    fn field(self, name: impl Into<String>) -> Self;
    fn values(self, current: impl Into<String>, expected: impl Into<String>) -> Self;
    fn describe(self, description: impl Into<String>) -> Self;
}

impl IssueBuilder for ValidationIssue {
    fn error(mut self) -> Self {
        self.severity = Severity::Error;
        self
    }

    fn warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }

    fn field(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    fn values(mut self, current: impl Into<String>, expected: impl Into<String>) -> Self {
        self.current_value = Some(current.into());
        self.expected_value = Some(expected.into());
        self
    }

    fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
