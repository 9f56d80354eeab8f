use serde::{Deserialize, Serialize};

/// How serious a validation finding is.
///
/// `Error` findings make a summary malformed; `Warning` findings are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Issue category for grouping validation problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    ShootingSplit,
    Date,
    Minutes,
    ShotLocation,
    GameOrder,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::ShootingSplit => "shooting_split",
            IssueCategory::Date => "date",
            IssueCategory::Minutes => "minutes",
            IssueCategory::ShotLocation => "shot_location",
            IssueCategory::GameOrder => "game_order",
        }
    }
}

/// Validation issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Position of the game in the summary, if the issue is game-specific
    pub game_index: Option<usize>,
    pub game_date: Option<String>,
    pub issue_type: String,
    pub category: IssueCategory,
    pub severity: Severity,
    pub field_name: Option<String>,
    pub current_value: Option<String>,
    pub expected_value: Option<String>,
    pub description: String,
}

/// Validation report data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub player_name: String,
    pub total_games: usize,
    /// Games with no error-level issue
    pub valid_games: usize,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when the summary is malformed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validation route function name constant
pub const GET_VALIDATION_REPORT: &str = "get_validation_report";

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> ValidationIssue {
        ValidationIssue {
            game_index: Some(0),
            game_date: Some("2023-01-01".to_string()),
            issue_type: "made_exceeds_attempted".to_string(),
            category: IssueCategory::ShootingSplit,
            severity,
            field_name: Some("freeThrows".to_string()),
            current_value: Some("3/2".to_string()),
            expected_value: Some("made <= attempted".to_string()),
            description: "more free throws made than attempted".to_string(),
        }
    }

    #[test]
    fn test_report_flags() {
        let mut report = ValidationReport {
            player_name: "P".to_string(),
            total_games: 1,
            valid_games: 1,
            errors: vec![],
            warnings: vec![],
        };
        assert!(report.is_clean());
        assert!(!report.has_errors());

        report.warnings.push(issue(Severity::Warning));
        assert!(!report.is_clean());
        assert!(!report.has_errors());

        report.errors.push(issue(Severity::Error));
        assert!(report.has_errors());
    }

    #[test]
    fn test_enum_serialization() {
        let json = serde_json::to_value(issue(Severity::Error)).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["category"], "shooting_split");
        assert_eq!(IssueCategory::ShotLocation.as_str(), "shot_location");
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_VALIDATION_REPORT, "get_validation_report");
    }
}
