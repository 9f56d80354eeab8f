pub mod players;
pub mod shot_chart;
pub mod validation;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        assert_eq!(super::players::LIST_PLAYERS, "list_players");
        assert_eq!(super::players::GET_PLAYER_SUMMARY, "get_player_summary");
        assert_eq!(super::shot_chart::GET_SHOT_CHART, "get_shot_chart");
        assert_eq!(
            super::validation::GET_VALIDATION_REPORT,
            "get_validation_report"
        );
    }
}
