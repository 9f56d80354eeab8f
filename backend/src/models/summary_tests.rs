use super::*;

const SAMPLE: &str = r#"{
    "name": "Jane Hooper",
    "games": [
        {
            "date": "2023-01-05",
            "isStarter": true,
            "minutes": 31.5,
            "points": 22,
            "assists": 4,
            "offensiveRebounds": 1,
            "defensiveRebounds": 6,
            "steals": 2,
            "blocks": 0,
            "turnovers": 3,
            "defensiveFouls": 2,
            "offensiveFouls": 1,
            "freeThrowsMade": 4,
            "freeThrowsAttempted": 5,
            "twoPointersMade": 6,
            "twoPointersAttempted": 10,
            "threePointersMade": 2,
            "threePointersAttempted": 7,
            "shots": [
                { "isMake": true, "locationX": 5.0, "locationY": -3.0 },
                { "isMake": false, "locationX": -22.1, "locationY": 1.5 }
            ]
        }
    ]
}"#;

#[test]
fn test_deserialize_wire_format() {
    let summary: PlayerSummary = serde_json::from_str(SAMPLE).unwrap();

    assert_eq!(summary.name, "Jane Hooper");
    assert_eq!(summary.games.len(), 1);

    let game = &summary.games[0];
    assert!(game.is_starter);
    assert_eq!(game.minutes.value(), 31.5);
    assert_eq!(game.points, 22);
    assert_eq!(game.free_throws(), ShootingSplit::new(4, 5));
    assert_eq!(game.two_pointers(), ShootingSplit::new(6, 10));
    assert_eq!(game.three_pointers(), ShootingSplit::new(2, 7));
    assert_eq!(game.shots.len(), 2);
    assert_eq!(game.shots[0], Shot::new(true, 5.0, -3.0));
    assert_eq!(game.shots[1].location_x.value(), -22.1);
}

#[test]
fn test_serialize_uses_camel_case_keys() {
    let mut game = Game::on("2023-02-01");
    game.free_throws_made = 1;
    game.shots.push(Shot::new(true, 1.0, 2.0));

    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["freeThrowsMade"], 1);
    assert_eq!(json["isStarter"], false);
    assert_eq!(json["shots"][0]["isMake"], true);
    assert_eq!(json["shots"][0]["locationY"], 2.0);
    assert!(json.get("free_throws_made").is_none());
}

#[test]
fn test_made_above_attempted_is_still_constructible() {
    let game = Game {
        free_throws_made: 3,
        free_throws_attempted: 2,
        ..Game::on("2023-01-01")
    };

    assert!(!game.free_throws().is_consistent());
    assert!(game.two_pointers().is_consistent());
}

#[test]
fn test_missing_fields_fall_back_to_zero() {
    let game: Game = serde_json::from_str(r#"{ "date": "2023-03-03", "points": 9 }"#).unwrap();

    assert_eq!(game.points, 9);
    assert_eq!(game.assists, 0);
    assert_eq!(game.minutes.value(), 0.0);
    assert!(game.shots.is_empty());
}

#[test]
fn test_summary_without_games_field() {
    let summary: PlayerSummary = serde_json::from_str(r#"{ "name": "Rookie" }"#).unwrap();
    assert!(summary.is_empty());
    assert_eq!(summary.shots().count(), 0);
}

#[test]
fn test_negative_counter_is_rejected_by_type() {
    let result: Result<Game, _> = serde_json::from_str(r#"{ "date": "2023-03-03", "steals": -1 }"#);
    assert!(result.is_err());
}

#[test]
fn test_calendar_date_parsing() {
    assert_eq!(
        Game::on("2022-12-19").calendar_date(),
        NaiveDate::from_ymd_opt(2022, 12, 19)
    );
    assert!(Game::on("19/12/2022").calendar_date().is_none());
    assert!(Game::on("").calendar_date().is_none());
}

#[test]
fn test_shots_iterates_across_games() {
    let mut first = Game::on("2023-01-01");
    first.shots.push(Shot::new(true, 0.0, 1.0));
    let mut second = Game::on("2023-01-02");
    second.shots.push(Shot::new(false, 3.0, 4.0));
    second.shots.push(Shot::new(true, 5.0, 6.0));

    let summary = PlayerSummary::new("Two Games", vec![first, second]);
    let xs: Vec<f64> = summary.shots().map(|s| s.location_x.value()).collect();
    assert_eq!(xs, vec![0.0, 3.0, 5.0]);
}

#[test]
fn test_shot_finite_location() {
    assert!(Shot::new(true, 1.0, 1.0).has_finite_location());
    assert!(!Shot::new(true, f64::NAN, 1.0).has_finite_location());
    assert!(!Shot::new(true, 1.0, f64::INFINITY).has_finite_location());
}
