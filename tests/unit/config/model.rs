use super::*;

fn sheet(tokens: &[&str]) -> PlayerSheet {
    PlayerSheet::from_tokens(tokens.iter().copied()).unwrap()
}

#[test]
fn outcome_tokens_parse_case_insensitively() {
    assert_eq!(Outcome::parse_token("C"), Some(Outcome::Correct));
    assert_eq!(Outcome::parse_token("correct"), Some(Outcome::Correct));
    assert_eq!(Outcome::parse_token(" w "), Some(Outcome::Wrong));
    assert_eq!(Outcome::parse_token("Wrong"), Some(Outcome::Wrong));
    assert_eq!(Outcome::parse_token("maybe"), None);
    assert_eq!(Outcome::parse_token(""), None);
}

#[test]
fn from_str_rejects_unknown_tokens() {
    assert!("C".parse::<Outcome>().unwrap().is_correct());
    assert!("X".parse::<Outcome>().is_err());
}

#[test]
fn config_accepts_independent_lengths() {
    let config = RaceConfig {
        players: vec![sheet(&["C", "C", "W", "C", "C"]), sheet(&["C", "W"])],
    };
    config.validate().unwrap();
    assert_eq!(config.max_sequence_len(), 5);
}

#[test]
fn config_rejects_player_count_out_of_range() {
    let config = RaceConfig { players: vec![] };
    assert!(config.validate().is_err());

    let config = RaceConfig {
        players: (0..5).map(|_| sheet(&["C"])).collect(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_empty_and_oversized_sequences() {
    let config = RaceConfig {
        players: vec![PlayerSheet {
            name: None,
            outcomes: vec![],
        }],
    };
    assert!(config.validate().is_err());

    let config = RaceConfig {
        players: vec![PlayerSheet {
            name: None,
            outcomes: vec![Outcome::Correct; MAX_QUESTIONS + 1],
        }],
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_blank_names() {
    let config = RaceConfig {
        players: vec![PlayerSheet {
            name: Some("  ".to_string()),
            outcomes: vec![Outcome::Correct],
        }],
    };
    assert!(config.validate().is_err());
}

#[test]
fn default_identities_apply_per_index() {
    let config = RaceConfig {
        players: vec![
            PlayerSheet {
                name: Some("Alice".to_string()),
                outcomes: vec![Outcome::Correct],
            },
            sheet(&["W"]),
        ],
    };
    assert_eq!(config.player_name(0), "Alice");
    assert_eq!(config.player_name(1), DEFAULT_PLAYER_NAMES[1]);
    assert_eq!(config.player_color(1), DEFAULT_PLAYER_COLORS[1]);
}

#[test]
fn shared_config_requires_uniform_lengths() {
    let config = SharedRaceConfig {
        questions: 2,
        players: vec![sheet(&["C", "W"]), sheet(&["W", "C"])],
    };
    let race = config.into_race_config().unwrap();
    assert_eq!(race.max_sequence_len(), 2);

    let config = SharedRaceConfig {
        questions: 2,
        players: vec![sheet(&["C", "W"]), sheet(&["W"])],
    };
    assert!(config.into_race_config().is_err());
}

#[test]
fn shared_config_bounds_question_count() {
    let config = SharedRaceConfig {
        questions: 0,
        players: vec![],
    };
    assert!(config.validate().is_err());

    let config = SharedRaceConfig {
        questions: MAX_QUESTIONS as u32 + 1,
        players: vec![sheet(&["C"])],
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = RaceConfig {
        players: vec![sheet(&["C", "W", "C"])],
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: RaceConfig = serde_json::from_str(&json).unwrap();
    back.validate().unwrap();
    assert_eq!(back.players[0].outcomes, config.players[0].outcomes);
}
