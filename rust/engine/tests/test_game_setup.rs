mod common;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use common::{calling_table, Scripted};
use holdem_engine::errors::GameError;
use holdem_engine::game::{Game, GameConfig, MAX_SEATS};
use holdem_engine::player::{PlayerAction as A, STARTING_STACK};
use holdem_engine::strategy::Strategy;

#[test]
fn default_config_matches_house_rules() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.small_blind, 10);
    assert_eq!(cfg.total_rounds, 20);
    assert_eq!(cfg.starting_stack, STARTING_STACK);
    assert!(cfg.validate().is_ok());
}

#[test]
fn zero_values_are_rejected() {
    for cfg in [
        GameConfig { small_blind: 0, ..GameConfig::default() },
        GameConfig { total_rounds: 0, ..GameConfig::default() },
        GameConfig { starting_stack: 0, ..GameConfig::default() },
    ] {
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
        assert!(Game::new(cfg, calling_table(2, 100)).is_err());
    }
}

#[test]
fn fewer_than_two_players_cannot_start() {
    let err = Game::new(GameConfig::default(), calling_table(1, 100)).unwrap_err();
    assert_eq!(err, GameError::NotEnoughPlayers { found: 1 });
    let err = Game::new(GameConfig::default(), Vec::new()).unwrap_err();
    assert_eq!(err, GameError::NotEnoughPlayers { found: 0 });
}

#[test]
fn table_larger_than_deck_allows_is_rejected() {
    let err = Game::new(GameConfig::default(), calling_table(MAX_SEATS + 1, 100)).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
    assert!(Game::new(GameConfig::default(), calling_table(MAX_SEATS, 100)).is_ok());
}

#[test]
fn chips_beyond_u32_are_rejected() {
    let mut seats = calling_table(2, u32::MAX);
    seats[1] = common::seat("p1", 1, Scripted::always("p1", A::Call));
    let err = Game::new(GameConfig::default(), seats).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));

    let mut seats = calling_table(2, u32::MAX - 1);
    seats[1] = common::seat("p1", 1, Scripted::always("p1", A::Call));
    assert!(Game::new(GameConfig::default(), seats).is_ok());
}

#[test]
fn duplicate_names_are_rejected() {
    let entrants: Vec<(&str, Box<dyn Strategy>)> = vec![
        ("same", Box::new(Scripted::always("x", A::Call)) as Box<dyn Strategy>),
        ("same", Box::new(Scripted::always("y", A::Call)) as Box<dyn Strategy>),
    ];
    let err = Game::with_strategies(GameConfig::default(), entrants).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn with_strategies_uses_configured_stack() {
    let cfg = GameConfig {
        starting_stack: 750,
        ..GameConfig::default()
    };
    let entrants: Vec<(String, Box<dyn Strategy>)> = (0..3)
        .map(|i| {
            let s: Box<dyn Strategy> = Box::new(Scripted::always("c", A::Call));
            (format!("p{i}"), s)
        })
        .collect();
    let game = Game::with_strategies(cfg, entrants).unwrap();
    assert!(game.seats().iter().all(|s| s.player.stack() == 750));
    assert_eq!(game.button_index(), 0);
}

#[test]
fn play_round_steps_one_round_and_moves_button() {
    let mut game = Game::new(GameConfig::default(), calling_table(3, 200)).unwrap();
    let rec = game.play_round().unwrap();
    assert_eq!(rec.round, 1);
    assert_eq!(rec.button, 0);
    assert_eq!(game.button_index(), 1);
    assert_eq!(game.rounds_played(), 1);
}

#[test]
fn stop_flag_ends_the_game_early() {
    let stop = Arc::new(AtomicBool::new(true));
    let mut game = Game::new(GameConfig::default(), calling_table(2, 200))
        .unwrap()
        .with_stop_flag(stop);
    let summary = game.play().unwrap();
    assert_eq!(summary.rounds_played, 0);
    assert_eq!(summary.button, 0);
}

#[test]
fn busted_players_stay_seated() {
    let cfg = GameConfig {
        total_rounds: 6,
        seed: Some(17),
        ..GameConfig::default()
    };
    let mut seats = calling_table(3, 200);
    seats[2] = common::seat("p2", 0, Scripted::always("p2", A::Call));
    let mut game = Game::new(cfg, seats).unwrap();
    let summary = game.play().unwrap();
    assert_eq!(summary.stacks.len(), 3);
    assert!(summary
        .rounds
        .iter()
        .all(|r| r.showdown.len() == 3 || !r.went_to_showdown()));
}
