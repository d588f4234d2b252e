use holdem_ai::{AI_KINDS, BaselineAI, CallingStation, RandomAI, Scripted, create_ai};
use holdem_engine::cards::parse_cards;
use holdem_engine::game::{Game, GameConfig};
use holdem_engine::player::PlayerAction;
use holdem_engine::strategy::{GameStateSnapshot, Strategy};

fn snapshot(pot: u32, current_bet: u32) -> GameStateSnapshot<'static> {
    GameStateSnapshot {
        pot,
        current_bet,
        community_cards: &[],
        action_history: &[],
    }
}

fn total_chips(game: &Game) -> u32 {
    game.seats().iter().map(|s| s.player.stack()).sum()
}

#[test]
fn factory_knows_every_listed_kind() {
    for kind in AI_KINDS {
        assert!(create_ai(kind, 1).is_some(), "{kind} should be constructible");
    }
    assert_eq!(create_ai("calling", 0).unwrap().name(), "CallingStation");
    assert!(create_ai("gto-solver", 0).is_none());
}

#[test]
fn factory_accepts_only_listed_kinds() {
    for name in ["calling-station", "Baseline", "CALLING", "rand", ""] {
        assert!(create_ai(name, 0).is_none(), "{name} is not in AI_KINDS");
    }
}

#[test]
fn calling_station_always_calls() {
    let mut ai = CallingStation;
    assert_eq!(ai.play_turn(&snapshot(30, 0)), PlayerAction::Call);
    assert_eq!(ai.play_turn(&snapshot(30, 500)), PlayerAction::Call);
}

#[test]
fn baseline_without_cards_checks_or_folds() {
    let mut ai = BaselineAI::new();
    assert_eq!(ai.play_turn(&snapshot(30, 0)), PlayerAction::Check);
    assert_eq!(ai.play_turn(&snapshot(30, 20)), PlayerAction::Fold);
}

#[test]
fn baseline_bets_aces() {
    let cards = parse_cards("Ah As").unwrap();
    let mut ai = BaselineAI::new();
    ai.on_deal([cards[0], cards[1]]);
    match ai.play_turn(&snapshot(30, 0)) {
        PlayerAction::Raise(n) => assert!(n > 0),
        other => panic!("expected a bet with aces, got {other:?}"),
    }
}

#[test]
fn random_ai_replays_with_same_seed() {
    let mut a = RandomAI::new(99);
    let mut b = RandomAI::new(99);
    for bet in [0, 20, 0, 40, 0, 0, 10] {
        let s = snapshot(60, bet);
        assert_eq!(a.play_turn(&s), b.play_turn(&s));
    }
}

#[test]
fn random_ai_never_checks_into_a_bet() {
    let mut ai = RandomAI::new(5);
    for _ in 0..500 {
        let action = ai.play_turn(&snapshot(40, 20));
        assert_ne!(action, PlayerAction::Check);
        if let PlayerAction::Raise(n) = action {
            assert!(n > 20);
        }
    }
}

#[test]
fn scripted_replays_queue_then_calls() {
    let mut ai = Scripted::new("bot", [PlayerAction::Raise(40), PlayerAction::Fold]);
    assert_eq!(ai.remaining(), 2);
    assert_eq!(ai.play_turn(&snapshot(0, 0)), PlayerAction::Raise(40));
    assert_eq!(ai.play_turn(&snapshot(0, 0)), PlayerAction::Fold);
    assert_eq!(ai.play_turn(&snapshot(0, 0)), PlayerAction::Call);
    assert_eq!(ai.name(), "bot");
}

#[test]
fn every_kind_plays_a_full_game_without_losing_chips() {
    for kind in AI_KINDS {
        let config = GameConfig {
            total_rounds: 30,
            seed: Some(2024),
            ..GameConfig::default()
        };
        let entrants = (0..4u64).map(|i| (format!("{kind}{i}"), create_ai(kind, i).unwrap()));
        let mut game = Game::with_strategies(config, entrants).unwrap();
        let summary = game.play().unwrap();
        assert_eq!(summary.rounds_played, 30);
        assert_eq!(total_chips(&game), 4 * 200, "{kind} table leaked chips");
        assert_eq!(summary.button, 30 % 4);
    }
}

#[test]
fn mixed_table_is_reproducible() {
    let run = || {
        let config = GameConfig {
            total_rounds: 10,
            seed: Some(11),
            ..GameConfig::default()
        };
        let entrants: Vec<(&str, Box<dyn Strategy>)> = vec![
            ("base", Box::new(BaselineAI::new()) as Box<dyn Strategy>),
            ("rand", Box::new(RandomAI::new(3)) as Box<dyn Strategy>),
            ("call", Box::new(CallingStation) as Box<dyn Strategy>),
        ];
        let mut game = Game::with_strategies(config, entrants).unwrap();
        game.play().unwrap()
    };
    assert_eq!(run(), run());
}
