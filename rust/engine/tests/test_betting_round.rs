mod common;

use common::{calling_table, seat, Scripted};
use holdem_engine::betting::BettingRound;
use holdem_engine::errors::GameError;
use holdem_engine::history::{Move, Street};
use holdem_engine::player::{Player, PlayerAction as A};

#[test]
fn short_call_records_one_allin_for_the_stack() {
    let mut round = BettingRound::new();
    let mut raiser = Player::new("ann", 500);
    let mut short = Player::new("bob", 30);
    round.apply(0, &mut raiser, A::Raise(50)).unwrap();
    let pot_before = round.pot();

    let action = round.apply(1, &mut short, A::Call).unwrap().clone();

    assert_eq!(action.kind, Move::AllIn);
    assert_eq!(action.amount, 30);
    assert_eq!(round.pot(), pot_before + 30);
    assert_eq!(short.stack(), 0);
    assert!(short.is_all_in());
    let bob_actions: Vec<_> = round.history().iter().filter(|a| a.seat == 1).collect();
    assert_eq!(bob_actions.len(), 1);
    assert!(round.history().iter().all(|a| a.kind != Move::Call));
}

#[test]
fn illegal_raise_leaves_state_untouched() {
    let mut round = BettingRound::new();
    let mut a = Player::new("ann", 500);
    let mut b = Player::new("bob", 500);
    round.apply(0, &mut a, A::Raise(50)).unwrap();

    for amount in [10, 50] {
        let err = round.apply(1, &mut b, A::Raise(amount)).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { seat: 1, .. }));
    }
    assert_eq!(round.pot(), 50);
    assert_eq!(b.stack(), 500);
    assert_eq!(round.current_bet(), 50);
    assert_eq!(round.history().len(), 1);
}

#[test]
fn raise_sets_current_bet_and_call_pays_it() {
    let mut round = BettingRound::new();
    let mut a = Player::new("ann", 500);
    let mut b = Player::new("bob", 500);
    round.apply(0, &mut a, A::Raise(80)).unwrap();
    let call = round.apply(1, &mut b, A::Call).unwrap();
    assert_eq!((call.kind, call.amount), (Move::Call, 80));
    assert_eq!(round.pot(), 160);
    assert_eq!(a.stack(), 420);
    assert_eq!(b.stack(), 420);
}

#[test]
fn oversized_raise_degrades_to_allin() {
    let mut round = BettingRound::new();
    let mut a = Player::new("ann", 60);
    let action = round.apply(0, &mut a, A::Raise(100)).unwrap();
    assert_eq!((action.kind, action.amount), (Move::AllIn, 60));
    assert_eq!(round.current_bet(), 60);
    assert!(a.is_all_in());
}

#[test]
fn allin_player_cannot_move_again_except_fold_or_call() {
    let mut round = BettingRound::new();
    let mut a = Player::new("ann", 40);
    round.apply(0, &mut a, A::AllIn).unwrap();

    let err = round.apply(0, &mut a, A::AllIn).unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { .. }));
    assert!(round.apply(0, &mut a, A::Check).is_err());

    let call = round.apply(0, &mut a, A::Call).unwrap();
    assert_eq!((call.kind, call.amount), (Move::Call, 0));
    assert_eq!(round.pot(), 40);
}

#[test]
fn fold_deactivates_without_moving_chips() {
    let mut round = BettingRound::new();
    let mut a = Player::new("ann", 100);
    round.apply(0, &mut a, A::Fold).unwrap();
    assert!(!a.is_active());
    assert_eq!(a.stack(), 100);
    assert_eq!(round.pot(), 0);
    assert_eq!(round.history()[0].kind, Move::Fold);
}

#[test]
fn street_pass_wraps_from_start_seat_and_asks_each_once() {
    let mut seats = calling_table(4, 100);
    let mut round = BettingRound::new();
    round.start_street(Street::Flop);
    round.run_street(&mut seats, 2, &[]).unwrap();

    let order: Vec<usize> = round.history().iter().map(|a| a.seat).collect();
    assert_eq!(order, vec![2, 3, 0, 1]);
    assert!(round.history().iter().all(|a| a.street == Street::Flop));
}

#[test]
fn street_pass_skips_folded_and_allin_players() {
    let mut seats = calling_table(3, 100);
    seats[0].player.fold();
    seats[1].player.commit_all_in();
    let mut round = BettingRound::new();
    round.run_street(&mut seats, 0, &[]).unwrap();
    let order: Vec<usize> = round.history().iter().map(|a| a.seat).collect();
    assert_eq!(order, vec![2]);
}

#[test]
fn street_pass_stops_when_one_player_remains() {
    let mut seats = vec![
        seat("a", 100, Scripted::always("a", A::Fold)),
        seat("b", 100, Scripted::always("b", A::Fold)),
        seat("c", 100, Scripted::always("c", A::Fold)),
    ];
    let mut round = BettingRound::new();
    round.run_street(&mut seats, 0, &[]).unwrap();
    assert_eq!(round.history().len(), 2);
    assert!(seats[2].player.is_active());
}

#[test]
fn snapshot_reflects_pot_bet_and_history() {
    let raiser = Scripted::always("a", A::Raise(40));
    let watcher = Scripted::always("b", A::Call);
    let seen = watcher.seen.clone();
    let mut seats = vec![seat("a", 100, raiser), seat("b", 100, watcher)];
    let mut round = BettingRound::new();
    round.run_street(&mut seats, 0, &[]).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].pot, 40);
    assert_eq!(seen[0].current_bet, 40);
    assert_eq!(seen[0].history_len, 1);
}

#[test]
fn illegal_move_from_strategy_aborts_the_street() {
    let mut seats = vec![
        seat("a", 100, Scripted::always("a", A::Raise(30))),
        seat("b", 100, Scripted::always("b", A::Check)),
        seat("c", 100, Scripted::always("c", A::Call)),
    ];
    let mut round = BettingRound::new();
    let err = round.run_street(&mut seats, 0, &[]).unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { seat: 1, .. }));
    assert_eq!(round.history().len(), 1);
    assert_eq!(round.pot(), 30);
}
