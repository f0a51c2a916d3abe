use fleetbot::{Game, GameError, Phase, ShotResult, TurnRule, BOARD_SIZE, FLEET_SIZE};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_new_game_starts_placing_with_first_player() {
    let game = Game::new(1, 2);
    assert_eq!(game.players(), (1, 2));
    assert_eq!(game.turn(), 1);
    assert_eq!(game.phase(), Phase::Placing);
    assert_eq!(game.placed_count(1), 0);
    assert!(game.contains(1) && game.contains(2));
    assert!(!game.contains(3));
    assert_eq!(game.opponent_of(1), Some(2));
    assert_eq!(game.opponent_of(2), Some(1));
    assert_eq!(game.opponent_of(3), None);
}

#[test]
fn test_shots_rejected_until_both_fleets_placed() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Game::new(1, 2);
    assert_eq!(game.fire(2, (0, 0)), Err(GameError::NotInBattle));

    game.auto_place_fleet_for(1, &mut rng).unwrap();
    assert_eq!(game.phase(), Phase::Placing);
    assert_eq!(game.fire(1, (0, 0)), Err(GameError::NotInBattle));

    game.auto_place_fleet_for(2, &mut rng).unwrap();
    assert_eq!(game.phase(), Phase::Battle);
    assert!(game.fire(2, (0, 0)).is_ok());
}

#[test]
fn test_auto_place_fills_fleet_and_counts() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut game = Game::new(10, 20);
    game.auto_place_fleet_for(10, &mut rng).unwrap();
    assert_eq!(game.placed_count(10), FLEET_SIZE);
    assert_eq!(game.board(10).unwrap().ships().len(), FLEET_SIZE);
    assert_eq!(game.placed_count(20), 0);

    assert_eq!(
        game.auto_place_fleet_for(99, &mut rng),
        Err(GameError::UnknownPlayer(99))
    );
}

#[test]
fn test_fire_at_unknown_player() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut game = Game::new(1, 2);
    game.auto_place_fleet_for(1, &mut rng).unwrap();
    game.auto_place_fleet_for(2, &mut rng).unwrap();
    assert_eq!(game.fire(7, (0, 0)), Err(GameError::UnknownPlayer(7)));
}

#[test]
fn test_switch_turn_toggles() {
    let mut game = Game::new(1, 2);
    assert_eq!(game.turn(), 1);
    game.switch_turn();
    assert_eq!(game.turn(), 2);
    game.switch_turn();
    assert_eq!(game.turn(), 1);
    for _ in 0..3 {
        game.switch_turn();
    }
    assert_eq!(game.turn(), 2);
}

#[test]
fn test_always_switch_rule() {
    let mut game = Game::with_rule(1, 2, TurnRule::AlwaysSwitch);
    game.advance_turn(ShotResult::Hit);
    assert_eq!(game.turn(), 2);
    game.advance_turn(ShotResult::Miss);
    assert_eq!(game.turn(), 1);
    game.advance_turn(ShotResult::Sunk);
    assert_eq!(game.turn(), 2);
}

#[test]
fn test_continue_on_hit_rule() {
    let mut game = Game::with_rule(1, 2, TurnRule::ContinueOnHit);
    game.advance_turn(ShotResult::Hit);
    assert_eq!(game.turn(), 1);
    game.advance_turn(ShotResult::Sunk);
    assert_eq!(game.turn(), 1);
    game.advance_turn(ShotResult::Miss);
    assert_eq!(game.turn(), 2);
}

#[test]
fn test_win_detection_and_winner() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut game = Game::new(1, 2);
    game.auto_place_fleet_for(1, &mut rng).unwrap();
    game.auto_place_fleet_for(2, &mut rng).unwrap();
    assert!(!game.is_over());
    assert_eq!(game.winner(), None);

    // player 1 saturates player 2's board
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            game.fire(2, (r, c)).unwrap();
        }
    }
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(1));
}

#[test]
fn test_no_winner_before_battle() {
    let game = Game::new(1, 2);
    // boards are empty and vacuously sunk, but the match has not started
    assert_eq!(game.winner(), None);
}
