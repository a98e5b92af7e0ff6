//! Tests for the caller-side random opponent policy.

use noughts_engine::{
    GameConfig, GameEngine, GameStatus, MoveError, MoveOutcome, Player, PlayerId, RandomOpponent,
};

fn new_game() -> GameEngine {
    GameEngine::new(
        Player::new("Human", 'X', "Crosses"),
        Player::new("Computer", 'O', "Noughts"),
        GameConfig::default(),
    )
    .expect("valid default config")
}

#[test]
fn test_random_game_terminates() {
    // Two random opponents always fill the board within nine turns.
    let mut game = new_game();
    let mut opponent = RandomOpponent::new();

    let mut turns = 0;
    while !game.status().is_terminal() {
        opponent.play(&mut game).expect("legal move available");
        turns += 1;
        assert!(turns <= 9, "game did not terminate");
    }

    match game.status() {
        GameStatus::Won(winner) => assert_eq!(game.winner(), Some(winner)),
        GameStatus::Tied => assert_eq!(game.winner(), None),
        GameStatus::AwaitingMove => unreachable!(),
    }
    assert_eq!(game.turns_taken() as usize, game.history().len());
}

#[test]
fn test_opponent_moves_are_always_accepted() {
    // A random policy drawing from unoccupied cells never collides.
    for seed in 0..20 {
        let mut game = new_game();
        let mut opponent = RandomOpponent::with_seed(seed);
        while !game.status().is_terminal() {
            let outcome = opponent.play(&mut game).expect("legal move available");
            if game.status().is_terminal() {
                assert!(!matches!(outcome, MoveOutcome::Continue { .. }));
            }
        }
    }
}

#[test]
fn test_play_after_game_over() {
    let mut game = new_game();
    // A wins the main diagonal.
    game.attempt_move(0, 0).unwrap();
    game.attempt_move(0, 1).unwrap();
    game.attempt_move(1, 1).unwrap();
    game.attempt_move(0, 2).unwrap();
    game.attempt_move(2, 2).unwrap();
    assert_eq!(game.status(), GameStatus::Won(PlayerId::One));

    let mut opponent = RandomOpponent::new();
    assert_eq!(opponent.play(&mut game), Err(MoveError::GameOver));
}

#[test]
fn test_mixed_human_and_random_game() {
    // Human plays the center, the computer answers, turn returns.
    let mut game = new_game();
    let mut opponent = RandomOpponent::with_seed(7);

    game.attempt_move(1, 1).unwrap();
    assert_eq!(game.current_player(), PlayerId::Two);

    match opponent.play(&mut game).expect("legal move available") {
        MoveOutcome::Continue { next } => assert_eq!(next, PlayerId::One),
        outcome => panic!("unexpected outcome: {outcome:?}"),
    }
    assert_eq!(game.turns_taken(), 2);
}
