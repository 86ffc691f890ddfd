//! Game tests - full turns: slide, spawn and status

use std::convert::Infallible;

use tui_2048::core::{Board, Game, GameConfig, NoRender, Spawner};
use tui_2048::types::{Direction, GameStatus};

fn game_from(rows: &[[u32; 4]], four_chance: f64) -> Game {
    let cfg = GameConfig {
        four_chance,
        ..GameConfig::default()
    };
    let board = Board::from_rows(&cfg, rows).unwrap();
    Game::from_board(cfg, board, Spawner::seeded(17, four_chance)).unwrap()
}

#[test]
fn test_new_game_starts_with_two_tiles() {
    let mut game = Game::new(GameConfig::default(), 1).unwrap();
    assert!(!game.started());
    game.start();
    assert!(game.started());
    assert_eq!(game.board().occupied_count(), 2);
    assert_eq!(game.status(), GameStatus::Continue);
}

#[test]
fn test_no_op_move_does_not_spawn() {
    let mut game = game_from(&[[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]], 0.1);
    let outcome = game.resolve_move(Direction::Left, &mut NoRender).unwrap();
    assert!(!outcome.changed);
    assert!(!outcome.spawned);
    assert_eq!(outcome.status, GameStatus::Continue);
    assert_eq!(game.board().occupied_count(), 4);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_effective_move_spawns_one_tile() {
    let mut game = game_from(&[[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]], 0.1);
    let outcome = game.resolve_move(Direction::Left, &mut NoRender).unwrap();
    assert!(outcome.changed);
    assert!(outcome.spawned);
    assert_eq!(outcome.frames, 30);
    assert_eq!(game.board().occupied_count(), 2);
    assert_eq!(game.moves(), 1);
}

#[test]
fn test_hook_frames_match_outcome() {
    let mut game = game_from(&[[2, 2, 0, 0], [0, 0, 0, 4], [0; 4], [0; 4]], 0.1);
    let mut frames = 0u32;
    let mut hook = |_: &Board| -> Result<(), Infallible> {
        frames += 1;
        Ok(())
    };
    let outcome = game.resolve_move(Direction::Right, &mut hook).unwrap();
    assert_eq!(frames, outcome.frames);
    assert_eq!(outcome.merges, 1);
}

#[test]
fn test_move_that_fills_a_stuck_board_loses() {
    let mut game = game_from(
        &[[4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2], [4, 2, 4, 0]],
        0.0,
    );
    assert_eq!(game.status(), GameStatus::Continue);

    let outcome = game.resolve_move(Direction::Right, &mut NoRender).unwrap();
    assert!(outcome.changed);
    assert!(outcome.spawned);
    assert_eq!(outcome.status, GameStatus::Lost);
    assert!(game.board().is_stuck());
    assert!(game.snapshot().lost);
}

#[test]
fn test_moves_ignored_once_lost() {
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let mut game = game_from(&rows, 0.1);
    assert_eq!(game.status(), GameStatus::Lost);

    let before = game.board().to_rows();
    for dir in Direction::ALL {
        let outcome = game.resolve_move(dir, &mut NoRender).unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
        assert!(!outcome.changed);
    }
    assert_eq!(game.board().to_rows(), before);
}

#[test]
fn test_full_board_with_merge_continues() {
    let mut game = game_from(
        &[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 8], [4, 2, 4, 4]],
        0.1,
    );
    // Up cannot move anything but the board is not stuck.
    let outcome = game.resolve_move(Direction::Up, &mut NoRender).unwrap();
    assert!(!outcome.changed);
    assert_eq!(outcome.status, GameStatus::Continue);

    let outcome = game.resolve_move(Direction::Left, &mut NoRender).unwrap();
    assert!(outcome.changed);
    assert_eq!(outcome.merges, 1);
}

#[test]
fn test_restart_after_loss() {
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let mut game = game_from(&rows, 0.1);
    game.restart();
    assert_eq!(game.status(), GameStatus::Continue);
    assert_eq!(game.board().occupied_count(), 2);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let play = || {
        let mut game = Game::new(GameConfig::default(), 404).unwrap();
        game.start();
        for dir in [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Up,
        ] {
            game.resolve_move(dir, &mut NoRender).unwrap();
        }
        game.board().to_rows()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_win_value_is_reported() {
    let cfg = GameConfig {
        win_value: 16,
        ..GameConfig::default()
    };
    let board = Board::from_rows(&cfg, &[[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut game = Game::from_board(cfg, board, Spawner::seeded(3, 0.1)).unwrap();
    assert!(!game.has_won());
    game.resolve_move(Direction::Left, &mut NoRender).unwrap();
    assert!(game.has_won());
    // Winning does not end the game.
    assert_eq!(game.status(), GameStatus::Continue);
}
