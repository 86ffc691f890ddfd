use std::convert::Infallible;

use tui_2048::core::{settle, Board, BoardSnapshot, GameConfig};
use tui_2048::term::palette::{self, BACKGROUND, OUTLINE};
use tui_2048::term::{GameView, Viewport};
use tui_2048::types::Direction;

fn snapshot(rows: &[[u32; 4]]) -> BoardSnapshot {
    let board = Board::from_rows(&GameConfig::default(), rows).unwrap();
    BoardSnapshot::from(&board)
}

#[test]
fn term_renders_board_colours() {
    let view = GameView::default();
    let snap = snapshot(&[[0, 0, 0, 0], [0, 64, 0, 0], [0; 4], [0; 4]]);
    let fb = view.render(&snap, Viewport::new(80, 24));

    // Frame corner and gutter.
    assert_eq!(fb.get(23, 3).unwrap().style.bg, OUTLINE);
    assert_eq!(fb.get(31, 5).unwrap().style.bg, OUTLINE);
    // Empty slot.
    assert_eq!(fb.get(24, 4).unwrap().style.bg, BACKGROUND);
    // The 64 tile in slot (1, 1) at (32, 8).
    let cell = fb.get(32, 8).unwrap();
    assert_eq!(cell.style.bg, palette::tile_color(64));
    assert!(fb.row_text(9).contains("64"));
}

#[test]
fn term_renders_side_panel() {
    let view = GameView::default();
    let mut snap = snapshot(&[[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 128]]);
    snap.moves = 37;
    let fb = view.render(&snap, Viewport::new(80, 24));

    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text[5].contains("BEST"));
    assert!(text[6].contains("128"));
    assert!(text[8].contains("MOVES"));
    assert!(text[9].contains("37"));
    assert!(!text.iter().any(|row| row.contains("YOU WIN")));
}

#[test]
fn term_renders_win_banner() {
    let view = GameView::default();
    let mut snap = snapshot(&[[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    snap.won = true;
    let fb = view.render(&snap, Viewport::new(80, 24));
    assert!(fb.row_text(11).contains("YOU WIN!"));
}

#[test]
fn term_renders_game_over_overlay() {
    let view = GameView::default();
    let mut snap = snapshot(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    snap.lost = true;
    let fb = view.render(&snap, Viewport::new(80, 24));

    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text[11].contains("GAME OVER"));
    assert!(text[13].contains("r: restart"));
}

#[test]
fn term_renders_tile_mid_slide() {
    let cfg = GameConfig::default();
    let mut board = Board::from_rows(&cfg, &[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();

    let mut frames = Vec::new();
    let mut hook = |b: &Board| -> Result<(), Infallible> {
        frames.push(BoardSnapshot::from(b));
        Ok(())
    };
    settle(&mut board, &cfg, Direction::Right, &mut hook).unwrap();
    assert_eq!(frames.len(), 30);

    // Five frames in: halfway into the first gap.
    let mid = &frames[4];
    assert_eq!(mid.tiles[0].x, 100);

    let view = GameView::default();
    let fb = view.render(mid, Viewport::new(80, 24));
    assert_eq!(fb.get(28, 4).unwrap().style.bg, palette::tile_color(2));
    assert_eq!(fb.get(27, 4).unwrap().style.bg, BACKGROUND);
}

#[test]
fn term_render_into_reuses_framebuffer() {
    let view = GameView::default();
    let snap = snapshot(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut fb = tui_2048::term::FrameBuffer::new(10, 10);
    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    assert_eq!(fb, view.render(&snap, Viewport::new(80, 24)));
}
