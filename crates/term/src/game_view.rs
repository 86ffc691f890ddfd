//! GameView: maps a `BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn as a block of outline colour with one slot per cell and
//! a one-character gutter between slots, which reads as the grid lines. Tiles
//! are drawn at their continuous positions, so a tile in mid-slide sits
//! between two slots.

use crate::core::{BoardSnapshot, TileSnapshot};
use crate::fb::{decimal_len, CellStyle, FrameBuffer, Rgb};
use crate::palette::{self, BACKGROUND, FONT_DARK, FONT_LIGHT, OUTLINE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen rectangle occupied by the board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Slot width in terminal columns.
    cell_w: u16,
    /// Slot height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

const GUTTER: u16 = 1;
const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 12;

const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps slots roughly square and fits six-digit values.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the board frame lands for a grid of `rows x cols` in `viewport`.
    pub fn board_rect(&self, rows: u8, cols: u8, viewport: Viewport) -> BoardRect {
        let width = cols as u16 * (self.cell_w + GUTTER) + GUTTER;
        let height = rows as u16 * (self.cell_h + GUTTER) + GUTTER;
        let x = viewport.width.saturating_sub(width) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(height) / 2,
            AnchorY::Top => 0,
        };
        BoardRect {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left screen position of the slot at `(row, col)`.
    pub fn slot_origin(&self, rect: BoardRect, row: u8, col: u8) -> (u16, u16) {
        (
            rect.x + GUTTER + col as u16 * (self.cell_w + GUTTER),
            rect.y + GUTTER + row as u16 * (self.cell_h + GUTTER),
        )
    }

    /// Top-left screen position of a tile, interpolated between slots.
    pub fn tile_origin(&self, rect: BoardRect, cell_size: i32, tile: &TileSnapshot) -> (u16, u16) {
        let scale = |coord: i32, pitch: u16| -> u16 {
            let units = coord.max(0) as i64 * pitch as i64 / cell_size.max(1) as i64;
            units.min(u16::MAX as i64) as u16
        };
        (
            rect.x + GUTTER + scale(tile.x, self.cell_w + GUTTER),
            rect.y + GUTTER + scale(tile.y, self.cell_h + GUTTER),
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Reuse the framebuffer across frames; it is only resized when the
    /// viewport changes.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let rect = self.board_rect(snap.rows, snap.cols, viewport);

        // Frame and gutters.
        let outline = CellStyle::new(OUTLINE, OUTLINE);
        fb.fill_rect(rect.x, rect.y, rect.width, rect.height, ' ', outline);

        let empty = CellStyle::new(BACKGROUND, BACKGROUND);
        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let (x, y) = self.slot_origin(rect, row, col);
                fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', empty);
            }
        }

        for tile in &snap.tiles {
            self.draw_tile(fb, rect, snap.cell_size, tile);
        }

        self.draw_side_panel(fb, snap, viewport, rect);

        if snap.lost {
            self.draw_overlay(fb, rect, "GAME OVER", "r: restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        rect: BoardRect,
        cell_size: i32,
        tile: &TileSnapshot,
    ) {
        let style = palette::tile_style(tile.value);
        let (x, y) = self.tile_origin(rect, cell_size, tile);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

        let digits = decimal_len(tile.value);
        let text_x = x + self.cell_w.saturating_sub(digits) / 2;
        let text_y = y + self.cell_h / 2;
        fb.put_u32(text_x, text_y, tile.value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        viewport: Viewport,
        rect: BoardRect,
    ) {
        let panel_x = rect.x.saturating_add(rect.width).saturating_add(PANEL_GAP);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = TEXT.bold();
        let dim = TEXT.dim();
        let gold = palette::tile_color(2048);
        let title = CellStyle::new(FONT_LIGHT, gold).bold();
        let banner = CellStyle::new(FONT_DARK, gold).bold();

        let mut y = rect.y;
        fb.put_str(panel_x, y, "2048", title);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.best, TEXT);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, TEXT);
        y = y.saturating_add(2);

        if snap.won {
            fb.put_str(panel_x, y, "YOU WIN!", banner);
        }
        y = y.saturating_add(2);

        for line in ["arrows/hjkl", "r  restart", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, rect: BoardRect, title: &str, hint: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = rect.y.saturating_add(rect.height / 2);

        let title_w = title.chars().count() as u16;
        let banner_w = title_w + 4;
        let banner_x = rect.x.saturating_add(rect.width.saturating_sub(banner_w) / 2);
        fb.fill_rect(banner_x, mid_y.saturating_sub(1), banner_w, 3, ' ', style);
        fb.put_str(banner_x + 2, mid_y, title, style);

        let hint_w = hint.chars().count() as u16;
        let hint_x = rect.x.saturating_add(rect.width.saturating_sub(hint_w) / 2);
        fb.put_str(hint_x, mid_y.saturating_add(2), hint, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Cell, GameConfig};

    fn snapshot(rows: &[[u32; 4]]) -> BoardSnapshot {
        let board = Board::from_rows(&GameConfig::default(), rows).unwrap();
        BoardSnapshot::from(&board)
    }

    #[test]
    fn board_rect_is_centered() {
        let view = GameView::default();
        let rect = view.board_rect(4, 4, Viewport::new(80, 24));
        assert_eq!(
            rect,
            BoardRect {
                x: 23,
                y: 3,
                width: 33,
                height: 17
            }
        );
        assert_eq!(view.slot_origin(rect, 0, 0), (24, 4));
        assert_eq!(view.slot_origin(rect, 3, 3), (48, 16));
    }

    #[test]
    fn resting_tile_matches_its_slot() {
        let view = GameView::default();
        let rect = view.board_rect(4, 4, Viewport::new(80, 24));
        let snap = snapshot(&[[0; 4], [0, 0, 8, 0], [0; 4], [0; 4]]);
        let tile = snap.tile_at(1, 2).unwrap();
        assert_eq!(
            view.tile_origin(rect, snap.cell_size, tile),
            view.slot_origin(rect, 1, 2)
        );
    }

    #[test]
    fn sliding_tile_sits_between_slots() {
        let view = GameView::default();
        let rect = view.board_rect(4, 4, Viewport::new(80, 24));
        let mut board = Board::new(&GameConfig::default()).unwrap();
        board.insert(Cell::new(0, 0), 2);
        let mut tile = TileSnapshot::from(board.get(Cell::new(0, 0)).unwrap());
        tile.x = 100;

        let (x, y) = view.tile_origin(rect, 200, &tile);
        assert_eq!((x, y), (28, 4));
    }

    #[test]
    fn value_is_centered_in_tile() {
        let view = GameView::default();
        let snap = snapshot(&[[2048, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let fb = view.render(&snap, Viewport::new(80, 24));
        let row = fb.row_text(5);
        assert_eq!(&row[25..29], "2048");
        // Single digit in the last slot (x = 48..55).
        assert_eq!(fb.get(51, 5).map(|c| c.ch), Some('2'));
    }

    #[test]
    fn side_panel_shows_title_and_win_banner() {
        let view = GameView::default();
        let mut snap = snapshot(&[[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        snap.won = true;
        let fb = view.render(&snap, Viewport::new(80, 24));

        // Frame spans x = 23..56, so the panel starts at 58.
        assert_eq!(&fb.row_text(3)[58..62], "2048");
        assert_eq!(&fb.row_text(6)[58..62], "2048");
        assert_eq!(&fb.row_text(11)[58..66], "YOU WIN!");
        let gold = palette::tile_color(2048);
        assert_eq!(fb.get(58, 3).map(|c| c.style.bg), Some(gold));
        assert_eq!(fb.get(58, 11).map(|c| c.style.fg), Some(FONT_DARK));
    }

    #[test]
    fn small_viewport_does_not_panic() {
        let view = GameView::default();
        let mut snap = snapshot(&[
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [2, 4, 8, 16],
            [32, 64, 128, 256],
        ]);
        snap.lost = true;
        let fb = view.render(&snap, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 5);
    }
}
