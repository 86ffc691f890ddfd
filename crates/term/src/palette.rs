//! Tile colours, keyed by `log2(value)`.
//!
//! Values past the table get a generated colour instead of failing.

use crate::fb::{CellStyle, Rgb};

/// Grid lines and the board frame.
pub const OUTLINE: Rgb = Rgb::new(187, 173, 160);

/// Empty slot.
pub const BACKGROUND: Rgb = Rgb::new(205, 192, 180);

/// Text on light tiles (2 and 4).
pub const FONT_DARK: Rgb = Rgb::new(119, 110, 101);

/// Text on saturated tiles (8 and up).
pub const FONT_LIGHT: Rgb = Rgb::new(249, 246, 242);

/// Index 0 is the 2 tile, index 1 the 4 tile, and so on.
const TILE_COLORS: [Rgb; 11] = [
    Rgb::new(237, 229, 218), // 2
    Rgb::new(238, 225, 201), // 4
    Rgb::new(243, 178, 122), // 8
    Rgb::new(246, 150, 101), // 16
    Rgb::new(247, 124, 95),  // 32
    Rgb::new(247, 95, 59),   // 64
    Rgb::new(237, 208, 115), // 128
    Rgb::new(237, 204, 99),  // 256
    Rgb::new(236, 202, 80),  // 512
    Rgb::new(237, 197, 63),  // 1024
    Rgb::new(237, 194, 46),  // 2048
];

/// Past 2048 tiles step down from this shade.
const BEYOND_BASE: Rgb = Rgb::new(72, 68, 60);

/// Palette index for a tile value (0 for a 2).
pub fn color_index(value: u32) -> usize {
    (value.max(2).ilog2() - 1) as usize
}

/// Background colour of a tile.
pub fn tile_color(value: u32) -> Rgb {
    let idx = color_index(value);
    match TILE_COLORS.get(idx) {
        Some(&rgb) => rgb,
        None => {
            let extra = (idx - TILE_COLORS.len()).min(10) as u8;
            BEYOND_BASE.darken(extra * 6)
        }
    }
}

/// Full style of a tile: background from the palette, readable text on top.
pub fn tile_style(value: u32) -> CellStyle {
    let fg = if value <= 4 { FONT_DARK } else { FONT_LIGHT };
    CellStyle::new(fg, tile_color(value)).bold()
}
