//! Theme constants for the checkers GUI

use egui::Color32;

// Board colors - warm wood tones
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(238, 214, 174);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(139, 90, 43);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(60, 40, 20);
pub const COORD_TEXT: Color32 = Color32::from_rgb(200, 190, 170);

// Piece colors
pub const BLACK_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_PIECE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);
pub const KING_MARK: Color32 = Color32::from_rgb(230, 180, 40);

// Markers
pub const SELECTED: Color32 = Color32::from_rgb(80, 200, 120);
pub const LAST_MOVE: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn destination_hint() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 200, 120, 110)
}

pub fn movable_hint() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 220, 90, 90)
}

pub fn suggestion() -> Color32 {
    Color32::from_rgba_unmultiplied(90, 160, 255, 120)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const MARKER_WIDTH: f32 = 3.0;
