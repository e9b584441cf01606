//! Board rendering for the checkers GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Cell, Pos, BOARD_SIZE};

use super::theme::*;

/// Highlights drawn on top of the pieces
#[derive(Debug, Default)]
pub struct Overlay {
    pub selected: Option<Pos>,
    pub destinations: Vec<Pos>,
    pub movable: Vec<Pos>,
    /// Squares visited by the last action, origin first
    pub last_path: Vec<Pos>,
    /// Squares visited by the suggested action
    pub hint_path: Vec<Pos>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Playing area, margins excluded
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay, interactive: bool) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BORDER);
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        self.draw_squares(&painter);
        self.draw_coordinates(&painter);

        for pos in &overlay.movable {
            painter.rect_filled(self.cell_rect(*pos), CornerRadius::ZERO, movable_hint());
        }
        self.draw_path(&painter, &overlay.last_path, LAST_MOVE);
        self.draw_path(&painter, &overlay.hint_path, suggestion());

        self.draw_pieces(&painter, board);

        if let Some(pos) = overlay.selected {
            painter.rect_stroke(
                self.cell_rect(pos).shrink(MARKER_WIDTH / 2.0),
                CornerRadius::ZERO,
                Stroke::new(MARKER_WIDTH, SELECTED),
                egui::StrokeKind::Inside,
            );
        }
        for pos in &overlay.destinations {
            let center = self.board_to_screen(*pos);
            painter.circle_filled(center, self.cell_size * 0.15, destination_hint());
        }

        if !interactive || !response.clicked() {
            return None;
        }
        response
            .interact_pointer_pos()
            .and_then(|pointer| self.screen_to_board(pointer))
    }

    /// Draw the 8x8 checkerboard
    fn draw_squares(&self, painter: &Painter) {
        for pos in Pos::all() {
            let color = if pos.is_playable() { DARK_SQUARE } else { LIGHT_SQUARE };
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, color);
        }
    }

    /// Draw coordinate labels (rows 0-7, columns a-h)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let half = BOARD_MARGIN / 2.0;

        for i in 0..BOARD_SIZE {
            let offset = (i as f32 + 0.5) * self.cell_size;
            let letter = (b'a' + i as u8) as char;

            let top = Pos2::new(self.grid_rect.min.x + offset, self.grid_rect.min.y - half);
            let bottom = Pos2::new(self.grid_rect.min.x + offset, self.grid_rect.max.y + half);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), COORD_TEXT);
            painter.text(bottom, egui::Align2::CENTER_CENTER, letter, font.clone(), COORD_TEXT);

            let left = Pos2::new(self.grid_rect.min.x - half, self.grid_rect.min.y + offset);
            let right = Pos2::new(self.grid_rect.max.x + half, self.grid_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, i.to_string(), font.clone(), COORD_TEXT);
            painter.text(right, egui::Align2::CENTER_CENTER, i.to_string(), font.clone(), COORD_TEXT);
        }
    }

    /// Draw every piece on the board
    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            let cell = board.get(pos);
            if !cell.is_empty() {
                self.draw_piece(painter, pos, cell);
            }
        }
    }

    /// Draw a single piece, with a crown ring for kings
    fn draw_piece(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        match cell {
            Cell::BlackMan | Cell::BlackKing => {
                painter.circle_filled(center, radius, BLACK_PIECE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_PIECE_HIGHLIGHT,
                );
            }
            Cell::WhiteMan | Cell::WhiteKing => {
                painter.circle_filled(center, radius, WHITE_PIECE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_PIECE_SHADOW));
            }
            Cell::Empty => return,
        }

        if cell.is_king() {
            painter.circle_stroke(center, radius * 0.55, Stroke::new(radius * 0.15, KING_MARK));
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                "K",
                egui::FontId::proportional(radius * 0.8),
                KING_MARK,
            );
        }
    }

    /// Connect the squares of an action with a line and ring its ends
    fn draw_path(&self, painter: &Painter, path: &[Pos], color: Color32) {
        let stroke = Stroke::new(MARKER_WIDTH, color);
        for pair in path.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        if let (Some(first), Some(last)) = (path.first(), path.last()) {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + 4.0;
            painter.circle_stroke(self.board_to_screen(*first), radius, stroke);
            painter.circle_stroke(self.board_to_screen(*last), radius, stroke);
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min + Vec2::new(pos.col as f32, pos.row as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(row, col).ok()
    }

    /// Convert board position to the screen center of its square
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
