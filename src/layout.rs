use serde::Deserialize;

use crate::board::BOARD_SIZE;
use crate::types::Position;

pub const DEFAULT_WINDOW_SIZE: f64 = 800.0;

/// Where the board is drawn inside the host window, in window pixels.
///
/// The board is a square whose top-left corner is `(left, top)`. Screen `y`
/// grows downward, so row 0 is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

impl BoardLayout {
    pub fn new(left: f64, top: f64, size: f64) -> Self {
        Self { left, top, size }
    }

    /// Centers the largest square that fits in the window after removing
    /// `margin` pixels from every side.
    pub fn fit_window(width: f64, height: f64, margin: f64) -> Self {
        let size = (width.min(height) - 2.0 * margin).max(0.0);
        Self {
            left: (width - size) / 2.0,
            top: (height - size) / 2.0,
            size,
        }
    }

    pub fn square_size(&self) -> f64 {
        self.size / BOARD_SIZE as f64
    }

    /// Maps a window coordinate to the cell under it. Returns `None` outside
    /// the drawn square. The right and bottom edges belong to no cell.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Position> {
        if !(self.size > 0.0) || !x.is_finite() || !y.is_finite() {
            return None;
        }

        let rel_x = x - self.left;
        let rel_y = y - self.top;
        if rel_x < 0.0 || rel_y < 0.0 || rel_x >= self.size || rel_y >= self.size {
            return None;
        }

        let square = self.square_size();
        let col = ((rel_x / square).floor() as usize).min(BOARD_SIZE - 1);
        let row = ((rel_y / square).floor() as usize).min(BOARD_SIZE - 1);
        Some(Position::new(row as u8, col as u8))
    }

    /// Window coordinate of the center of `pos`, for hosts that draw pieces.
    pub fn center_of(&self, pos: Position) -> (f64, f64) {
        let square = self.square_size();
        (
            self.left + (pos.col as f64 + 0.5) * square,
            self.top + (pos.row as f64 + 0.5) * square,
        )
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::fit_window(DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_SIZE, 0.0)
    }
}
