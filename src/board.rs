use std::fmt;

use serde::Deserialize;

use crate::error::RuleError;
use crate::types::{Color, Piece, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
/// Rows filled with men at the start, per side.
const START_ROWS: usize = 3;
/// Scan order for move generation: up-left, up-right, down-left, down-right.
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Tunable movement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Men may jump backward even though they only step forward.
    pub men_capture_backward: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            men_capture_backward: true,
        }
    }
}

/// A move that has been applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// The piece as it stood on `from`, before any promotion.
    pub piece: Piece,
    pub captured: Option<(Position, Piece)>,
    pub promoted: bool,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Checkers board state as an 8x8 grid, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Piece; BOARD_SIZE]; BOARD_SIZE],
    rules: RuleSet,
}

impl Board {
    /// Creates the starting layout: Black on the dark squares of rows 0-2,
    /// White on the dark squares of rows 5-7.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        let mut board = Self::empty_with_rules(rules);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !is_dark(row, col) {
                    continue;
                }
                if row < START_ROWS {
                    board.squares[row][col] = Piece::BlackMan;
                } else if row >= BOARD_SIZE - START_ROWS {
                    board.squares[row][col] = Piece::WhiteMan;
                }
            }
        }
        board
    }

    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self::empty_with_rules(RuleSet::default())
    }

    pub fn empty_with_rules(rules: RuleSet) -> Self {
        Self {
            squares: [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE],
            rules,
        }
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Returns the occupant of `pos`. Off-board positions read as empty.
    pub fn piece(&self, pos: Position) -> Piece {
        if pos.is_on_board() {
            self.squares[pos.row as usize][pos.col as usize]
        } else {
            Piece::Empty
        }
    }

    /// Places `piece` on `pos`, ignoring off-board positions.
    pub fn set_piece(&mut self, pos: Position, piece: Piece) {
        if pos.is_on_board() {
            self.squares[pos.row as usize][pos.col as usize] = piece;
        }
    }

    /// Returns every destination the piece on `pos` may step or jump to.
    ///
    /// Directions are scanned in the order of [`DIAGONALS`]. In each one the
    /// step is listed when the adjacent square is empty, otherwise the jump
    /// when the adjacent square holds an opponent and the square beyond is
    /// empty. An empty square has no moves.
    pub fn valid_moves(&self, pos: Position) -> Vec<Position> {
        let piece = self.piece(pos);
        let Some(color) = piece.color() else {
            return Vec::new();
        };

        let mut moves = Vec::new();
        for (dr, dc) in DIAGONALS {
            let Some(next) = pos.offset(dr, dc) else {
                continue;
            };

            match self.piece(next).color() {
                None => {
                    if self.may_step(piece, dr) {
                        moves.push(next);
                    }
                }
                Some(owner) if owner != color => {
                    if !self.may_jump(piece, dr) {
                        continue;
                    }
                    if let Some(landing) = next.offset(dr, dc) {
                        if self.piece(landing).is_empty() {
                            moves.push(landing);
                        }
                    }
                }
                Some(_) => {}
            }
        }
        moves
    }

    /// Moves the piece on `from` to `to` after re-validating the move.
    ///
    /// A jump removes the piece in between. A man reaching its crowning row
    /// becomes a king. The board is untouched when an error is returned.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<Move, RuleError> {
        let piece = self.piece(from);
        if piece.is_empty() {
            return Err(RuleError::NoPiece { from });
        }
        if !self.valid_moves(from).contains(&to) {
            return Err(RuleError::IllegalDestination { from, to });
        }

        let captured = jumped_square(from, to).map(|mid| (mid, self.piece(mid)));
        let promoted = match (piece, to.row) {
            (Piece::WhiteMan, row) => row == Color::White.crowning_row(),
            (Piece::BlackMan, row) => row == Color::Black.crowning_row(),
            (Piece::WhiteKing | Piece::BlackKing | Piece::Empty, _) => false,
        };

        self.set_piece(from, Piece::Empty);
        self.set_piece(to, if promoted { piece.crowned() } else { piece });
        if let Some((mid, _)) = captured {
            self.set_piece(mid, Piece::Empty);
        }

        Ok(Move {
            from,
            to,
            piece,
            captured,
            promoted,
        })
    }

    /// Returns the number of pieces (men and kings) owned by `color`.
    pub fn count(&self, color: Color) -> u8 {
        self.squares
            .iter()
            .flatten()
            .filter(|piece| piece.color() == Some(color))
            .count() as u8
    }

    /// Converts the board to row-major cell codes, see [`Piece::code`].
    pub fn cells(&self) -> [u8; NUM_SQUARES] {
        let mut cells = [0u8; NUM_SQUARES];
        for (cell, piece) in cells.iter_mut().zip(self.squares.iter().flatten()) {
            *cell = piece.code();
        }
        cells
    }

    fn may_step(&self, piece: Piece, dr: i8) -> bool {
        if piece.is_king() {
            return true;
        }
        piece.color().is_some_and(|color| dr == color.forward())
    }

    fn may_jump(&self, piece: Piece, dr: i8) -> bool {
        self.rules.men_capture_backward || self.may_step(piece, dr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for piece in squares {
                write!(f, "{}", piece.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "  ABCDEFGH")
    }
}

fn is_dark(row: usize, col: usize) -> bool {
    (row + col) % 2 == 1
}

/// The square between `from` and `to` when they are two diagonals apart.
fn jumped_square(from: Position, to: Position) -> Option<Position> {
    let dr = to.row as i16 - from.row as i16;
    let dc = to.col as i16 - from.col as i16;
    if dr.abs() == 2 && dc.abs() == 2 {
        Some(Position::new(
            (from.row as i16 + dr / 2) as u8,
            (from.col as i16 + dc / 2) as u8,
        ))
    } else {
        None
    }
}
