use std::fmt;

use serde::Serialize;

use crate::board::BOARD_SIZE;

/// A board coordinate. Row 0 is the top of the drawn board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Steps `(dr, dc)` squares away, or `None` when that leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

}

/// Chess-like label: column letter from `A`, rank counted from the bottom row.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'A' + self.col) as char;
        let rank = BOARD_SIZE as u8 - self.row;
        write!(f, "{file}{rank}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row on which this color's men are crowned.
    pub fn crowning_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE as u8 - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Occupant of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Piece {
    #[default]
    Empty,
    WhiteMan,
    BlackMan,
    WhiteKing,
    BlackKing,
}

impl Piece {
    pub fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::WhiteMan | Piece::WhiteKing => Some(Color::White),
            Piece::BlackMan | Piece::BlackKing => Some(Color::Black),
        }
    }

    pub fn is_king(self) -> bool {
        match self {
            Piece::WhiteKing | Piece::BlackKing => true,
            Piece::Empty | Piece::WhiteMan | Piece::BlackMan => false,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    /// The king of the same color. Kings and empty squares are unchanged.
    pub fn crowned(self) -> Self {
        match self {
            Piece::WhiteMan => Piece::WhiteKing,
            Piece::BlackMan => Piece::BlackKing,
            Piece::Empty | Piece::WhiteKing | Piece::BlackKing => self,
        }
    }

    /// Renderer encoding: 0=empty, 1=white man, 2=black man, 3=white king, 4=black king.
    pub fn code(self) -> u8 {
        match self {
            Piece::Empty => 0,
            Piece::WhiteMan => 1,
            Piece::BlackMan => 2,
            Piece::WhiteKing => 3,
            Piece::BlackKing => 4,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::WhiteMan => 'w',
            Piece::BlackMan => 'b',
            Piece::WhiteKing => 'W',
            Piece::BlackKing => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Piece::Empty => "Empty",
            Piece::WhiteMan => "White",
            Piece::BlackMan => "Black",
            Piece::WhiteKing => "White King",
            Piece::BlackKing => "Black King",
        };
        f.write_str(label)
    }
}

/// Final result once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    White,
    Black,
    Tie,
}

impl Winner {
    pub fn message(self) -> &'static str {
        match self {
            Winner::White => "White Player Wins!",
            Winner::Black => "Black Player Wins!",
            Winner::Tie => "It's a Tie!",
        }
    }
}

/// Read-only snapshot handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Row-major cell codes, see [`Piece::code`].
    pub board: Vec<u8>,
    pub turn: Color,
    pub selected: Option<Position>,
    /// Contract:
    /// - With a selection: the cached destinations of the selected piece.
    /// - Without a selection: must be an empty list.
    pub valid_moves: Vec<Position>,
    pub white_score: i32,
    pub black_score: i32,
    pub is_game_over: bool,
    pub winner: Option<String>,
}

/// Reply to a click forwarded through the WASM API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickReply {
    /// `false` when the click was rejected.
    pub accepted: bool,
    /// Rejection reason, absent for accepted clicks.
    pub error: Option<String>,
    pub state: SessionState,
}
