//! Error types for the rules engine and the click handler.
//!
//! Every variant is recoverable: the board and session are left exactly as
//! they were before the rejected operation.

use crate::types::{Color, Position};

/// A move rejected by the board rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// No piece on the source square
    #[error("no piece at {from}")]
    NoPiece { from: Position },

    /// Destination is neither a step nor a jump for this piece
    #[error("{from} cannot move to {to}")]
    IllegalDestination { from: Position, to: Position },
}

/// Why a click was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClickError {
    /// The click landed outside the drawn board
    #[error("click at ({x}, {y}) is outside the board")]
    OutsideBoard { x: f64, y: f64 },

    /// The session has finished
    #[error("game is over, no further moves allowed")]
    GameOver,

    /// Tried to select a piece belonging to the side not on move
    #[error("{at} holds a {owner} piece but it is {turn}'s turn")]
    WrongTurn {
        at: Position,
        owner: Color,
        turn: Color,
    },

    /// The destination is not in the cached list of valid moves
    #[error("{from} to {to} is not in the list of valid moves")]
    NotAValidMove { from: Position, to: Position },

    /// The board rejected the move on re-validation
    #[error("move rejected by the rules: {0}")]
    IllegalMove(#[from] RuleError),
}

/// A session configuration that cannot start a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Both sides would start at or below zero
    #[error("starting score must be positive, got {0}")]
    NonPositiveScore(i32),
}

/// Result type alias for click handling
pub type ClickResult<T> = Result<T, ClickError>;
