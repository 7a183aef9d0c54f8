use serde::Deserialize;
use tracing::debug;

use crate::board::{Board, Move, RuleSet};
use crate::error::{ClickError, ClickResult, ConfigError};
use crate::layout::BoardLayout;
use crate::report;
use crate::types::{Color, Piece, Position, SessionState, Winner};

/// Pieces each side starts with, and so the starting score.
pub const STARTING_SCORE: i32 = 12;

/// Session settings supplied by the host at startup.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub layout: BoardLayout,
    /// Margin kept around the board when the window is resized.
    pub margin: f64,
    pub rules: RuleSet,
    pub starting_score: i32,
}

impl SessionConfig {
    /// Scores must start positive, otherwise the game would be over before
    /// the first capture.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_score <= 0 {
            return Err(ConfigError::NonPositiveScore(self.starting_score));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            layout: BoardLayout::default(),
            margin: 0.0,
            rules: RuleSet::default(),
            starting_score: STARTING_SCORE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub at: Position,
    pub moves: Vec<Position>,
}

/// What a single accepted click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Empty square clicked with nothing selected.
    Ignored { at: Position, piece: Piece },
    /// A piece of the side to move was selected. `moves` may be empty.
    Selected {
        at: Position,
        by: Color,
        moves: Vec<Position>,
    },
    /// The selected square was clicked again.
    Deselected { at: Position },
    /// A step was played and the turn passed to `next_turn`.
    Moved { mv: Move, next_turn: Color },
    /// A jump was played. The mover keeps the turn unless `winner` is set.
    Captured {
        mv: Move,
        by: Color,
        /// Score left to the side that lost the piece.
        remaining: i32,
        winner: Option<Winner>,
    },
}

/// One interactive game: the board plus turn, selection and score state.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    layout: BoardLayout,
    margin: f64,
    turn: Color,
    selection: Option<Selection>,
    white_score: i32,
    black_score: i32,
    game_over: bool,
}

impl GameSession {
    pub fn new() -> Self {
        let config = SessionConfig::default();
        Self::start(Board::with_rules(config.rules), config)
    }

    pub fn with_config(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::from_board(Board::with_rules(config.rules), config)
    }

    /// Starts a session on a custom position with White to move. The board
    /// keeps its own rules; `config.rules` only applies to fresh boards.
    pub fn from_board(board: Board, config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(board, config))
    }

    fn start(board: Board, config: SessionConfig) -> Self {
        debug!("[GAME] Starting position:\n{board}");
        report::started(Color::White);
        Self {
            board,
            layout: config.layout,
            margin: config.margin,
            turn: Color::White,
            selection: None,
            white_score: config.starting_score,
            black_score: config.starting_score,
            game_over: false,
        }
    }

    /// Runs one interaction cycle for a click at window pixel `(x, y)`.
    ///
    /// Rejections are reported and returned as errors; none of them leaves
    /// the session partially updated.
    pub fn handle_click(&mut self, x: f64, y: f64) -> ClickResult<ClickOutcome> {
        let result = self.step(x, y);
        report::log(&result);
        result
    }

    /// Refits the board to a new window size. Game state is untouched.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout = BoardLayout::fit_window(width, height, self.margin);
        debug!(
            "[GAME] Board resized to {}px at ({}, {})",
            self.layout.size, self.layout.left, self.layout.top
        );
    }

    pub fn winner(&self) -> Option<Winner> {
        if !self.game_over {
            return None;
        }
        Some(if self.white_score > self.black_score {
            Winner::White
        } else if self.black_score > self.white_score {
            Winner::Black
        } else {
            Winner::Tie
        })
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.selection.is_some() {
            Phase::PieceSelected
        } else {
            Phase::AwaitingSelection
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Cached destinations of the selected piece, empty without a selection.
    pub fn valid_moves(&self) -> &[Position] {
        self.selection
            .as_ref()
            .map(|selection| selection.moves.as_slice())
            .unwrap_or(&[])
    }

    pub fn score(&self, color: Color) -> i32 {
        match color {
            Color::White => self.white_score,
            Color::Black => self.black_score,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn snapshot(&self) -> SessionState {
        SessionState {
            board: self.board.cells().to_vec(),
            turn: self.turn,
            selected: self.selection.as_ref().map(|selection| selection.at),
            valid_moves: self.valid_moves().to_vec(),
            white_score: self.white_score,
            black_score: self.black_score,
            is_game_over: self.game_over,
            winner: self.winner().map(|winner| winner.message().to_string()),
        }
    }

    fn step(&mut self, x: f64, y: f64) -> ClickResult<ClickOutcome> {
        if self.game_over {
            return Err(ClickError::GameOver);
        }

        let at = self
            .layout
            .cell_at(x, y)
            .ok_or(ClickError::OutsideBoard { x, y })?;
        let piece = self.board.piece(at);
        report::clicked(at, piece);

        match self.selection.take() {
            None => self.select(at, piece),
            Some(selection) if selection.at == at => Ok(ClickOutcome::Deselected { at }),
            Some(selection) => self.play(selection, at),
        }
    }

    fn select(&mut self, at: Position, piece: Piece) -> ClickResult<ClickOutcome> {
        match piece.color() {
            None => Ok(ClickOutcome::Ignored { at, piece }),
            Some(owner) if owner == self.turn => {
                let moves = self.board.valid_moves(at);
                self.selection = Some(Selection {
                    at,
                    moves: moves.clone(),
                });
                Ok(ClickOutcome::Selected {
                    at,
                    by: owner,
                    moves,
                })
            }
            Some(owner) => Err(ClickError::WrongTurn {
                at,
                owner,
                turn: self.turn,
            }),
        }
    }

    /// Plays the selected piece to `to`. The selection is already cleared.
    fn play(&mut self, selection: Selection, to: Position) -> ClickResult<ClickOutcome> {
        let from = selection.at;
        if !selection.moves.contains(&to) {
            return Err(ClickError::NotAValidMove { from, to });
        }

        let mv = self.board.move_piece(from, to)?;
        if !mv.is_capture() {
            self.turn = self.turn.opponent();
            return Ok(ClickOutcome::Moved {
                mv,
                next_turn: self.turn,
            });
        }

        let by = self.turn;
        let victim = by.opponent();
        let remaining = match victim {
            Color::White => {
                self.white_score -= 1;
                self.white_score
            }
            Color::Black => {
                self.black_score -= 1;
                self.black_score
            }
        };
        if self.white_score <= 0 || self.black_score <= 0 {
            self.game_over = true;
        }

        Ok(ClickOutcome::Captured {
            mv,
            by,
            remaining,
            winner: self.winner(),
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
