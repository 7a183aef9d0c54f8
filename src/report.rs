//! Turns click outcomes into human-readable log lines.
//!
//! The rules engine never formats text itself; everything the player reads in
//! the log is produced here and emitted through `tracing`.

use tracing::{debug, info, warn};

use crate::error::{ClickError, ClickResult};
use crate::game::ClickOutcome;
use crate::types::{Color, Piece, Position};

/// Severity of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

pub(crate) fn started(turn: Color) {
    info!("[GAME] Game initialized. {turn}'s turn to play.");
}

pub(crate) fn clicked(at: Position, piece: Piece) {
    debug!("[GAME] Board Position: {at} [{piece}]");
}

/// Emits every line describing `result`.
pub fn log(result: &ClickResult<ClickOutcome>) {
    for (level, line) in lines(result) {
        match level {
            Level::Info => info!("{line}"),
            Level::Warn => warn!("{line}"),
        }
    }
}

/// The lines describing `result`, in emission order.
pub fn lines(result: &ClickResult<ClickOutcome>) -> Vec<(Level, String)> {
    match result {
        Ok(outcome) => outcome_lines(outcome),
        Err(err) => error_lines(err),
    }
}

fn outcome_lines(outcome: &ClickOutcome) -> Vec<(Level, String)> {
    let mut out = Vec::new();
    match outcome {
        ClickOutcome::Ignored { at, .. } => {
            out.push(info_line(format!("[GAME] Nothing to select at {at}")));
        }
        ClickOutcome::Selected { at, by, moves } => {
            out.push(info_line(format!("[SELECT] {by} piece selected at {at}")));
            if moves.is_empty() {
                out.push(info_line("[SELECT] No valid moves available for this piece"));
            } else {
                let list = notation_list(moves);
                out.push(info_line(format!("[SELECT] Valid moves: {list}")));
            }
        }
        ClickOutcome::Deselected { .. } => {
            out.push(info_line("[SELECT] Deselecting current piece"));
            out.push(selection_cleared());
        }
        ClickOutcome::Moved { mv, next_turn } => {
            out.push(info_line(format!("[MOVE] Move successful: {} -> {}", mv.from, mv.to)));
            if mv.promoted {
                out.push(info_line(format!("[MOVE] {} crowned at {}", mv.piece, mv.to)));
            }
            out.push(info_line(format!("[GAME] {next_turn}'s turn to play")));
            out.push(selection_cleared());
        }
        ClickOutcome::Captured {
            mv,
            by,
            remaining,
            winner,
        } => {
            out.push(info_line(format!("[MOVE] Move successful: {} -> {}", mv.from, mv.to)));
            if let Some((square, piece)) = mv.captured {
                out.push(info_line(format!(
                    "[MOVE] {by} captures {piece} at {square}! {} has {remaining} left",
                    by.opponent()
                )));
            }
            if mv.promoted {
                out.push(info_line(format!("[MOVE] {} crowned at {}", mv.piece, mv.to)));
            }
            let closing = match winner {
                Some(winner) => format!("[GAME] Game Over! {}", winner.message()),
                None => format!("[GAME] Capture occurred! {by} can move again."),
            };
            out.push(info_line(closing));
            out.push(selection_cleared());
        }
    }
    out
}

fn error_lines(err: &ClickError) -> Vec<(Level, String)> {
    match err {
        ClickError::OutsideBoard { .. } => vec![warn_line("[GAME] Click outside the board")],
        ClickError::GameOver => vec![warn_line("[GAME] Game is over! No further moves allowed.")],
        ClickError::WrongTurn { turn, .. } => {
            vec![warn_line(format!("[SELECT] Invalid Selection: It's {turn}'s turn"))]
        }
        ClickError::NotAValidMove { from, to } => vec![
            info_line(format!("[MOVE] Attempting move {from} to {to}")),
            warn_line("[MOVE] Invalid move: Not in list of valid moves"),
            selection_cleared(),
        ],
        ClickError::IllegalMove(rule) => vec![
            warn_line(format!("[MOVE] Move failed: Invalid according to game rules ({rule})")),
            selection_cleared(),
        ],
    }
}

/// Space separated square names, e.g. `A5 C5`.
pub fn notation_list(squares: &[Position]) -> String {
    squares
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn selection_cleared() -> (Level, String) {
    info_line("[SELECT] Selection cleared")
}

fn info_line(line: impl Into<String>) -> (Level, String) {
    (Level::Info, line.into())
}

fn warn_line(line: impl Into<String>) -> (Level, String) {
    (Level::Warn, line.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;
    use crate::types::Winner;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn texts(result: &ClickResult<ClickOutcome>) -> Vec<String> {
        lines(result).into_iter().map(|(_, line)| line).collect()
    }

    #[test]
    fn selection_lists_moves_in_notation() {
        let result = Ok(ClickOutcome::Selected {
            at: pos(6, 1),
            by: Color::White,
            moves: vec![pos(5, 0), pos(5, 2)],
        });

        let lines = texts(&result);

        assert!(lines[0].contains("White piece selected at B2"));
        assert!(lines[1].ends_with("Valid moves: A3 C3"));
    }

    #[test]
    fn selection_without_moves_says_so() {
        let result = Ok(ClickOutcome::Selected {
            at: pos(7, 0),
            by: Color::White,
            moves: vec![],
        });

        assert!(texts(&result)[1].contains("No valid moves"));
    }

    #[test]
    fn final_capture_announces_winner() {
        let mv = Move {
            from: pos(3, 4),
            to: pos(1, 6),
            piece: Piece::WhiteMan,
            captured: Some((pos(2, 5), Piece::BlackMan)),
            promoted: false,
        };
        let result = Ok(ClickOutcome::Captured {
            mv,
            by: Color::White,
            remaining: 0,
            winner: Some(Winner::White),
        });

        let lines = texts(&result);

        assert!(lines.iter().any(|line| line.contains("White captures Black at F6")));
        assert!(lines.iter().any(|line| line.contains("Game Over! White Player Wins!")));
        assert!(!lines.iter().any(|line| line.contains("can move again")));
    }

    #[test]
    fn rejections_are_warnings() {
        let outside = lines(&Err(ClickError::OutsideBoard { x: -1.0, y: 3.0 }));
        let over = lines(&Err(ClickError::GameOver));

        assert_eq!(outside[0].0, Level::Warn);
        assert!(outside[0].1.contains("outside the board"));
        assert_eq!(over[0].0, Level::Warn);
    }

    #[test]
    fn failed_move_reports_cleared_selection() {
        let result = Err(ClickError::NotAValidMove {
            from: pos(5, 2),
            to: pos(3, 2),
        });

        let lines = texts(&result);

        assert_eq!(lines[0], "[MOVE] Attempting move C3 to C5");
        assert_eq!(lines.last().map(String::as_str), Some("[SELECT] Selection cleared"));
    }

    #[test]
    fn notation_list_joins_with_spaces() {
        assert_eq!(notation_list(&[pos(0, 0), pos(7, 7)]), "A8 H1");
        assert_eq!(notation_list(&[]), "");
    }
}
