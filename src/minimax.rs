//! Exhaustive minimax search
//!
//! Explores the complete game tree with no pruning, no transposition table,
//! and no depth limit. The 3x3 board bounds the search naturally, so full
//! enumeration finishes in well under a second. Keeping the search plain
//! also keeps move selection bit-for-bit deterministic: ties are broken by
//! the row-major enumeration order of [`Board::legal_moves`], first move
//! wins.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Square};
use crate::error::{Error, Result};

/// Result of evaluating a position to the end of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Game value from X's perspective: +1 X win, 0 draw, -1 O win
    pub value: i32,
    /// First value-optimal move in enumeration order; `None` on terminal
    /// boards
    pub best_move: Option<Square>,
    /// Every move tying the optimal value, in enumeration order
    pub optimal_moves: Vec<Square>,
    /// Number of states examined during the search
    pub states_examined: u64,
}

/// Compute the optimal move for the player to move.
///
/// Returns `Ok(None)` on terminal boards; that is a valid outcome, not an
/// error.
pub fn best_move(board: &Board) -> Result<Option<Square>> {
    Ok(evaluate(board)?.best_move)
}

/// Evaluate a position by exhaustive search.
///
/// The value is maximal over children for X to move and minimal for O.
/// `best_move` is the first move achieving that value in enumeration
/// order; `optimal_moves` lists every move that ties it.
pub fn evaluate(board: &Board) -> Result<Evaluation> {
    let mut states = 1u64;

    if board.is_terminal() {
        return Ok(Evaluation {
            value: board.utility(),
            best_move: None,
            optimal_moves: Vec::new(),
            states_examined: states,
        });
    }

    let to_move = board.to_move();
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(non_terminal_without_moves(board));
    }

    let mut scored = Vec::with_capacity(moves.len());
    for square in moves {
        let child = board.make_move(square)?;
        let value = match to_move {
            Player::X => min_value(&child, &mut states)?,
            Player::O => max_value(&child, &mut states)?,
        };
        scored.push((square, value));
    }

    let value = match to_move {
        Player::X => scored.iter().map(|&(_, v)| v).max(),
        Player::O => scored.iter().map(|&(_, v)| v).min(),
    }
    .unwrap_or(0);

    let optimal_moves: Vec<Square> = scored
        .iter()
        .filter(|&&(_, v)| v == value)
        .map(|&(square, _)| square)
        .collect();

    Ok(Evaluation {
        value,
        best_move: optimal_moves.first().copied(),
        optimal_moves,
        states_examined: states,
    })
}

/// Value of a board with the maximizing player (X) to move
fn max_value(board: &Board, states: &mut u64) -> Result<i32> {
    *states += 1;

    if board.is_terminal() {
        return Ok(board.utility());
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(non_terminal_without_moves(board));
    }

    let mut value = i32::MIN;
    for square in moves {
        let child = board.make_move(square)?;
        value = value.max(min_value(&child, states)?);
    }
    Ok(value)
}

/// Value of a board with the minimizing player (O) to move
fn min_value(board: &Board, states: &mut u64) -> Result<i32> {
    *states += 1;

    if board.is_terminal() {
        return Ok(board.utility());
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(non_terminal_without_moves(board));
    }

    let mut value = i32::MAX;
    for square in moves {
        let child = board.make_move(square)?;
        value = value.min(max_value(&child, states)?);
    }
    Ok(value)
}

fn non_terminal_without_moves(board: &Board) -> Error {
    Error::InvariantViolation {
        message: format!("non-terminal board '{}' has no legal moves", board.encode()),
    }
}
