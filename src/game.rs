//! High-level game management

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Square};
use crate::minimax;

/// A move in the game record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub square: Square,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history.
///
/// Games always start from the empty board with X to move; the board at any
/// point is reconstructed by replaying the move list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game at the initial position
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] when the game has already ended,
    /// or [`crate::Error::InvalidMove`] for an illegal square.
    pub fn play(&mut self, square: Square) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_board()?;
        let next = current.make_move(square)?;

        self.moves.push(Move {
            square,
            player: current.to_move(),
        });

        if next.is_terminal() {
            self.outcome = Some(if let Some(winner) = next.winner() {
                GameOutcome::Win(winner)
            } else {
                GameOutcome::Draw
            });
        }

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current
    /// state. This indicates corrupted game data.
    fn replay_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut board = Board::new();
        for m in self.moves.iter().take(end_index) {
            board = board.make_move(m.square)?;
        }
        Ok(board)
    }

    /// Get the current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current
    /// state. This indicates corrupted game data.
    pub fn current_board(&self) -> Result<Board, crate::Error> {
        self.replay_until(self.moves.len())
    }

    /// Get the sequence of board states, from the empty board to the
    /// current position
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current
    /// state. This indicates corrupted game data.
    pub fn board_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        boards.push(Board::new());

        for i in 1..=self.moves.len() {
            boards.push(self.replay_until(i)?);
        }

        Ok(boards)
    }
}

/// Play a full game with both sides following the exhaustive search.
///
/// Optimal play on both sides always produces a draw.
pub fn perfect_playout() -> Result<Game, crate::Error> {
    let mut game = Game::new();

    loop {
        let board = game.current_board()?;
        match minimax::best_move(&board)? {
            Some(square) => game.play(square)?,
            None => break,
        }
    }

    Ok(game)
}
