//! Board state validation logic

use crate::board::{Board, Player};
use crate::lines::WINNING_LINES;

impl Board {
    /// Check if the board state is reachable under the game rules
    pub fn is_valid(&self) -> bool {
        let x_count = self.cells.iter().filter(|&&c| c == Player::X.to_cell()).count();
        let o_count = self.cells.iter().filter(|&&c| c == Player::O.to_cell()).count();

        // X moves first, so X is equal to O or exactly one ahead
        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false; // Both can't win
        }

        // The winner must have moved last
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && x_count != o_count {
            return false;
        }

        // Multiple winning lines must share a cell (formed by a single move)
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell.
    /// This is necessary for multiple lines to be formed in a single move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let cell = player.to_cell();
        let winning_lines: Vec<&[usize; 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == cell))
            .collect();

        // If fewer than 2 lines, trivially true
        if winning_lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| winning_lines.iter().all(|line| line.contains(&pos)))
    }

    /// Count states reachable from the empty board by legal play
    pub fn count_reachable_states() -> usize {
        let mut count = 0;
        let mut stack = vec![Board::new()];
        let mut seen = std::collections::HashSet::new();

        while let Some(board) = stack.pop() {
            if !seen.insert(board.encode()) {
                continue;
            }
            count += 1;

            if !board.is_terminal() {
                for square in board.legal_moves() {
                    if let Ok(next) = board.make_move(square) {
                        stack.push(next);
                    }
                }
            }
        }

        count
    }
}
