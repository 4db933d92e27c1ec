use super::board::SIZE;
use super::{Cell, Player, Position};

/// A move: zero-based (row, col) coordinates of an empty cell to mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    CellOccupied,
    OutOfBounds,
}

impl Position {
    /// Create the initial position: all nine cells empty
    pub fn initial() -> Self {
        Position::new()
    }

    /// The player who has the next turn, derived from mark counts:
    /// X when the counts are equal, O otherwise. X always moves first.
    pub fn side_to_move(&self) -> Player {
        let x_count = self.count(Cell::X);
        let o_count = self.count(Cell::O);
        debug_assert!(
            x_count == o_count || x_count == o_count + 1,
            "invalid position: {x_count} X marks vs {o_count} O marks"
        );
        if x_count == o_count {
            Player::X
        } else {
            Player::O
        }
    }

    /// Every empty cell, in row-major order. Empty on a full board.
    /// The order is the tie-break order for move selection in search.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.get(row, col) == Cell::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Apply a move and return the new position (immutable)
    pub fn apply_move(&self, m: Move) -> Result<Position, MoveError> {
        if m.row >= SIZE || m.col >= SIZE {
            return Err(MoveError::OutOfBounds);
        }
        if self.get(m.row, m.col) != Cell::Empty {
            return Err(MoveError::CellOccupied);
        }

        let mut next = *self;
        next.set(m.row, m.col, self.side_to_move().to_cell());
        Ok(next)
    }

    /// Evaluate the position. `None` while the game is in progress; the
    /// outcome is always recomputed from the grid, never stored.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winning_cell() {
            Some(Cell::X) => Some(GameOutcome::Winner(Player::X)),
            Some(Cell::O) => Some(GameOutcome::Winner(Player::O)),
            _ => {
                if self.is_full() {
                    Some(GameOutcome::Draw)
                } else {
                    None
                }
            }
        }
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}
