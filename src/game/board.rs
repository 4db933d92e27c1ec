pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

/// A complete snapshot of the 3x3 grid. Positions are values: derived
/// positions are fresh copies and an existing position is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [[Cell; SIZE]; SIZE],
}

/// The 8 win lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

impl Position {
    /// Create an empty board
    pub fn new() -> Self {
        Position {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(super) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Count the cells holding the given mark
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != Cell::Empty)
    }

    /// Scan all 8 lines for three identical non-empty marks.
    ///
    /// Every line is examined; a legal sequence of alternating moves can
    /// never complete a line for both marks, and that is asserted here
    /// rather than assumed.
    pub fn winning_cell(&self) -> Option<Cell> {
        let mut winner = None;
        for line in &LINES {
            let first = self.get(line[0].0, line[0].1);
            if first == Cell::Empty {
                continue;
            }
            if line.iter().all(|&(r, c)| self.get(r, c) == first) {
                debug_assert!(
                    winner.is_none() || winner == Some(first),
                    "both marks hold a completed line"
                );
                winner = Some(first);
            }
        }
        winner
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let position = Position::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert_eq!(position.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(position.count(Cell::Empty), 9);
        assert!(!position.is_full());
    }

    #[test]
    fn test_count_marks() {
        let mut position = Position::new();
        position.set(0, 0, Cell::X);
        position.set(1, 1, Cell::O);
        position.set(2, 2, Cell::X);
        assert_eq!(position.count(Cell::X), 2);
        assert_eq!(position.count(Cell::O), 1);
        assert_eq!(position.count(Cell::Empty), 6);
    }

    #[test]
    fn test_row_win() {
        let mut position = Position::new();
        for col in 0..SIZE {
            position.set(1, col, Cell::X);
        }
        assert_eq!(position.winning_cell(), Some(Cell::X));
    }

    #[test]
    fn test_column_win() {
        let mut position = Position::new();
        for row in 0..SIZE {
            position.set(row, 2, Cell::O);
        }
        assert_eq!(position.winning_cell(), Some(Cell::O));
    }

    #[test]
    fn test_diagonal_wins() {
        let mut main_diag = Position::new();
        for i in 0..SIZE {
            main_diag.set(i, i, Cell::X);
        }
        assert_eq!(main_diag.winning_cell(), Some(Cell::X));

        let mut anti_diag = Position::new();
        for i in 0..SIZE {
            anti_diag.set(i, SIZE - 1 - i, Cell::O);
        }
        assert_eq!(anti_diag.winning_cell(), Some(Cell::O));
    }

    #[test]
    fn test_no_win_with_two() {
        let mut position = Position::new();
        position.set(0, 0, Cell::X);
        position.set(0, 1, Cell::X);
        assert_eq!(position.winning_cell(), None);
    }

    #[test]
    fn test_full_board_no_line() {
        // X O X / X O O / O X X has no completed line
        let mut position = Position::new();
        let layout = [
            [Cell::X, Cell::O, Cell::X],
            [Cell::X, Cell::O, Cell::O],
            [Cell::O, Cell::X, Cell::X],
        ];
        for row in 0..SIZE {
            for col in 0..SIZE {
                position.set(row, col, layout[row][col]);
            }
        }
        assert!(position.is_full());
        assert_eq!(position.winning_cell(), None);
    }
}
