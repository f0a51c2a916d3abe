//! Tic-tac-toe engine. The inline-keyboard flow that drives it belongs
//! to the front end.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TttOutcome {
    Win(Mark),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [[Option<Mark>; 3]; 3],
    turn: Mark,
}

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

impl TicTacToe {
    /// X always opens.
    pub fn new() -> Self {
        Self {
            cells: [[None; 3]; 3],
            turn: Mark::X,
        }
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Place the current player's mark. Rejects occupied or out-of-range
    /// cells and any move after the game is decided.
    pub fn place(&mut self, row: usize, col: usize) -> bool {
        if row >= 3 || col >= 3 || self.cells[row][col].is_some() || self.outcome().is_some() {
            return false;
        }
        self.cells[row][col] = Some(self.turn);
        self.turn = self.turn.other();
        true
    }

    /// Scan rows, columns and diagonals for a win; a full board with no
    /// winner is a draw.
    pub fn outcome(&self) -> Option<TttOutcome> {
        for line in LINES {
            if let Some(mark) = self.cells[line[0].0][line[0].1] {
                if line.iter().all(|&(r, c)| self.cells[r][c] == Some(mark)) {
                    return Some(TttOutcome::Win(mark));
                }
            }
        }
        if self.cells.iter().flatten().all(Option::is_some) {
            return Some(TttOutcome::Draw);
        }
        None
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}
