//! Single-player minesweeper with three difficulty levels.

use std::collections::HashSet;

use rand::Rng;

use crate::common::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn board_size(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 6,
            Difficulty::Hard => 8,
        }
    }

    fn mine_fraction(self) -> f64 {
        match self {
            Difficulty::Easy => 0.25,
            Difficulty::Medium => 0.30,
            Difficulty::Hard => 0.35,
        }
    }

    /// Mines on a fresh board, at least one.
    pub fn mine_count(self) -> usize {
        let cells = self.board_size() * self.board_size();
        ((cells as f64 * self.mine_fraction()) as usize).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepState {
    InProgress,
    Won,
    Lost,
}

/// What a rendered tile may show. Unflagged mines appear only after a
/// loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileView {
    Hidden,
    Flagged,
    Open(u8),
    Mine,
}

#[derive(Debug, Clone)]
pub struct Minesweeper {
    size: usize,
    difficulty: Difficulty,
    mines: HashSet<Coord>,
    opened: HashSet<Coord>,
    flagged: HashSet<Coord>,
    state: SweepState,
}

impl Minesweeper {
    /// Fresh board with mines sampled by rejection until the quota is
    /// met.
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let size = difficulty.board_size();
        let mut mines = HashSet::new();
        while mines.len() < difficulty.mine_count() {
            mines.insert((rng.random_range(0..size), rng.random_range(0..size)));
        }
        Self {
            size,
            difficulty,
            mines,
            opened: HashSet::new(),
            flagged: HashSet::new(),
            state: SweepState::InProgress,
        }
    }

    /// Board with a known mine layout; out-of-range coordinates are
    /// dropped. Used by deterministic tests and replays.
    pub fn with_mines(difficulty: Difficulty, mines: impl IntoIterator<Item = Coord>) -> Self {
        let size = difficulty.board_size();
        let mines = mines
            .into_iter()
            .filter(|&(r, c)| r < size && c < size)
            .collect();
        Self {
            size,
            difficulty,
            mines,
            opened: HashSet::new(),
            flagged: HashSet::new(),
            state: SweepState::InProgress,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> SweepState {
        self.state
    }

    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Mines not yet covered by a flag.
    pub fn remaining_mines(&self) -> usize {
        self.mines.len() - self.mines.intersection(&self.flagged).count()
    }

    fn neighbors(&self, row: usize, col: usize) -> Vec<Coord> {
        let mut out = Vec::with_capacity(8);
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (nr, nc) = (row as isize + dr, col as isize + dc);
                if nr >= 0 && nc >= 0 && (nr as usize) < self.size && (nc as usize) < self.size {
                    out.push((nr as usize, nc as usize));
                }
            }
        }
        out
    }

    pub fn adjacent_mines(&self, row: usize, col: usize) -> u8 {
        self.neighbors(row, col)
            .into_iter()
            .filter(|cell| self.mines.contains(cell))
            .count() as u8
    }

    /// Open a cell. Returns `false` when it was a mine or the game is
    /// already over; flagged, already-open and out-of-range clicks are
    /// ignored and return `true`.
    pub fn open(&mut self, row: usize, col: usize) -> bool {
        if self.state != SweepState::InProgress {
            return false;
        }
        if row >= self.size || col >= self.size {
            return true;
        }
        let cell = (row, col);
        if self.flagged.contains(&cell) || self.opened.contains(&cell) {
            return true;
        }
        self.opened.insert(cell);
        if self.mines.contains(&cell) {
            self.state = SweepState::Lost;
            return false;
        }
        if self.adjacent_mines(row, col) == 0 {
            self.auto_open_from(row, col);
        }
        self.update_win();
        true
    }

    /// Flood out from a zero-adjacency cell. A zero cell has no mined
    /// neighbors, so this never opens a mine.
    fn auto_open_from(&mut self, row: usize, col: usize) {
        let mut stack = vec![(row, col)];
        while let Some((r, c)) = stack.pop() {
            for (nr, nc) in self.neighbors(r, c) {
                if self.opened.contains(&(nr, nc)) || self.flagged.contains(&(nr, nc)) {
                    continue;
                }
                self.opened.insert((nr, nc));
                if self.adjacent_mines(nr, nc) == 0 {
                    stack.push((nr, nc));
                }
            }
        }
    }

    /// Flag or unflag a closed cell.
    pub fn toggle_flag(&mut self, row: usize, col: usize) {
        if self.state != SweepState::InProgress || row >= self.size || col >= self.size {
            return;
        }
        let cell = (row, col);
        if self.opened.contains(&cell) {
            return;
        }
        if !self.flagged.remove(&cell) {
            self.flagged.insert(cell);
        }
        self.update_win();
    }

    /// Won when every safe cell is open or every mine carries a flag.
    fn update_win(&mut self) {
        if self.state != SweepState::InProgress {
            return;
        }
        let all_safe_open = (0..self.size)
            .flat_map(|r| (0..self.size).map(move |c| (r, c)))
            .filter(|cell| !self.mines.contains(cell))
            .all(|cell| self.opened.contains(&cell));
        let all_mines_flagged = self.mines.is_subset(&self.flagged);
        if all_safe_open || all_mines_flagged {
            self.state = SweepState::Won;
        }
    }

    /// Board projection for rendering.
    pub fn view(&self) -> Vec<Vec<TileView>> {
        (0..self.size)
            .map(|r| {
                (0..self.size)
                    .map(|c| {
                        let cell = (r, c);
                        if self.state == SweepState::Lost
                            && self.mines.contains(&cell)
                            && !self.flagged.contains(&cell)
                        {
                            TileView::Mine
                        } else if self.flagged.contains(&cell) {
                            TileView::Flagged
                        } else if self.opened.contains(&cell) {
                            TileView::Open(self.adjacent_mines(r, c))
                        } else {
                            TileView::Hidden
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
