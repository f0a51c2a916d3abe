//! One player's battleship grid: placement validation, shot resolution,
//! and the owner/opponent projections.

use rand::Rng;

use crate::common::{Coord, ShotResult};
use crate::config::BOARD_SIZE;
use crate::ship::Ship;

/// Internal cell state. `Ship` cells revert to `Hit` when struck, so a
/// cell is `Ship` exactly while it holds an unhit ship segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// What a rendered cell may show. The opponent projection never yields
/// `Ship`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Unknown,
    Ship,
    Hit,
    Miss,
}

/// Read-only rendering of a board.
pub type BoardView = [[CellView; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
}

/// In-bounds cells within Chebyshev distance 1 of (`row`, `col`),
/// the cell itself included.
fn neighborhood(row: usize, col: usize) -> impl Iterator<Item = Coord> {
    (-1isize..=1)
        .flat_map(move |dr| (-1isize..=1).map(move |dc| (row as isize + dr, col as isize + dc)))
        .filter(|&(r, c)| {
            r >= 0 && c >= 0 && (r as usize) < BOARD_SIZE && (c as usize) < BOARD_SIZE
        })
        .map(|(r, c)| (r as usize, c as usize))
}

impl Board {
    /// Empty board, no ships placed.
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
        }
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Cells a ship of `length` would occupy from `bow`, extending right
    /// (horizontal) or down (vertical). `None` if any cell leaves the
    /// grid.
    fn ship_cells(&self, bow: Coord, length: usize, horizontal: bool) -> Option<Vec<Coord>> {
        let (dr, dc) = if horizontal { (0, 1) } else { (1, 0) };
        let mut cells = Vec::with_capacity(length);
        for i in 0..length {
            let (r, c) = (bow.0 + dr * i, bow.1 + dc * i);
            if !self.in_bounds(r, c) {
                return None;
            }
            cells.push((r, c));
        }
        Some(cells)
    }

    /// No ship may sit on or next to the candidate cells, diagonals
    /// included: fleets keep at least one cell of water between them.
    fn placement_clear(&self, cells: &[Coord]) -> bool {
        cells
            .iter()
            .all(|&(r, c)| neighborhood(r, c).all(|(nr, nc)| self.grid[nr][nc] != Cell::Ship))
    }

    /// Whether a ship fits at `bow` without leaving the grid or touching
    /// another ship. Pure check, no mutation.
    pub fn can_place_ship(&self, bow: Coord, length: usize, horizontal: bool) -> bool {
        match self.ship_cells(bow, length, horizontal) {
            Some(cells) => self.placement_clear(&cells),
            None => false,
        }
    }

    /// Place a ship if the geometry allows it. Returns `false` without
    /// mutation otherwise.
    pub fn place_ship(&mut self, bow: Coord, length: usize, horizontal: bool) -> bool {
        let Some(cells) = self.ship_cells(bow, length, horizontal) else {
            return false;
        };
        if !self.placement_clear(&cells) {
            return false;
        }
        for &(r, c) in &cells {
            self.grid[r][c] = Cell::Ship;
        }
        self.ships.push(Ship::new(cells));
        true
    }

    /// Rejection-sample bows and orientations until a ship of `length`
    /// lands. The fleet is placed largest-first, which keeps this loop
    /// short in practice on a 10x10 grid.
    pub fn place_ship_randomly<R: Rng>(&mut self, rng: &mut R, length: usize) {
        loop {
            let horizontal = rng.random();
            let bow = (
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if self.place_ship(bow, length, horizontal) {
                return;
            }
        }
    }

    /// Resolve a shot. Out-of-bounds and repeated shots fold into `Miss`
    /// with no mutation; sinking a ship seals the surrounding water as
    /// misses so the rendering shows the dead ship's outline.
    pub fn receive_shot(&mut self, coord: Coord) -> ShotResult {
        let (r, c) = coord;
        if !self.in_bounds(r, c) {
            return ShotResult::Miss;
        }
        match self.grid[r][c] {
            Cell::Hit | Cell::Miss => ShotResult::Miss,
            Cell::Empty => {
                self.grid[r][c] = Cell::Miss;
                ShotResult::Miss
            }
            Cell::Ship => {
                self.grid[r][c] = Cell::Hit;
                let mut sunk_cells = None;
                for ship in &mut self.ships {
                    if ship.register_hit(coord) {
                        if ship.is_sunk() {
                            sunk_cells = Some(ship.cells().to_vec());
                        }
                        break;
                    }
                }
                match sunk_cells {
                    Some(cells) => {
                        self.seal_around(&cells);
                        ShotResult::Sunk
                    }
                    None => ShotResult::Hit,
                }
            }
        }
    }

    /// Mark every still-empty neighbor of a sunk ship as a miss. Purely
    /// derived state; gameplay never depends on it.
    fn seal_around(&mut self, cells: &[Coord]) {
        for &(r, c) in cells {
            for (nr, nc) in neighborhood(r, c) {
                if self.grid[nr][nc] == Cell::Empty {
                    self.grid[nr][nc] = Cell::Miss;
                }
            }
        }
    }

    /// Vacuously true with no ships placed; callers check only after a
    /// full fleet is down.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Cells not yet shot at, the candidate pool for a hint shot.
    pub fn unresolved_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if matches!(self.grid[r][c], Cell::Empty | Cell::Ship) {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    fn project(&self, f: impl Fn(Cell) -> CellView) -> BoardView {
        core::array::from_fn(|r| core::array::from_fn(|c| f(self.grid[r][c])))
    }

    /// The owner sees everything: ships, hits, misses.
    pub fn owner_view(&self) -> BoardView {
        self.project(|cell| match cell {
            Cell::Empty => CellView::Unknown,
            Cell::Ship => CellView::Ship,
            Cell::Hit => CellView::Hit,
            Cell::Miss => CellView::Miss,
        })
    }

    /// The opponent sees hits and misses only; unhit ship cells are
    /// indistinguishable from open water.
    pub fn opponent_view(&self) -> BoardView {
        self.project(|cell| match cell {
            Cell::Empty | Cell::Ship => CellView::Unknown,
            Cell::Hit => CellView::Hit,
            Cell::Miss => CellView::Miss,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
