//! A single placed ship: a fixed cell list and an accumulating hit set.

use std::collections::HashSet;

use crate::common::Coord;

/// Ship cells are chosen by the board's placement algorithm and never
/// change afterwards; hits only grow and only ever hold ship cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
    hits: HashSet<Coord>,
}

impl Ship {
    pub fn new(cells: Vec<Coord>) -> Self {
        Self {
            cells,
            hits: HashSet::new(),
        }
    }

    /// Cells occupied by this ship, bow first.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Record a hit if the coordinate belongs to this ship.
    /// Returns `true` when it did.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if self.contains(coord) {
            self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    /// Sunk when every cell has been hit. `hits` only ever holds ship
    /// cells, so comparing cardinalities is set equality.
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.cells.len()
    }
}
