//! Game board: ship placement, attack resolution and the record of misses.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::Rng;

use crate::common::{
    AttackError, AttackOutcome, BoardSizeError, Coord, PlacementError, RejectedPlacement,
};
use crate::config::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipDef, ShipId};

/// An occupied grid position: the ship covering it and whether it was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ship: ShipId,
    pub hit: bool,
}

/// Square board owning its ships. Empty cells are `None`; misses are kept
/// separately in the order they happened, with a per-cell mask for lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gameboard {
    size: usize,
    grid: Vec<Option<Cell>>,
    ships: Vec<Ship>,
    missed: Vec<Coord>,
    missed_mask: Vec<bool>,
}

impl Gameboard {
    /// Create an empty `size`×`size` board. `size` is clamped to
    /// `MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        let size = size.min(MAX_BOARD_SIZE);
        Gameboard {
            size,
            grid: vec![None; size * size],
            ships: Vec::new(),
            missed: Vec::new(),
            missed_mask: vec![false; size * size],
        }
    }

    /// Fallible constructor: returns `Err` if `size` exceeds `MAX_BOARD_SIZE`.
    pub fn try_new(size: usize) -> Result<Self, BoardSizeError> {
        if size > MAX_BOARD_SIZE {
            Err(BoardSizeError {
                size,
                max: MAX_BOARD_SIZE,
            })
        } else {
            Ok(Self::new(size))
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(y * self.size + x)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some()
    }

    /// Occupant of `(x, y)`, or `None` for water and out-of-range positions.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).and_then(|i| self.grid[i])
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    pub fn ship_at(&self, x: usize, y: usize) -> Option<&Ship> {
        self.cell(x, y).and_then(|c| self.ship(c.ship))
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of placed ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Missed coordinates in the order they were attacked.
    pub fn missed_attacks(&self) -> &[Coord] {
        &self.missed
    }

    pub fn is_missed(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some_and(|i| self.missed_mask[i])
    }

    pub fn is_hit(&self, x: usize, y: usize) -> bool {
        matches!(self.cell(x, y), Some(Cell { hit: true, .. }))
    }

    /// In bounds and not yet attacked.
    pub fn is_valid_move(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && !self.is_hit(x, y) && !self.is_missed(x, y)
    }

    /// Every coordinate that can still be attacked, row by row.
    pub fn untried_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size)
            .flat_map(move |y| (0..self.size).map(move |x| Coord::new(x, y)))
            .filter(move |c| self.is_valid_move(c.x, c.y))
    }

    pub fn has_untried_cells(&self) -> bool {
        self.untried_cells().next().is_some()
    }

    /// Grid indices a ship would cover, or the first reason it cannot go there.
    fn covered_cells(
        &self,
        length: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<Vec<usize>, PlacementError> {
        if length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        let mut cells = Vec::with_capacity(length);
        for i in 0..length {
            let (dx, dy) = orientation.offset(i);
            let idx = x
                .checked_add(dx)
                .zip(y.checked_add(dy))
                .and_then(|(cx, cy)| self.index(cx, cy))
                .ok_or(PlacementError::OutOfBounds)?;
            if self.grid[idx].is_some() {
                return Err(PlacementError::Overlaps);
            }
            cells.push(idx);
        }
        Ok(cells)
    }

    /// Check whether a ship of `length` fits with its head at `(x, y)`.
    pub fn is_valid_placement(
        &self,
        length: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        self.covered_cells(length, x, y, orientation).map(|_| ())
    }

    /// Place `ship` with its head at `(x, y)`. Either every covered cell is
    /// claimed or, on error, the board is left untouched and the ship is
    /// returned inside the error.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<ShipId, RejectedPlacement> {
        let cells = match self.covered_cells(ship.length(), x, y, orientation) {
            Ok(cells) => cells,
            Err(reason) => {
                trace!("rejected {} at ({}, {}) {:?}: {}", ship.name(), x, y, orientation, reason);
                return Err(RejectedPlacement::new(reason, ship));
            }
        };
        let id = ShipId(self.ships.len());
        for idx in cells {
            self.grid[idx] = Some(Cell { ship: id, hit: false });
        }
        debug!("placed {} at ({}, {}) {:?}", ship.name(), x, y, orientation);
        self.ships.push(ship);
        Ok(id)
    }

    /// Returns a random free head position and orientation for a ship of `length`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(Coord, Orientation), PlacementError> {
        if length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        if length > self.size {
            return Err(PlacementError::UnableToPlace);
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (self.size - length, self.size - 1),
                Orientation::Vertical => (self.size - 1, self.size - length),
            };
            let head = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            if self
                .is_valid_placement(length, head.x, head.y, orientation)
                .is_ok()
            {
                return Ok((head, orientation));
            }
        }
        Err(PlacementError::UnableToPlace)
    }

    /// Deploy each definition in `fleet` at a random free position. Ships
    /// placed before a failure stay on the board.
    pub fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipDef],
    ) -> Result<(), PlacementError> {
        for def in fleet {
            let (head, orientation) = self.random_placement(rng, def.length())?;
            self.place_ship(def.build(), head.x, head.y, orientation)?;
        }
        Ok(())
    }

    /// Resolve an attack at `(x, y)`. Out-of-range and repeated attacks are
    /// rejected and change nothing.
    pub fn receive_attack(&mut self, x: usize, y: usize) -> Result<AttackOutcome, AttackError> {
        let idx = self.index(x, y).ok_or(AttackError::OutOfBounds { x, y })?;
        match self.grid[idx] {
            Some(Cell { hit: true, .. }) => Err(AttackError::AlreadyAttacked { x, y }),
            Some(Cell { ship, hit: false }) => {
                self.grid[idx] = Some(Cell { ship, hit: true });
                let ship = &mut self.ships[ship.0];
                ship.hit();
                let outcome = if ship.is_sunk() {
                    AttackOutcome::Sunk
                } else {
                    AttackOutcome::Hit
                };
                debug!("attack at ({}, {}) on {}: {:?}", x, y, ship.name(), outcome);
                Ok(outcome)
            }
            None => {
                if self.missed_mask[idx] {
                    return Err(AttackError::AlreadyAttacked { x, y });
                }
                let coord = Coord::new(x, y);
                self.missed_mask[idx] = true;
                self.missed.push(coord);
                debug!("attack at {}: Miss", coord);
                Ok(AttackOutcome::Miss)
            }
        }
    }

    /// Returns `true` when at least one ship is placed and every ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }
}

impl Default for Gameboard {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

/// Plain text dump: `S` ship, `X` hit, `o` miss, `.` water.
impl fmt::Display for Gameboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.size {
            write!(f, " {}", x % 10)?;
        }
        writeln!(f)?;
        for y in 0..self.size {
            write!(f, "{:3}", y)?;
            for x in 0..self.size {
                let ch = match self.cell(x, y) {
                    Some(Cell { hit: true, .. }) => 'X',
                    Some(Cell { hit: false, .. }) => 'S',
                    None if self.is_missed(x, y) => 'o',
                    None => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
