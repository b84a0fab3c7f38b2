// Hunt/target guessing logic for the computer opponent.
//
// Only the most recent unresolved hit is used as an anchor, and a sink wipes
// every pending hit, including hits on other ships that are still afloat.

use alloc::vec::Vec;
use log::trace;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::board::Gameboard;
use crate::common::{AttackError, AttackOutcome, Coord};
use crate::config::MAX_TARGET_ATTEMPTS;

/// Which phase the heuristic is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// No pending lead; attacks are drawn at random.
    Hunt,
    /// Following up on a hit whose ship is not confirmed sunk.
    Target,
}

/// Targeting memory: own hits not yet resolved into a sunk ship, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targeting {
    previous_hits: Vec<Coord>,
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_hits(&self) -> &[Coord] {
        &self.previous_hits
    }

    /// The hit that neighbour search is anchored on, if any.
    pub fn anchor(&self) -> Option<Coord> {
        self.previous_hits.last().copied()
    }

    pub fn mode(&self) -> TargetMode {
        if self.previous_hits.is_empty() {
            TargetMode::Hunt
        } else {
            TargetMode::Target
        }
    }

    pub fn clear(&mut self) {
        self.previous_hits.clear();
    }

    /// Choose the next coordinate to attack on `enemy`.
    ///
    /// With an anchor, its orthogonal neighbours are tried in random order and
    /// the first valid move wins. Otherwise, or when every neighbour has been
    /// tried, coordinates are sampled uniformly from the whole board.
    pub fn select<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        enemy: &Gameboard,
    ) -> Result<Coord, AttackError> {
        if let Some(anchor) = self.anchor() {
            let mut neighbors: Vec<Coord> = anchor.neighbors().collect();
            neighbors.shuffle(rng);
            if let Some(next) = neighbors
                .into_iter()
                .find(|c| enemy.is_valid_move(c.x, c.y))
            {
                trace!("target mode: {} next to {}", next, anchor);
                return Ok(next);
            }
            trace!("target mode: no open neighbour around {}", anchor);
        }
        hunt(rng, enemy)
    }

    /// Fold the outcome of our last attack into memory.
    pub fn record(&mut self, coord: Coord, outcome: AttackOutcome) {
        match outcome {
            AttackOutcome::Hit => self.previous_hits.push(coord),
            AttackOutcome::Sunk => self.previous_hits.clear(),
            AttackOutcome::Miss => {}
        }
    }
}

/// Uniform random choice among untried cells: rejection sampling with a
/// bounded number of draws, then a direct pick from what is left.
fn hunt<R: Rng + ?Sized>(rng: &mut R, enemy: &Gameboard) -> Result<Coord, AttackError> {
    if !enemy.has_untried_cells() {
        return Err(AttackError::NoValidMoves);
    }
    let size = enemy.size();
    for _ in 0..MAX_TARGET_ATTEMPTS {
        let c = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        if enemy.is_valid_move(c.x, c.y) {
            trace!("hunt mode: {}", c);
            return Ok(c);
        }
    }
    let remaining: Vec<Coord> = enemy.untried_cells().collect();
    remaining
        .choose(rng)
        .copied()
        .ok_or(AttackError::NoValidMoves)
}
