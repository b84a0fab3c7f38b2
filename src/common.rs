//! Common types: coordinates, attack outcomes and the error values returned
//! by board and session operations.

use alloc::string::String;
use core::fmt;

use crate::ship::Ship;

/// A grid position. `x` is the column, `y` the row, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours that are representable, in
    /// right, left, down, up order. Neighbours past the far edge of the board
    /// are still returned; callers check bounds against the board.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        [
            self.x.checked_add(1).map(|x| Coord::new(x, self.y)),
            self.x.checked_sub(1).map(|x| Coord::new(x, self.y)),
            self.y.checked_add(1).map(|y| Coord::new(self.x, y)),
            self.y.checked_sub(1).map(|y| Coord::new(self.x, y)),
        ]
        .into_iter()
        .flatten()
    }

    /// Whether `other` shares an edge with this coordinate.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of an attack that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The cell was empty water.
    Miss,
    /// A ship was hit and is still afloat.
    Hit,
    /// A ship was hit and this hit sank it.
    Sunk,
}

/// Coordinate of an attack together with how it resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub coord: Coord,
    pub outcome: AttackOutcome,
}

/// Requested board edge is larger than the supported maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSizeError {
    pub size: usize,
    pub max: usize,
}

impl fmt::Display for BoardSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board size {} exceeds maximum {}", self.size, self.max)
    }
}

/// Reasons a ship placement is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// At least one covered cell lies outside the board.
    OutOfBounds,
    /// At least one covered cell is already occupied by another ship.
    Overlaps,
    /// Ships must cover at least one cell.
    ZeroLength,
    /// Random placement found no free position within its attempt budget.
    UnableToPlace,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlaps => write!(f, "Ship placement overlaps with another ship"),
            PlacementError::ZeroLength => write!(f, "Ship has zero length"),
            PlacementError::UnableToPlace => write!(f, "Unable to place ship"),
        }
    }
}

/// A refused placement. The board is unchanged and the ship is handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPlacement {
    reason: PlacementError,
    ship: Ship,
}

impl RejectedPlacement {
    pub(crate) fn new(reason: PlacementError, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Why the ship could not be placed.
    pub fn reason(&self) -> PlacementError {
        self.reason
    }

    /// The ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Recover the ship to try again elsewhere.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl fmt::Display for RejectedPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not place {}: {}", self.ship.name(), self.reason)
    }
}

impl From<RejectedPlacement> for PlacementError {
    fn from(rejected: RejectedPlacement) -> Self {
        rejected.reason
    }
}

/// Attacks that were rejected without changing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// Coordinate lies outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Coordinate was already hit or recorded as a miss.
    AlreadyAttacked { x: usize, y: usize },
    /// Every cell of the board has already been attacked.
    NoValidMoves,
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::OutOfBounds { x, y } => {
                write!(f, "Attack at ({}, {}) is out of bounds", x, y)
            }
            AttackError::AlreadyAttacked { x, y } => {
                write!(f, "Position ({}, {}) was already attacked", x, y)
            }
            AttackError::NoValidMoves => write!(f, "No untried positions remain"),
        }
    }
}

/// Errors returned by `GameSession` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Operation is not allowed in the current phase.
    WrongPhase,
    /// No fleet entry with this name.
    UnknownShip(String),
    /// The named fleet entry is already on the board.
    ShipAlreadyPlaced(&'static str),
    /// The game cannot start before the whole fleet is deployed.
    FleetIncomplete { placed: usize, total: usize },
    /// The configured fleet has no ships, so the game could never end.
    EmptyFleet,
    Placement(PlacementError),
    Attack(AttackError),
}

impl From<PlacementError> for SessionError {
    fn from(err: PlacementError) -> Self {
        SessionError::Placement(err)
    }
}

impl From<RejectedPlacement> for SessionError {
    fn from(rejected: RejectedPlacement) -> Self {
        SessionError::Placement(rejected.reason)
    }
}

impl From<AttackError> for SessionError {
    fn from(err: AttackError) -> Self {
        SessionError::Attack(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::WrongPhase => write!(f, "Operation not allowed in the current phase"),
            SessionError::UnknownShip(name) => write!(f, "Unknown ship '{}'", name),
            SessionError::ShipAlreadyPlaced(name) => write!(f, "{} is already placed", name),
            SessionError::FleetIncomplete { placed, total } => {
                write!(f, "Fleet incomplete: {} of {} ships placed", placed, total)
            }
            SessionError::EmptyFleet => write!(f, "Fleet has no ships"),
            SessionError::Placement(e) => write!(f, "Placement error: {}", e),
            SessionError::Attack(e) => write!(f, "Attack error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardSizeError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for RejectedPlacement {}
#[cfg(feature = "std")]
impl std::error::Error for AttackError {}
#[cfg(feature = "std")]
impl std::error::Error for SessionError {}
