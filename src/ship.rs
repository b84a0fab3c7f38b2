//! Ship definitions and hit tracking.

use alloc::string::String;

/// Orientation of a ship on the board. Horizontal ships extend along +x,
/// vertical ships along +y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other axis.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Step from a ship's head to its `i`th segment.
    pub(crate) fn offset(self, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (i, 0),
            Orientation::Vertical => (0, i),
        }
    }
}

/// Fleet entry: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    /// Create a new ship definition.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// A fresh, undamaged ship of this type.
    pub fn build(&self) -> Ship {
        Ship::new(self.name, self.length)
    }
}

/// Index of a ship within the board that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A damageable unit. `sunk` is kept equal to `hits >= length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
    length: usize,
    hits: usize,
    sunk: bool,
}

impl Ship {
    pub fn new(name: impl Into<String>, length: usize) -> Self {
        Self {
            name: name.into(),
            length,
            hits: 0,
            sunk: length == 0,
        }
    }

    /// Register one hit. Hits beyond `length` are counted but change nothing.
    pub fn hit(&mut self) {
        self.hits += 1;
        self.sunk = self.hits >= self.length;
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
