//! Per-side values with named fields.
//!
//! Avoids positional conventions like `[south, east, north, west]` vs
//! `[west, east, south, north]` when configuring the four domain edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Axis;

/// One edge of the unit square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// y = 0
    South,
    /// x = 1
    East,
    /// y = 1
    North,
    /// x = 0
    West,
}

impl Side {
    /// All sides in storage order: south, east, north, west.
    pub const ALL: [Side; 4] = [Side::South, Side::East, Side::North, Side::West];

    /// Axis normal to this side.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Side::West | Side::East => Axis::X,
            Side::South | Side::North => Axis::Y,
        }
    }

    /// Whether the side sits at the low end of its axis (x = 0 or y = 0).
    #[inline]
    pub fn is_low(self) -> bool {
        matches!(self, Side::West | Side::South)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::South => "south",
            Side::East => "east",
            Side::North => "north",
            Side::West => "west",
        };
        f.write_str(name)
    }
}

/// Value specification with named fields for each side.
///
/// # Example
///
/// ```
/// use euler_fv::boundary::BoundaryPolicy;
/// use euler_fv::types::SideBoundaries;
///
/// let bcs = SideBoundaries::new(
///     BoundaryPolicy::Reflective,   // south
///     BoundaryPolicy::Transmissive, // east
///     BoundaryPolicy::Reflective,   // north
///     BoundaryPolicy::Transmissive, // west
/// );
///
/// assert_eq!(bcs.south, BoundaryPolicy::Reflective);
/// assert_eq!(bcs.east, BoundaryPolicy::Transmissive);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBoundaries<T> {
    /// South boundary (y = 0)
    pub south: T,
    /// East boundary (x = 1)
    pub east: T,
    /// North boundary (y = 1)
    pub north: T,
    /// West boundary (x = 0)
    pub west: T,
}

impl<T> SideBoundaries<T> {
    /// Create new side boundaries with explicit named values.
    ///
    /// Order: south, east, north, west (counterclockwise from bottom)
    pub fn new(south: T, east: T, north: T, west: T) -> Self {
        Self {
            south,
            east,
            north,
            west,
        }
    }

    /// Create with the same value on all sides.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            south: value.clone(),
            east: value.clone(),
            north: value.clone(),
            west: value,
        }
    }

    /// Map a function over all sides.
    pub fn map<U, F>(self, mut f: F) -> SideBoundaries<U>
    where
        F: FnMut(T) -> U,
    {
        SideBoundaries {
            south: f(self.south),
            east: f(self.east),
            north: f(self.north),
            west: f(self.west),
        }
    }

    /// Replace the value on one side.
    pub fn with(mut self, side: Side, value: T) -> Self {
        *self.get_mut(side) = value;
        self
    }

    /// Mutable value for a given side.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::South => &mut self.south,
            Side::East => &mut self.east,
            Side::North => &mut self.north,
            Side::West => &mut self.west,
        }
    }

    /// Value for a given side.
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::South => &self.south,
            Side::East => &self.east,
            Side::North => &self.north,
            Side::West => &self.west,
        }
    }

    /// Iterate over `(side, value)` pairs in order: south, east, north, west.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }

    /// Whether every side carries the same value.
    pub fn is_uniform(&self) -> bool
    where
        T: PartialEq,
    {
        self.south == self.east && self.east == self.north && self.north == self.west
    }
}

impl<T: Default> Default for SideBoundaries<T> {
    fn default() -> Self {
        Self {
            south: T::default(),
            east: T::default(),
            north: T::default(),
            west: T::default(),
        }
    }
}

impl<T: fmt::Display + PartialEq> fmt::Display for SideBoundaries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_uniform() {
            write!(f, "{}", self.south)
        } else {
            write!(
                f,
                "S:{} E:{} N:{} W:{}",
                self.south, self.east, self.north, self.west
            )
        }
    }
}
