//! Sweep direction for dimension-by-dimension flux evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coordinate axis of a cell interface sweep.
///
/// An x-face separates cells `(i, j)` and `(i + 1, j)`; its normal velocity
/// is `u` and its tangential velocity is `v`. A y-face separates `(i, j)` and
/// `(i, j + 1)` with the roles swapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// First array index, physical x.
    X,
    /// Second array index, physical y.
    Y,
}

impl Axis {
    /// Both axes in sweep order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Index offset of the `+axis` neighbour.
    #[inline]
    pub fn offset(self) -> (usize, usize) {
        match self {
            Axis::X => (1, 0),
            Axis::Y => (0, 1),
        }
    }

    /// The other axis.
    #[inline]
    pub fn transverse(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}
