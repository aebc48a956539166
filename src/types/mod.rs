//! Small strongly-typed helpers shared across the solver.
//!
//! - [`Axis`]: which index direction a face sweep runs along
//! - [`SideBoundaries`]: one value per domain side with named fields
//!
//! # Example
//!
//! ```
//! use euler_fv::types::{Axis, Side, SideBoundaries};
//!
//! let sides = SideBoundaries::uniform(0.0_f64);
//! assert_eq!(sides.west, 0.0);
//! assert_eq!(Side::West.axis(), Axis::X);
//! ```

mod axis;
mod sides;

pub use axis::Axis;
pub use sides::{Side, SideBoundaries};
