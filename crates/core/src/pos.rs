//! Integer block coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A block position in world coordinates.
///
/// Ordering is lexicographic by `(x, y, z)`, which matches the site scan order
/// and keeps `BTreeMap<BlockPos, _>` iteration deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BlockPos {
    /// East/west axis.
    pub x: i32,
    /// Vertical axis.
    pub y: i32,
    /// North/south axis.
    pub z: i32,
}

impl BlockPos {
    /// Construct a position from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Position shifted by the given deltas. Saturates at the `i32` bounds.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
        }
    }

    /// The block directly above.
    pub fn up(self) -> Self {
        self.offset(0, 1, 0)
    }

    /// The block directly below.
    pub fn down(self) -> Self {
        self.offset(0, -1, 0)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}
