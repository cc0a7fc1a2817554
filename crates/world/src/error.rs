use deathchest_core::BlockPos;
use thiserror::Error;

/// Ways a death-chest operation can fall short.
///
/// None of these are fatal: callers degrade to dropping items at the death
/// position or to a logged no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChestError {
    #[error("chest site {pos} was occupied before the chest could be placed")]
    PlacementConflict { pos: BlockPos },

    #[error("no chest site within radius {radius} of {origin}")]
    NoSiteFound { origin: BlockPos, radius: i32 },

    #[error("chest was full, {unplaced} stack(s) left over")]
    CapacityExceeded { unplaced: usize },

    #[error("no tracked chest at {pos}")]
    StaleReference { pos: BlockPos },
}
