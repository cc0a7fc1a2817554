//! Chest site search around a death position.

use deathchest_core::BlockPos;
use tracing::{debug, trace};

use crate::world::WorldAccess;

/// Outcome of a site search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    /// First valid site in scan order.
    Found(BlockPos),
    /// No position within the radius qualifies.
    NotFound,
}

impl SearchResult {
    /// The found position, if any.
    pub fn position(self) -> Option<BlockPos> {
        match self {
            SearchResult::Found(pos) => Some(pos),
            SearchResult::NotFound => None,
        }
    }
}

/// A chest fits at `pos` when the block is air, the block below is solid and
/// the block above is air (it receives the label sign).
pub fn is_valid_site<W: WorldAccess + ?Sized>(world: &W, pos: BlockPos) -> bool {
    world.block(pos).is_empty()
        && world.block(pos.down()).is_solid()
        && world.block(pos.up()).is_empty()
}

/// Find a chest site for a death at `origin`.
///
/// The origin wins if it is valid. Otherwise every offset in
/// `[-radius, radius]^3` is tried with x outermost and z innermost, ascending,
/// and the first valid position is returned. Negative radii only test the
/// origin. Read-only.
pub fn find_site<W: WorldAccess + ?Sized>(
    world: &W,
    origin: BlockPos,
    radius: i32,
) -> SearchResult {
    if is_valid_site(world, origin) {
        trace!(%origin, "death position is a valid chest site");
        return SearchResult::Found(origin);
    }

    let radius = radius.max(0);
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            for dz in -radius..=radius {
                let candidate = origin.offset(dx, dy, dz);
                if is_valid_site(world, candidate) {
                    debug!(%origin, %candidate, "found chest site");
                    return SearchResult::Found(candidate);
                }
            }
        }
    }

    debug!(%origin, radius, "no chest site in range");
    SearchResult::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;
    use crate::memory::MemoryWorld;

    const ORIGIN: BlockPos = BlockPos::new(0, 64, 0);

    #[test]
    fn origin_on_solid_ground_is_chosen() {
        let world = MemoryWorld::default().with_floor(63, 4);
        assert_eq!(find_site(&world, ORIGIN, 1), SearchResult::Found(ORIGIN));
    }

    #[test]
    fn first_valid_offset_in_scan_order_wins() {
        // Floor only under (1, 64, 0) and (1, 64, 1); origin has no footing.
        let mut world = MemoryWorld::default();
        world.fill_block(BlockPos::new(1, 63, 0), BlockKind::Solid);
        world.fill_block(BlockPos::new(1, 63, 1), BlockKind::Solid);

        assert_eq!(
            find_site(&world, ORIGIN, 1),
            SearchResult::Found(BlockPos::new(1, 64, 0))
        );
    }

    #[test]
    fn lower_x_beats_lower_y() {
        let mut world = MemoryWorld::default();
        world.fill_block(BlockPos::new(-1, 64, 1), BlockKind::Solid);
        world.fill_block(BlockPos::new(0, 62, -1), BlockKind::Solid);

        assert_eq!(
            find_site(&world, ORIGIN, 1),
            SearchResult::Found(BlockPos::new(-1, 65, 1))
        );
    }

    #[test]
    fn blocked_headroom_disqualifies() {
        let mut world = MemoryWorld::default();
        world.fill_block(ORIGIN.down(), BlockKind::Solid);
        world.fill_block(ORIGIN.up(), BlockKind::Passable);

        assert!(!is_valid_site(&world, ORIGIN));
        assert_eq!(find_site(&world, ORIGIN, 0), SearchResult::NotFound);
    }

    #[test]
    fn occupied_site_disqualifies() {
        let mut world = MemoryWorld::default().with_floor(63, 0);
        world.fill_block(ORIGIN, BlockKind::Passable);
        assert!(!is_valid_site(&world, ORIGIN));
    }

    #[test]
    fn signs_give_no_footing() {
        let mut world = MemoryWorld::default();
        world.fill_block(ORIGIN.down(), BlockKind::SignMarker);
        assert!(!is_valid_site(&world, ORIGIN));

        world.fill_block(ORIGIN.down(), BlockKind::ContainerMarker);
        assert!(is_valid_site(&world, ORIGIN));
    }

    #[test]
    fn nothing_in_range_reports_not_found() {
        let world = MemoryWorld::default().with_floor(50, 3);
        assert_eq!(find_site(&world, ORIGIN, 2), SearchResult::NotFound);
        assert_eq!(find_site(&world, ORIGIN, 2).position(), None);
    }

    #[test]
    fn negative_radius_checks_origin_only() {
        let mut world = MemoryWorld::default();
        world.fill_block(BlockPos::new(1, 63, 0), BlockKind::Solid);
        assert_eq!(find_site(&world, ORIGIN, -4), SearchResult::NotFound);
    }
}
