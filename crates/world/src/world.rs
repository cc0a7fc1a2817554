//! The world capability death chests run against.
//!
//! Hosts implement [`WorldAccess`] over their own block storage. Death-chest
//! logic only ever addresses blocks by [`BlockPos`] and re-resolves them on
//! every call, so no block handle outlives a single operation.

use deathchest_core::{BlockPos, ItemStack};

use crate::block::BlockKind;
use crate::chest::ChestInventory;
use crate::effects::{ParticleEffect, SoundEffect};

/// Number of text lines on a label sign.
pub const LABEL_LINES: usize = 3;

/// Text carried by a label sign.
pub type LabelText = [String; LABEL_LINES];

/// Block query and mutation capability supplied by the host.
pub trait WorldAccess {
    /// Block currently at `pos`. Unloaded or out-of-range positions report
    /// [`BlockKind::Solid`] or [`BlockKind::Empty`] at the host's discretion.
    fn block(&self, pos: BlockPos) -> BlockKind;

    /// Replace the block at `pos`.
    ///
    /// Placing [`BlockKind::ContainerMarker`] creates an empty inventory there.
    /// Replacing a marker destroys its inventory or label; with
    /// `drop_on_break` the block and its contents become dropped items,
    /// otherwise they vanish.
    fn set_block(&mut self, pos: BlockPos, kind: BlockKind, drop_on_break: bool);

    /// Inventory of the chest at `pos`.
    fn container(&self, pos: BlockPos) -> Option<&ChestInventory>;

    /// Mutable inventory of the chest at `pos`.
    fn container_mut(&mut self, pos: BlockPos) -> Option<&mut ChestInventory>;

    /// Write label text onto the sign at `pos`. Returns `false` when there is
    /// no sign there.
    fn set_label(&mut self, pos: BlockPos, lines: LabelText) -> bool;

    /// Label text of the sign at `pos`.
    fn label(&self, pos: BlockPos) -> Option<&LabelText>;

    /// Spawn a particle burst centred on `pos`.
    fn spawn_particles(&mut self, pos: BlockPos, effect: &ParticleEffect);

    /// Play a sound centred on `pos`.
    fn play_sound(&mut self, pos: BlockPos, sound: &SoundEffect);

    /// Drop item entities at `pos`, the host's default death behaviour.
    fn drop_items(&mut self, pos: BlockPos, items: Vec<ItemStack>);
}
