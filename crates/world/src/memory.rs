//! Sparse in-memory world used by the headless host and worldtests.

use std::collections::BTreeMap;

use deathchest_core::{BlockPos, ItemStack, RegistryKey};
use serde::Serialize;
use tracing::trace;

use crate::block::BlockKind;
use crate::chest::{ChestInventory, CHEST_SLOT_COUNT};
use crate::effects::{ParticleEffect, SoundEffect};
use crate::world::{LabelText, WorldAccess};

/// A stack lying on the ground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedStack {
    pub pos: BlockPos,
    pub stack: ItemStack,
}

/// Record of a cosmetic effect played into the world.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectRecord {
    Particles { pos: BlockPos, effect: ParticleEffect },
    Sound { pos: BlockPos, effect: SoundEffect },
}

/// Block storage keyed by position; absent entries are air.
///
/// Uses BTreeMap throughout so that iteration (and therefore logs and
/// snapshots) is deterministic.
#[derive(Debug, Clone)]
pub struct MemoryWorld {
    blocks: BTreeMap<BlockPos, BlockKind>,
    chests: BTreeMap<BlockPos, ChestInventory>,
    labels: BTreeMap<BlockPos, LabelText>,
    dropped: Vec<DroppedStack>,
    effects: Vec<EffectRecord>,
    chest_capacity: usize,
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self::new(CHEST_SLOT_COUNT)
    }
}

impl MemoryWorld {
    /// Empty world whose chests hold `chest_capacity` stacks.
    pub fn new(chest_capacity: usize) -> Self {
        Self {
            blocks: BTreeMap::new(),
            chests: BTreeMap::new(),
            labels: BTreeMap::new(),
            dropped: Vec::new(),
            effects: Vec::new(),
            chest_capacity,
        }
    }

    /// Lay a solid floor at height `y` spanning `-extent..=extent` on X and Z.
    pub fn with_floor(mut self, y: i32, extent: i32) -> Self {
        for x in -extent..=extent {
            for z in -extent..=extent {
                self.blocks.insert(BlockPos::new(x, y, z), BlockKind::Solid);
            }
        }
        self
    }

    /// Place a plain block without any marker bookkeeping.
    pub fn fill_block(&mut self, pos: BlockPos, kind: BlockKind) {
        self.set_block(pos, kind, false);
    }

    /// Non-air blocks in position order.
    pub fn blocks(&self) -> &BTreeMap<BlockPos, BlockKind> {
        &self.blocks
    }

    pub fn chest_count(&self) -> usize {
        self.chests.len()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn dropped(&self) -> &[DroppedStack] {
        &self.dropped
    }

    pub fn effects(&self) -> &[EffectRecord] {
        &self.effects
    }

    /// Hand over the effects recorded so far and forget them.
    pub fn take_effects(&mut self) -> Vec<EffectRecord> {
        std::mem::take(&mut self.effects)
    }

    fn drop_marker(&mut self, pos: BlockPos, key: &str) {
        if let Ok(item) = RegistryKey::parse(key) {
            self.dropped.push(DroppedStack {
                pos,
                stack: ItemStack::new(item, 1),
            });
        }
    }
}

impl WorldAccess for MemoryWorld {
    fn block(&self, pos: BlockPos) -> BlockKind {
        self.blocks.get(&pos).copied().unwrap_or_default()
    }

    fn set_block(&mut self, pos: BlockPos, kind: BlockKind, drop_on_break: bool) {
        let previous = self.block(pos);
        trace!(%pos, ?previous, ?kind, drop_on_break, "set_block");

        match previous {
            BlockKind::ContainerMarker => {
                let contents = self
                    .chests
                    .remove(&pos)
                    .map(|mut chest| chest.drain())
                    .unwrap_or_default();
                if drop_on_break {
                    self.drop_marker(pos, "dc:chest");
                    self.drop_items(pos, contents);
                }
            }
            BlockKind::SignMarker => {
                self.labels.remove(&pos);
                if drop_on_break {
                    self.drop_marker(pos, "dc:sign");
                }
            }
            BlockKind::Empty | BlockKind::Solid | BlockKind::Passable => {}
        }

        match kind {
            BlockKind::Empty => {
                self.blocks.remove(&pos);
            }
            BlockKind::ContainerMarker => {
                self.blocks.insert(pos, kind);
                self.chests
                    .insert(pos, ChestInventory::with_capacity(self.chest_capacity));
            }
            BlockKind::SignMarker => {
                self.blocks.insert(pos, kind);
                self.labels.insert(pos, Default::default());
            }
            BlockKind::Solid | BlockKind::Passable => {
                self.blocks.insert(pos, kind);
            }
        }
    }

    fn container(&self, pos: BlockPos) -> Option<&ChestInventory> {
        self.chests.get(&pos)
    }

    fn container_mut(&mut self, pos: BlockPos) -> Option<&mut ChestInventory> {
        self.chests.get_mut(&pos)
    }

    fn set_label(&mut self, pos: BlockPos, lines: LabelText) -> bool {
        match self.labels.get_mut(&pos) {
            Some(label) => {
                *label = lines;
                true
            }
            None => false,
        }
    }

    fn label(&self, pos: BlockPos) -> Option<&LabelText> {
        self.labels.get(&pos)
    }

    fn spawn_particles(&mut self, pos: BlockPos, effect: &ParticleEffect) {
        self.effects.push(EffectRecord::Particles {
            pos,
            effect: *effect,
        });
    }

    fn play_sound(&mut self, pos: BlockPos, sound: &SoundEffect) {
        self.effects.push(EffectRecord::Sound {
            pos,
            effect: *sound,
        });
    }

    fn drop_items(&mut self, pos: BlockPos, items: Vec<ItemStack>) {
        self.dropped
            .extend(items.into_iter().map(|stack| DroppedStack { pos, stack }));
    }
}
