use deathchest_core::ItemStack;
use serde::{Deserialize, Serialize};

/// Number of slots in a single chest inventory (3 rows × 9 columns).
pub const CHEST_SLOT_COUNT: usize = 27;

/// Inventory of a chest block entity.
///
/// Slots keep their positions when items are taken, so a slot index handed
/// out to an inventory UI stays valid until that slot is refilled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestInventory {
    slots: Vec<Option<ItemStack>>,
}

impl Default for ChestInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChestInventory {
    /// Empty chest with [`CHEST_SLOT_COUNT`] slots.
    pub fn new() -> Self {
        Self::with_capacity(CHEST_SLOT_COUNT)
    }

    /// Chest with `slots` slots. Zero is allowed and produces a chest that
    /// accepts nothing.
    pub fn with_capacity(slots: usize) -> Self {
        Self {
            slots: vec![None; slots],
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// No slot holds a stack.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of slots without a stack.
    pub fn free_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Put `stack` into the first free slot, handing it back when the chest is full.
    pub fn insert(&mut self, stack: ItemStack) -> Result<usize, ItemStack> {
        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(stack);
                Ok(index)
            }
            None => Err(stack),
        }
    }

    /// Remove and return the stack in `slot`, if any.
    pub fn take(&mut self, slot: usize) -> Option<ItemStack> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Remove every stack, in slot order.
    pub fn drain(&mut self) -> Vec<ItemStack> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }

    /// Occupied stacks in slot order.
    pub fn items(&self) -> impl Iterator<Item = &ItemStack> + '_ {
        self.slots.iter().flatten()
    }
}
