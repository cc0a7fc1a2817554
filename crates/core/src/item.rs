//! Item stacks carried by actors and stored in chests.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry::RegistryKey;

/// An item stack in inventory.
///
/// Death-chest logic moves stacks around as indivisible units; only
/// [`ItemStack::is_empty`] is consulted to reject invalid entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item identifier.
    pub item: RegistryKey,
    /// Quantity in stack.
    pub count: u32,
}

impl ItemStack {
    /// Create a new item stack.
    pub fn new(item: RegistryKey, count: u32) -> Self {
        Self { item, count }
    }

    /// A stack with no items in it. Such entries are skipped on transfer.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.item, self.count)
    }
}
