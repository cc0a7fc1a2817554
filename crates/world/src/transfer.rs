use deathchest_core::ItemStack;
use tracing::trace;

use crate::chest::ChestInventory;

/// Move `items` into `inventory` in order, one stack per slot.
///
/// `None` entries and empty stacks are skipped. Stacks that find no free slot
/// are returned in their original relative order; a full chest is an
/// ordinary outcome, not an error.
pub fn fill<I>(inventory: &mut ChestInventory, items: I) -> Vec<ItemStack>
where
    I: IntoIterator<Item = Option<ItemStack>>,
{
    let mut unplaced = Vec::new();
    for stack in items.into_iter().flatten() {
        if stack.is_empty() {
            trace!("skipping empty stack");
            continue;
        }
        if let Err(stack) = inventory.insert(stack) {
            unplaced.push(stack);
        }
    }
    unplaced
}
