//! Messages crossing the death-chest boundary.
//!
//! Hosts translate their own callbacks into [`HostEvent`]s; presentation
//! layers consume [`ChestNotification`]s through an [`EffectNotifier`].

use deathchest_core::{BlockPos, ItemStack};
use serde::{Deserialize, Serialize};

/// Inbound events from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    ActorDied {
        actor_id: String,
        position: BlockPos,
        /// Drops as the host reported them; `None` marks a vacated slot.
        dropped_items: Vec<Option<ItemStack>>,
    },
    ContainerOpened {
        position: BlockPos,
    },
    /// `is_empty_now` is the host's view at close time. The live inventory
    /// is consulted regardless.
    ContainerClosed {
        position: BlockPos,
        is_empty_now: bool,
    },
}

/// Outbound notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChestNotification {
    ContainerCreated {
        position: BlockPos,
        owner_name: String,
    },
    ContainerDiscovered {
        position: BlockPos,
    },
    ContainerReclaimed {
        position: BlockPos,
    },
    PlacementFailed {
        owner_name: String,
        origin: BlockPos,
        original_items: Vec<ItemStack>,
    },
}

impl ChestNotification {
    /// Short label used in logs and event records.
    pub fn kind(&self) -> &'static str {
        match self {
            ChestNotification::ContainerCreated { .. } => "ContainerCreated",
            ChestNotification::ContainerDiscovered { .. } => "ContainerDiscovered",
            ChestNotification::ContainerReclaimed { .. } => "ContainerReclaimed",
            ChestNotification::PlacementFailed { .. } => "PlacementFailed",
        }
    }
}

/// Receiver of outbound notifications.
pub trait EffectNotifier {
    fn notify(&mut self, notification: ChestNotification);
}

impl EffectNotifier for Vec<ChestNotification> {
    fn notify(&mut self, notification: ChestNotification) {
        self.push(notification);
    }
}

/// Queue of notifications awaiting presentation.
#[derive(Debug, Default)]
pub struct Outbox {
    pending: Vec<ChestNotification>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every queued notification in emission order.
    pub fn drain(&mut self) -> Vec<ChestNotification> {
        std::mem::take(&mut self.pending)
    }
}

impl EffectNotifier for Outbox {
    fn notify(&mut self, notification: ChestNotification) {
        self.pending.push(notification);
    }
}
