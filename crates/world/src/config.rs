use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chest::CHEST_SLOT_COUNT;
use crate::world::LabelText;

/// Search radius used when none is configured.
pub const DEFAULT_SEARCH_RADIUS: i32 = 1;

/// Death-chest settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChestConfig {
    /// Half-width of the cube scanned around the death position.
    pub search_radius: i32,
    /// Slots per placed chest.
    pub chest_capacity: usize,
    pub label: LabelConfig,
    pub messages: MessageTemplates,
}

/// Sign placed above each chest.
///
/// Lines accept `{owner}`, `{x}`, `{y}` and `{z}` placeholders.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelConfig {
    pub enabled: bool,
    pub lines: LabelText,
}

/// Chat templates shown to the owner. Same placeholders as [`LabelConfig`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MessageTemplates {
    pub no_site_found: String,
    pub container_created: String,
    pub container_removed: String,
}

impl Default for ChestConfig {
    fn default() -> Self {
        Self {
            search_radius: DEFAULT_SEARCH_RADIUS,
            chest_capacity: CHEST_SLOT_COUNT,
            label: LabelConfig::default(),
            messages: MessageTemplates::default(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lines: [
                "Here lies".to_string(),
                "{owner}'s".to_string(),
                "belongings".to_string(),
            ],
        }
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            no_site_found: "[DeathChest] Could not create a chest. Items dropped normally."
                .to_string(),
            container_created: "[DeathChest] Your items are safe in a chest at: {x}, {y}, {z}"
                .to_string(),
            container_removed: "[DeathChest] Chest removed as it is now empty.".to_string(),
        }
    }
}

impl ChestConfig {
    /// Replace out-of-range values, logging each correction.
    ///
    /// Negative radii become 0. Large radii are kept; the scan visits
    /// `(2r + 1)^3` blocks.
    pub fn sanitized(mut self) -> Self {
        if self.search_radius < 0 {
            warn!(
                configured = self.search_radius,
                using = 0,
                "search_radius must not be negative"
            );
            self.search_radius = 0;
        }
        if self.chest_capacity == 0 {
            warn!(
                using = CHEST_SLOT_COUNT,
                "chest_capacity must be positive"
            );
            self.chest_capacity = CHEST_SLOT_COUNT;
        }
        self
    }
}
