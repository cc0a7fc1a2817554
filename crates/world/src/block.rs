use serde::{Deserialize, Serialize};

/// What occupies a block position, as far as death chests are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Air.
    #[default]
    Empty,
    /// Any full block that can be stood on.
    Solid,
    /// Occupied but not solid (fluids, plants, torches).
    Passable,
    /// A chest block holding an inventory.
    ContainerMarker,
    /// A sign block carrying label text.
    SignMarker,
}

impl BlockKind {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == BlockKind::Empty
    }

    /// Whether the block provides footing for a block placed on top of it.
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, BlockKind::Solid | BlockKind::ContainerMarker)
    }

    /// Parse the lowercase name used in scripts and config files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "empty" | "air" => Some(BlockKind::Empty),
            "solid" | "stone" => Some(BlockKind::Solid),
            "passable" | "water" | "torch" => Some(BlockKind::Passable),
            "chest" | "container" => Some(BlockKind::ContainerMarker),
            "sign" => Some(BlockKind::SignMarker),
            _ => None,
        }
    }
}
