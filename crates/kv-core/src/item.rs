use std::fmt;

use serde::{Deserialize, Serialize};

/// What an item can be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// An ordinary object that can be carried.
    Generic,
    /// An object that unlocks rooms asking for this kind.
    Key,
    /// Something the player puts on to be able to carry things.
    Wearable,
}

impl ItemKind {
    /// Whether an item of this kind can be put into the inventory.
    pub fn is_portable(self) -> bool {
        matches!(self, Self::Generic | Self::Key)
    }

    /// Get the display name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Key => "key",
            Self::Wearable => "wearable",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An item lying in a container or carried by the player.
///
/// Items have no identity beyond their name and kind: two items with equal
/// names and kinds are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also what the player types to refer to it.
    pub name: String,
    /// The item's kind.
    pub kind: ItemKind,
}

impl Item {
    /// Create an item of the given kind.
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a generic item.
    pub fn generic(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Generic)
    }

    /// Create a key item.
    pub fn key(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Key)
    }

    /// Create a wearable item.
    pub fn wearable(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Wearable)
    }
}
