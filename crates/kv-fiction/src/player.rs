//! Player state management.

use kv_core::{Item, RoomId};

/// What the player carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Whether the player has put on something to carry items in.
    pub worn: bool,
    /// Carried items in pickup order.
    pub items: Vec<Item>,
}

impl Inventory {
    /// Check if an item with this name is carried.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    /// Find the first carried item with this name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Add an item to the end of the inventory.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Number of carried items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The player's current state in the fiction session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Current location.
    pub location: RoomId,
    /// Items and carrying capacity.
    pub inventory: Inventory,
}

impl PlayerState {
    /// Create a new player with empty hands at the given location.
    pub fn new(location: RoomId) -> Self {
        Self {
            location,
            inventory: Inventory::default(),
        }
    }

    /// Whether the player can put items into the inventory.
    pub fn can_carry(&self) -> bool {
        self.inventory.worn
    }

    /// Mark the player as wearing something to carry items in. Wearing a
    /// second one changes nothing.
    pub fn put_on(&mut self) {
        self.inventory.worn = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_state_new() {
        let state = PlayerState::new(RoomId(2));
        assert_eq!(state.location, RoomId(2));
        assert!(state.inventory.is_empty());
        assert!(!state.can_carry());
    }

    #[test]
    fn put_on_is_a_flag_not_a_toggle() {
        let mut state = PlayerState::new(RoomId(0));
        state.put_on();
        state.put_on();
        assert!(state.can_carry());
    }

    #[test]
    fn inventory_keeps_duplicates_in_order() {
        let mut inv = Inventory::default();
        inv.add_item(Item::generic("чай"));
        inv.add_item(Item::key("ключи"));
        inv.add_item(Item::generic("чай"));

        assert_eq!(inv.len(), 3);
        assert!(inv.has_item("ключи"));
        assert!(!inv.has_item("конспекты"));
        assert_eq!(inv.find("ключи"), Some(&Item::key("ключи")));
    }
}
