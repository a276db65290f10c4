use std::fmt;

use serde::{Deserialize, Serialize};

use crate::goal::Goal;
use crate::item::{Item, ItemKind};

/// Index of a room inside its [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The message templates attached to a room.
///
/// Every field except `area` is optional: rooms only carry the text that
/// makes sense for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomText {
    /// Ambient text shown when the player walks in.
    pub on_enter: Option<String>,
    /// Ambient text shown when the player looks around.
    pub on_look: Option<String>,
    /// Area tag shared by rooms of one logical zone.
    pub area: String,
    /// Fallback label for containers that have none.
    pub container_prefix: Option<String>,
    /// Lead-in for the list of outstanding goals.
    pub goal_prefix: Option<String>,
    /// Shown instead of contents when every container is empty.
    pub empty_message: Option<String>,
    /// What physically blocks the way in (e.g. a door).
    pub locker: Option<String>,
    /// Item kind that unlocks this room.
    pub key_kind: Option<ItemKind>,
    /// Reply when someone tries to enter while locked.
    pub locked_message: Option<String>,
    /// Reply when the room gets unlocked.
    pub unlocked_message: Option<String>,
}

impl RoomText {
    /// Create room text for the given area.
    pub fn new(area: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            ..Self::default()
        }
    }

    /// Set the text shown on entry.
    pub fn with_enter(mut self, text: impl Into<String>) -> Self {
        self.on_enter = Some(text.into());
        self
    }

    /// Set the text shown on look.
    pub fn with_look(mut self, text: impl Into<String>) -> Self {
        self.on_look = Some(text.into());
        self
    }

    /// Set the fallback container label.
    pub fn with_container_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.container_prefix = Some(prefix.into());
        self
    }

    /// Set the goal lead-in.
    pub fn with_goal_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.goal_prefix = Some(prefix.into());
        self
    }

    /// Set the message for a room whose containers are all empty.
    pub fn with_empty_message(mut self, text: impl Into<String>) -> Self {
        self.empty_message = Some(text.into());
        self
    }

    /// Describe the lock on this room: what blocks it, which item kind opens
    /// it, and the replies for the locked and unlocked states.
    pub fn with_lock(
        mut self,
        locker: impl Into<String>,
        key_kind: ItemKind,
        locked: impl Into<String>,
        unlocked: impl Into<String>,
    ) -> Self {
        self.locker = Some(locker.into());
        self.key_kind = Some(key_kind);
        self.locked_message = Some(locked.into());
        self.unlocked_message = Some(unlocked.into());
        self
    }
}

/// A labelled group of items inside a room, such as "на столе".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Display prefix for the contents.
    pub label: String,
    /// Items in insertion order.
    pub items: Vec<Item>,
}

impl Container {
    /// Create an empty container.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
        }
    }

    /// Add an item to the end of the container.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Whether the container holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove and return the first item matching the predicate.
    pub fn take_first(&mut self, pred: impl Fn(&Item) -> bool) -> Option<Item> {
        let pos = self.items.iter().position(pred)?;
        Some(self.items.remove(pos))
    }
}

/// A node of the location graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name.
    pub name: String,
    /// Message templates.
    pub text: RoomText,
    /// Containers in display order.
    pub containers: Vec<Container>,
    /// Rooms reachable from here, in display and lookup order.
    pub exits: Vec<RoomId>,
    /// Whether entering this room is refused. The lock belongs to the room,
    /// so it applies to every exit that leads here.
    pub locked: bool,
    /// Goals owned by this room, in evaluation order.
    pub goals: Vec<Goal>,
}

impl Room {
    /// Create an unlocked room with no contents or exits.
    pub fn new(name: impl Into<String>, text: RoomText) -> Self {
        Self {
            name: name.into(),
            text,
            containers: Vec::new(),
            exits: Vec::new(),
            locked: false,
            goals: Vec::new(),
        }
    }

    /// Add a container.
    pub fn with_container(mut self, container: Container) -> Self {
        self.containers.push(container);
        self
    }

    /// Add a goal.
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    /// Mark the room as locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Remove the first item across all containers matching the predicate.
    pub fn take_item(&mut self, pred: impl Fn(&Item) -> bool) -> Option<Item> {
        self.containers
            .iter_mut()
            .find_map(|container| container.take_first(&pred))
    }
}
