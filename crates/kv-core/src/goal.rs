use serde::{Deserialize, Serialize};

/// The condition a goal waits for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GoalKind {
    /// Every named item is in the inventory at the same time.
    CollectItems {
        /// Item names that must all be carried.
        items: Vec<String>,
    },
    /// The player stands in the named room.
    ReachRoom {
        /// Name of the room to reach.
        room: String,
        /// Index of a goal of the same room that must be achieved first.
        after: Option<usize>,
    },
}

/// A scripted objective owned by a room.
///
/// Once achieved, a goal stays achieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Title shown in the room description while outstanding.
    pub title: String,
    /// Whether the goal has been met.
    pub achieved: bool,
    /// The condition to check.
    pub kind: GoalKind,
}

impl Goal {
    /// Create an outstanding goal.
    pub fn new(title: impl Into<String>, kind: GoalKind) -> Self {
        Self {
            title: title.into(),
            achieved: false,
            kind,
        }
    }

    /// Goal that asks for several items to be carried at once.
    pub fn collect<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            title,
            GoalKind::CollectItems {
                items: items.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Goal that asks the player to reach a room.
    pub fn reach(title: impl Into<String>, room: impl Into<String>) -> Self {
        Self::new(
            title,
            GoalKind::ReachRoom {
                room: room.into(),
                after: None,
            },
        )
    }

    /// Make a reach goal depend on an earlier goal of the same room.
    /// Has no effect on other goal kinds.
    pub fn after(mut self, index: usize) -> Self {
        if let GoalKind::ReachRoom { after, .. } = &mut self.kind {
            *after = Some(index);
        }
        self
    }

    /// Mark the goal as achieved. Returns `true` if this call changed it.
    pub fn achieve(&mut self) -> bool {
        let changed = !self.achieved;
        self.achieved = true;
        changed
    }
}
