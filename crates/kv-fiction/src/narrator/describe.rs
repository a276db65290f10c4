//! Room descriptions and action replies.

use kv_core::{Container, Item, Room, RoomId, World};

use super::config::NarratorConfig;

/// Which description of a room to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Explicit look: ambient look text, contents, and goals.
    Look,
    /// Walking in: ambient entry text only.
    Enter,
}

/// Builds the text the player reads.
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    config: NarratorConfig,
}

impl Narrator {
    /// Create a narrator with the given config.
    pub fn new(config: NarratorConfig) -> Self {
        Self { config }
    }

    /// Describe a room.
    ///
    /// The result is a sentence of comma-joined clauses, then ". ", then the
    /// exits clause. Either half is left out when empty.
    pub fn describe(&self, world: &World, room: &Room, view: View) -> String {
        let mut clauses: Vec<String> = Vec::new();

        let ambient = match view {
            View::Look => room.text.on_look.as_deref(),
            View::Enter => room.text.on_enter.as_deref(),
        };
        if let Some(text) = ambient.filter(|t| !t.is_empty()) {
            clauses.push(text.to_string());
        }

        if view == View::Look {
            clauses.extend(self.contents_clause(room));
            clauses.extend(self.goals_clause(room));
        }

        let sentence = clauses.join(", ");
        let exits = self.exits_clause(world, room);

        [sentence, exits]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(". ")
    }

    fn contents_clause(&self, room: &Room) -> Option<String> {
        if room.containers.is_empty() {
            return None;
        }

        let listed: Vec<String> = room
            .containers
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| format!("{}: {}", self.container_label(room, c), item_names(&c.items)))
            .collect();

        if listed.is_empty() {
            room.text.empty_message.clone()
        } else {
            Some(listed.join(", "))
        }
    }

    fn container_label<'a>(&self, room: &'a Room, container: &'a Container) -> &'a str {
        if container.label.is_empty() {
            room.text.container_prefix.as_deref().unwrap_or_default()
        } else {
            &container.label
        }
    }

    /// Present whenever the room has goals, even once all are achieved: the
    /// prefix is then followed by an empty list.
    fn goals_clause(&self, room: &Room) -> Option<String> {
        if room.goals.is_empty() {
            return None;
        }
        let outstanding: Vec<&str> = room
            .goals
            .iter()
            .filter(|g| !g.achieved)
            .map(|g| g.title.as_str())
            .collect();

        let separator = format!(" {} ", self.config.goal_conjunction);
        let titles = outstanding.join(separator.as_str());
        Some(match room.text.goal_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{prefix} {titles}"),
            _ => titles,
        })
    }

    fn exits_clause(&self, world: &World, room: &Room) -> String {
        let names: Vec<&str> = room
            .exits
            .iter()
            .filter_map(|id| world.room(*id))
            .map(|exit| {
                if exit.text.area == room.text.area {
                    exit.name.as_str()
                } else {
                    exit.text.area.as_str()
                }
            })
            .collect();

        if names.is_empty() {
            String::new()
        } else {
            format!("{} - {}", self.config.exits_label, names.join(", "))
        }
    }

    /// Describe a room by ID. Returns `None` if the room does not exist.
    pub fn describe_id(&self, world: &World, id: RoomId, view: View) -> Option<String> {
        world.room(id).map(|room| self.describe(world, room, view))
    }

    /// Reply for putting something on.
    pub fn narrate_wear(&self, item: &Item) -> String {
        format!("вы надели: {}", item.name)
    }

    /// Reply for picking something up.
    pub fn narrate_take(&self, item: &Item) -> String {
        format!("предмет добавлен в инвентарь: {}", item.name)
    }
}

fn item_names(items: &[Item]) -> String {
    items
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
