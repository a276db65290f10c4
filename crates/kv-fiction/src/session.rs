//! Interactive fiction session management.

use kv_core::{Item, ItemKind, Room, World};
use tracing::{debug, info, warn};

use crate::error::{FictionError, FictionResult};
use crate::goals::evaluate_goals;
use crate::narrator::{Narrator, View};
use crate::parser::{Command, Tokenizer, parse_command};
use crate::player::PlayerState;

/// An interactive fiction session: one world, one player.
pub struct FictionSession {
    /// The world being explored.
    world: World,
    /// The player's current state.
    player: PlayerState,
    /// Builds room descriptions and replies.
    narrator: Narrator,
    /// How input lines are split.
    tokenizer: Tokenizer,
}

impl FictionSession {
    /// Create a new fiction session with the player in the world's start
    /// room.
    pub fn new(world: World) -> FictionResult<Self> {
        world.validate()?;
        let start = world.start().ok_or(kv_core::KvError::NoStartRoom)?;

        Ok(Self {
            world,
            player: PlayerState::new(start),
            narrator: Narrator::default(),
            tokenizer: Tokenizer::default(),
        })
    }

    /// Use a different tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Get the current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Name of the room the player is in.
    pub fn location_name(&self) -> &str {
        self.world
            .room(self.player.location)
            .map(|r| r.name.as_str())
            .unwrap_or_default()
    }

    /// Process a player command and return a response.
    ///
    /// Goals are checked before the command runs, so the effect of a command
    /// on goals shows up on the following cycle.
    pub fn process(&mut self, input: &str) -> FictionResult<String> {
        evaluate_goals(&mut self.world, &self.player);
        let command = parse_command(input, self.tokenizer)?;
        debug!(?command, location = self.location_name(), "dispatching");
        self.execute(command)
    }

    /// Process a player command and always return the text to show, with
    /// failures rendered as their message.
    pub fn respond(&mut self, input: &str) -> String {
        match self.process(input) {
            Ok(text) => text,
            Err(err) if err.is_gameplay() => {
                debug!(%err, "command refused");
                err.to_string()
            }
            Err(err) => {
                warn!(%err, input, "command failed");
                err.to_string()
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> FictionResult<String> {
        match command {
            Command::Look => self.do_look(),
            Command::Go { destination } => self.do_go(&destination),
            Command::Wear { item } => self.do_wear(&item),
            Command::Take { item } => self.do_take(&item),
            Command::Apply { item, .. } => self.do_apply(&item),
            Command::Unknown { input } => Err(FictionError::UnknownCommand(input)),
        }
    }

    fn current(&self) -> FictionResult<&Room> {
        self.world
            .room(self.player.location)
            .ok_or(FictionError::LocationNotFound(self.player.location))
    }

    fn current_mut(&mut self) -> FictionResult<&mut Room> {
        let id = self.player.location;
        self.world
            .room_mut(id)
            .ok_or(FictionError::LocationNotFound(id))
    }

    fn do_look(&self) -> FictionResult<String> {
        let room = self.current()?;
        Ok(self.narrator.describe(&self.world, room, View::Look))
    }

    fn do_go(&mut self, destination: &str) -> FictionResult<String> {
        let room = self.current()?;

        // A locked exit stops the scan as soon as it is reached, even when
        // the destination is listed further down.
        let mut target = None;
        for id in &room.exits {
            let Some(exit) = self.world.room(*id) else {
                continue;
            };
            if exit.locked {
                return Err(FictionError::Locked(
                    exit.text.locked_message.clone().unwrap_or_default(),
                ));
            }
            if exit.name == destination || exit.text.area == destination {
                target = Some(*id);
                break;
            }
        }

        let id = target.ok_or_else(|| FictionError::NoPath(destination.to_string()))?;
        debug!(from = self.location_name(), to = %id, "moving");
        self.player.location = id;
        self.narrator
            .describe_id(&self.world, id, View::Enter)
            .ok_or(FictionError::LocationNotFound(id))
    }

    fn do_wear(&mut self, name: &str) -> FictionResult<String> {
        let item = self
            .current_mut()?
            .take_item(|i| i.kind == ItemKind::Wearable && i.name == name)
            .ok_or_else(|| FictionError::NothingToWear(name.to_string()))?;

        self.player.put_on();
        info!(item = %item.name, "worn");
        Ok(self.narrator.narrate_wear(&item))
    }

    fn do_take(&mut self, name: &str) -> FictionResult<String> {
        if !self.player.can_carry() {
            return Err(FictionError::NowhereToPut);
        }

        let item = self
            .current_mut()?
            .take_item(|i| i.kind.is_portable() && i.name == name)
            .ok_or_else(|| FictionError::NoSuchThing(name.to_string()))?;

        let reply = self.narrator.narrate_take(&item);
        self.player.inventory.add_item(item);
        Ok(reply)
    }

    fn do_apply(&mut self, name: &str) -> FictionResult<String> {
        let item: Item = self
            .player
            .inventory
            .find(name)
            .cloned()
            .ok_or_else(|| FictionError::NotInInventory(name.to_string()))?;

        let exits = self.current()?.exits.clone();
        let lock = exits.into_iter().find_map(|id| {
            self.world
                .room(id)
                .is_some_and(|r| r.locked && r.text.key_kind == Some(item.kind))
                .then_some(id)
        });
        let Some(id) = lock else {
            return Err(FictionError::NothingToApply(item.name));
        };

        let room = self
            .world
            .room_mut(id)
            .ok_or(FictionError::LocationNotFound(id))?;
        room.locked = false;
        info!(room = %room.name, locker = ?room.text.locker, item = %item.name, "unlocked");
        Ok(room.text.unlocked_message.clone().unwrap_or_default())
    }
}
