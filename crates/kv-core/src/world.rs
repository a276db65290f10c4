use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{KvError, KvResult};
use crate::goal::GoalKind;
use crate::room::{Room, RoomId};

/// The central world model. Owns every room; exits refer to rooms by
/// [`RoomId`].
///
/// Deserializing rebuilds the name index and rejects duplicate names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "WorldData")]
pub struct World {
    rooms: Vec<Room>,
    start: Option<RoomId>,

    // Index
    #[serde(skip)]
    by_name: HashMap<String, RoomId>,
}

/// Serialized form of a [`World`], without the index.
#[derive(Deserialize)]
struct WorldData {
    rooms: Vec<Room>,
    start: Option<RoomId>,
}

impl TryFrom<WorldData> for World {
    type Error = KvError;

    fn try_from(data: WorldData) -> KvResult<Self> {
        let mut world = World::new();
        for room in data.rooms {
            world.add_room(room)?;
        }
        for room in &world.rooms {
            for exit in &room.exits {
                world.ensure(*exit)?;
            }
        }
        world.start = None;
        if let Some(start) = data.start {
            world.set_start(start)?;
        }
        Ok(world)
    }
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Room CRUD
    // -----------------------------------------------------------------------

    /// Add a room to the world. Returns the room's ID.
    ///
    /// The first room added becomes the start room unless
    /// [`set_start`](Self::set_start) says otherwise.
    pub fn add_room(&mut self, room: Room) -> KvResult<RoomId> {
        if self.by_name.contains_key(&room.name) {
            return Err(KvError::DuplicateRoom(room.name.clone()));
        }

        let id = RoomId(self.rooms.len());
        self.by_name.insert(room.name.clone(), id);
        self.rooms.push(room);
        if self.start.is_none() {
            self.start = Some(id);
        }
        Ok(id)
    }

    /// Get a reference to a room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Get a mutable reference to a room by ID.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Find a room by its exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        self.by_name.get(name).and_then(|id| self.room(*id))
    }

    /// Find a room ID by its exact name.
    pub fn find_id_by_name(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// Iterate over all rooms with their IDs, in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Iterate mutably over all rooms, in insertion order.
    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.iter_mut()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The room a new player starts in.
    pub fn start(&self) -> Option<RoomId> {
        self.start
    }

    /// Choose the start room.
    pub fn set_start(&mut self, id: RoomId) -> KvResult<()> {
        self.ensure(id)?;
        self.start = Some(id);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// Add a one-way exit from `from` to `to`.
    pub fn connect(&mut self, from: RoomId, to: RoomId) -> KvResult<()> {
        self.ensure(to)?;
        self.room_mut(from)
            .ok_or(KvError::RoomNotFound(from))?
            .exits
            .push(to);
        Ok(())
    }

    /// Add exits in both directions between `a` and `b`.
    pub fn connect_both(&mut self, a: RoomId, b: RoomId) -> KvResult<()> {
        self.connect(a, b)?;
        self.connect(b, a)
    }

    fn ensure(&self, id: RoomId) -> KvResult<()> {
        if id.0 < self.rooms.len() {
            Ok(())
        } else {
            Err(KvError::RoomNotFound(id))
        }
    }

    // -----------------------------------------------------------------------
    // Graph traversal
    // -----------------------------------------------------------------------

    /// Rooms reachable from `from` (including itself), breadth-first in
    /// exit order.
    pub fn reachable_from(&self, from: RoomId) -> Vec<RoomId> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([from]);

        while let Some(id) = queue.pop_front() {
            let Some(room) = self.room(id) else {
                continue;
            };
            if !seen.insert(id) {
                continue;
            }
            order.push(id);
            queue.extend(room.exits.iter().copied());
        }
        order
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Check the structural invariants of the world: there is a start room,
    /// every room can be reached from it, and every goal refers to things
    /// that exist.
    pub fn validate(&self) -> KvResult<()> {
        let start = self.start.ok_or(KvError::NoStartRoom)?;

        let reachable: HashSet<RoomId> = self.reachable_from(start).into_iter().collect();
        if let Some((_, room)) = self.rooms().find(|(id, _)| !reachable.contains(id)) {
            return Err(KvError::Unreachable(room.name.clone()));
        }

        for (_, room) in self.rooms() {
            for (index, goal) in room.goals.iter().enumerate() {
                let GoalKind::ReachRoom { room: target, after } = &goal.kind else {
                    continue;
                };
                if self.find_id_by_name(target).is_none() {
                    return Err(KvError::Validation(format!(
                        "goal \"{}\" in \"{}\" targets unknown room \"{target}\"",
                        goal.title, room.name
                    )));
                }
                if after.is_some_and(|prev| prev >= index) {
                    return Err(KvError::Validation(format!(
                        "goal \"{}\" in \"{}\" must depend on an earlier goal",
                        goal.title, room.name
                    )));
                }
            }
        }
        Ok(())
    }
}
