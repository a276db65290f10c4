//! Core types for Kvartira: rooms, items, goals, and the world model.
//!
//! This crate holds the static side of the game: every room, container, item
//! and goal is created once when the world is built and then lives for the
//! whole session. It knows nothing about commands or text output; see
//! `kv-fiction` for the interpreter that drives it.

/// Error types used throughout the crate.
pub mod error;
/// Scripted goals owned by rooms.
pub mod goal;
/// Items and their kinds.
pub mod item;
/// Rooms, room text, and containers.
pub mod room;
/// The shipped apartment scenario.
pub mod scenario;
/// The central world model that owns every room.
pub mod world;

/// Re-export error types.
pub use error::{KvError, KvResult};
/// Re-export goal types.
pub use goal::{Goal, GoalKind};
/// Re-export item types.
pub use item::{Item, ItemKind};
/// Re-export room types.
pub use room::{Container, Room, RoomId, RoomText};
/// Re-export the world model.
pub use world::World;
