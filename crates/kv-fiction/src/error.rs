//! Error types for the fiction engine.
//!
//! The `Display` text of every gameplay variant is the reply the player sees,
//! so a failed command is reported by printing its error.

use kv_core::KvError;
use thiserror::Error;

use crate::parser::Verb;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during interactive fiction.
#[derive(Debug, Error)]
pub enum FictionError {
    /// A command got the wrong number of operands.
    #[error("неверное количество аргументов для команды '{}'", .0.keyword())]
    WrongArity(Verb),

    /// The action keyword is not known.
    #[error("неизвестная команда")]
    UnknownCommand(String),

    /// No exit leads to the requested destination.
    #[error("нет пути в {0}")]
    NoPath(String),

    /// The way is blocked by a locked room; carries the room's locked message.
    #[error("{0}")]
    Locked(String),

    /// No wearable item with that name is here.
    #[error("нечего надеть")]
    NothingToWear(String),

    /// The player has nothing to carry items in.
    #[error("некуда класть")]
    NowhereToPut,

    /// No portable item with that name is here.
    #[error("нет такого")]
    NoSuchThing(String),

    /// The item is carried but nothing nearby accepts it.
    #[error("не к чему применить")]
    NothingToApply(String),

    /// The item is not in the inventory.
    #[error("нет предмета в инвентаре - {0}")]
    NotInInventory(String),

    /// The player's location is not part of the world.
    #[error("location not found: {0}")]
    LocationNotFound(kv_core::RoomId),

    /// World model error.
    #[error("world error: {0}")]
    World(#[from] KvError),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl FictionError {
    /// Whether the error is an in-game reply rather than a failure of the
    /// engine itself.
    pub fn is_gameplay(&self) -> bool {
        !matches!(
            self,
            Self::LocationNotFound(_) | Self::World(_) | Self::Io(_)
        )
    }
}
