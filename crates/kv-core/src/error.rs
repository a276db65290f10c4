use crate::room::RoomId;

/// Alias for `Result<T, KvError>`.
pub type KvResult<T> = Result<T, KvError>;

/// Errors that can occur when building or checking a world.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    /// The requested room ID does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// The world has no rooms, so there is nowhere to start.
    #[error("world has no start room")]
    NoStartRoom,

    /// A room cannot be reached from the start room.
    #[error("room \"{0}\" is unreachable from the start room")]
    Unreachable(String),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
