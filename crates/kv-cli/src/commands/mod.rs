pub mod play;
pub mod rooms;
pub mod world;

use kv_core::World;

/// Build the shipped world and check it before use.
fn load_world() -> Result<World, String> {
    let world = kv_core::scenario::apartment().map_err(|e| format!("cannot build world: {e}"))?;
    world
        .validate()
        .map_err(|e| format!("invalid world: {e}"))?;
    Ok(world)
}
