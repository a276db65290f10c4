//! The shipped "morning before university" apartment.
//!
//! Four rooms: the kitchen (start), the corridor, the player's room, and the
//! street behind a locked front door. The kitchen owns both goals: pack the
//! bag, then get outside.

use crate::error::KvResult;
use crate::goal::Goal;
use crate::item::{Item, ItemKind};
use crate::room::{Container, Room, RoomText};
use crate::world::World;

/// Kitchen room name.
pub const KITCHEN: &str = "кухня";
/// Corridor room name.
pub const CORRIDOR: &str = "коридор";
/// The player's room.
pub const BEDROOM: &str = "комната";
/// The street outside the front door.
pub const STREET: &str = "улица";

/// Area tag of the rooms inside the apartment.
pub const HOME_AREA: &str = "домой";

/// Build the apartment world, ready to play.
pub fn apartment() -> KvResult<World> {
    let mut world = World::new();

    let kitchen = world.add_room(
        Room::new(
            KITCHEN,
            RoomText::new(HOME_AREA)
                .with_look("ты находишься на кухне")
                .with_enter("кухня, ничего интересного")
                .with_container_prefix("на столе")
                .with_goal_prefix("надо"),
        )
        .with_container(Container::new("на столе").with_item(Item::generic("чай")))
        .with_goal(Goal::collect("собрать рюкзак", ["ключи", "конспекты"]))
        .with_goal(Goal::reach("идти в универ", STREET).after(0)),
    )?;

    let corridor = world.add_room(Room::new(
        CORRIDOR,
        RoomText::new(HOME_AREA).with_enter("ничего интересного"),
    ))?;

    let bedroom = world.add_room(
        Room::new(
            BEDROOM,
            RoomText::new(HOME_AREA)
                .with_enter("ты в своей комнате")
                .with_empty_message("пустая комната"),
        )
        .with_container(
            Container::new("на столе")
                .with_item(Item::key("ключи"))
                .with_item(Item::generic("конспекты")),
        )
        .with_container(Container::new("на стуле").with_item(Item::wearable("рюкзак"))),
    )?;

    let street = world.add_room(
        Room::new(
            STREET,
            RoomText::new("улица")
                .with_enter("на улице весна")
                .with_lock("дверь", ItemKind::Key, "дверь закрыта", "дверь открыта"),
        )
        .locked(),
    )?;

    world.connect_both(kitchen, corridor)?;
    world.connect_both(corridor, bedroom)?;
    world.connect_both(corridor, street)?;
    world.set_start(kitchen)?;

    Ok(world)
}
