//! Print a summary of every room.

use colored::Colorize;
use kv_core::{Goal, GoalKind, Room, World};

pub fn run() -> Result<(), String> {
    let world = super::load_world()?;
    for (id, room) in world.rooms() {
        print_room(&world, room, world.start() == Some(id));
    }
    Ok(())
}

fn print_room(world: &World, room: &Room, is_start: bool) {
    let mut header = format!("  {} [{}]", room.name.bold(), room.text.area.dimmed());
    if is_start {
        header.push_str(&format!(" {}", "start".green()));
    }
    if room.locked {
        let locker = room.text.locker.as_deref().unwrap_or("lock");
        header.push_str(&format!(" {}", format!("locked: {locker}").red()));
    }
    println!("{header}");

    let exits: Vec<&str> = room
        .exits
        .iter()
        .filter_map(|id| world.room(*id))
        .map(|r| r.name.as_str())
        .collect();
    if !exits.is_empty() {
        println!("    exits:      {}", exits.join(", "));
    }

    for container in &room.containers {
        let items: Vec<String> = container
            .items
            .iter()
            .map(|i| format!("{} ({})", i.name, i.kind))
            .collect();
        println!("    {}: {}", container.label, items.join(", "));
    }

    for goal in &room.goals {
        println!("    goal:       {}", describe_goal(goal));
    }
    println!();
}

fn describe_goal(goal: &Goal) -> String {
    let condition = match &goal.kind {
        GoalKind::CollectItems { items } => format!("carry {}", items.join(" + ")),
        GoalKind::ReachRoom { room, after: None } => format!("reach {room}"),
        GoalKind::ReachRoom {
            room,
            after: Some(prev),
        } => format!("reach {room} after goal {}", prev + 1),
    };
    format!("{} ({})", goal.title, condition.dimmed())
}
