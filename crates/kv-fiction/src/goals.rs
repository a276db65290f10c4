//! Goal evaluation.
//!
//! Every goal of every room is checked against the player on each command
//! cycle, wherever the player happens to be. Goals of one room are checked in
//! declaration order, so a goal that depends on an earlier one sees the flag
//! that was set a moment ago.

use kv_core::{Goal, GoalKind, World};
use tracing::info;

use crate::player::PlayerState;

/// Check all goals and mark the satisfied ones achieved.
///
/// Returns the titles of goals achieved by this call. Achieved goals are
/// never reset.
pub fn evaluate_goals(world: &mut World, player: &PlayerState) -> Vec<String> {
    let here = world
        .room(player.location)
        .map(|r| r.name.clone())
        .unwrap_or_default();

    let mut newly_achieved = Vec::new();
    for room in world.rooms_mut() {
        for index in 0..room.goals.len() {
            if room.goals[index].achieved
                || !is_satisfied(&room.goals, index, &here, player)
            {
                continue;
            }
            let goal = &mut room.goals[index];
            if goal.achieve() {
                info!(room = %room.name, goal = %goal.title, "goal achieved");
                newly_achieved.push(goal.title.clone());
            }
        }
    }
    newly_achieved
}

fn is_satisfied(goals: &[Goal], index: usize, here: &str, player: &PlayerState) -> bool {
    match &goals[index].kind {
        GoalKind::CollectItems { items } => {
            items.iter().all(|name| player.inventory.has_item(name))
        }
        GoalKind::ReachRoom { room, after } => {
            let ready = after.is_none_or(|prev| goals.get(prev).is_some_and(|g| g.achieved));
            ready && room == here
        }
    }
}
