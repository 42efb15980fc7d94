use horde_core::steering::is_nearby;
use horde_core::{Vec2, WorldView};

/// Pack rule for ranged stalkers: engage once any *other* AI agent is within
/// `engage_radius` of the player.
///
/// Scans `agents` in order and stops at the first hit. Agents without a
/// `Motion` are ignored.
pub fn pack_engaged<W: WorldView>(
    world: &W,
    agents: &[W::Agent],
    agent: W::Agent,
    player_position: Vec2,
    engage_radius: f32,
) -> bool {
    agents
        .iter()
        .copied()
        .filter(|&other| other != agent)
        .filter_map(|other| world.motion(other))
        .any(|m| is_nearby(player_position, m.position, engage_radius))
}
