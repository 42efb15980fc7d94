//! Attack lifecycle: Idle → Requesting → Cooling down → Idle.
//!
//! Tree turns raise requests; [`consume_requests`] turns a request into a
//! strike plus a cooldown; [`advance_cooldowns`] ends the attack animation and
//! finally retires the cooldown.

use horde_core::{AgentId, Cooldown, StrikeConfig, StrikeRequest, Vec2, WorldMut};
use horde_tools::{tags, TraceEvent, TraceSink};

/// Outcome counts of one [`advance_cooldowns`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CooldownTick {
    pub recovered: u32,
    pub ready: u32,
}

/// Age every cooldown by `elapsed_ms`.
///
/// An agent whose attack animation is over stops attacking and shows its
/// movement animation again; an elapsed cooldown is removed. Dead agents are
/// left untouched, so their cooldown resumes on revival.
pub fn advance_cooldowns<W: WorldMut>(
    world: &mut W,
    agents: &[W::Agent],
    elapsed_ms: f32,
    tick: u64,
    sink: &mut dyn TraceSink,
) -> CooldownTick {
    let mut out = CooldownTick::default();
    let elapsed_ms = elapsed_ms.max(0.0);

    for &agent in agents {
        if world.is_dead(agent) {
            continue;
        }
        let Some(cooldown) = world.cooldown_mut(agent) else {
            continue;
        };
        cooldown.remaining_ms -= elapsed_ms;
        cooldown.animation_ms = (cooldown.animation_ms - elapsed_ms).max(0.0);
        let cooldown = *cooldown;

        let attacking = world.motion(agent).is_some_and(|m| m.attacking);
        if attacking && (cooldown.animation_done() || cooldown.is_elapsed()) {
            restore_movement(world, agent);
            out.recovered += 1;
            sink.emit(TraceEvent::new(tick, tags::ATTACK_RECOVER).with_agent(agent.stable_id()));
        }

        if cooldown.is_elapsed() {
            world.remove_cooldown(agent);
            out.ready += 1;
            sink.emit(TraceEvent::new(tick, tags::ATTACK_READY).with_agent(agent.stable_id()));
            tracing::trace!(agent = agent.stable_id(), "cooldown elapsed");
        }
    }
    out
}

/// Turn pending requests into strikes. Returns the number of strikes spawned.
///
/// Nothing happens while the player is dead; dead agents keep their request
/// untouched.
pub fn consume_requests<W: WorldMut>(
    world: &mut W,
    agents: &[W::Agent],
    player: W::Agent,
    strike: &StrikeConfig,
    tick: u64,
    sink: &mut dyn TraceSink,
) -> u32 {
    if world.is_dead(player) {
        return 0;
    }
    let Some(target) = world.motion(player).map(|m| m.position) else {
        return 0;
    };

    let mut fired = 0;
    for &agent in agents {
        if !world.has_attack_request(agent) || world.is_dead(agent) {
            continue;
        }
        let Some(stats) = world.combat(agent).copied() else {
            continue;
        };

        if world.cooldown(agent).is_none() {
            let Some(motion) = world.motion_mut(agent) else {
                continue;
            };
            motion.attacking = true;
            motion.face_toward(target);
            motion.frame = 0;
            let offset = if motion.faces_right() {
                strike.offset
            } else {
                -strike.offset
            };
            let position = motion.position + Vec2::new(offset, 0.0);

            world.spawn_strike(StrikeRequest {
                source: agent.stable_id(),
                position,
                damage: stats.damage,
                lifetime_ms: strike.lifetime_ms,
            });
            world.insert_cooldown(agent, Cooldown::start(&stats));
            world.set_animation(agent, stats.attack_animation);
            world.set_attack_request(agent, false);

            fired += 1;
            sink.emit(
                TraceEvent::new(tick, tags::ATTACK_FIRE)
                    .with_agent(agent.stable_id())
                    .with_value(stats.damage.max(0.0) as u64),
            );
            tracing::debug!(agent = agent.stable_id(), damage = stats.damage, "attack fired");
        } else if !world.motion(agent).is_some_and(|m| m.attacking) {
            restore_movement(world, agent);
            world.set_attack_request(agent, false);
        }
    }
    fired
}

/// Clear the attacking flag, face along velocity and show the movement animation.
fn restore_movement<W: WorldMut>(world: &mut W, agent: W::Agent) {
    if let Some(motion) = world.motion_mut(agent) {
        motion.attacking = false;
        motion.face_movement();
    }
    if let Some(animation) = world.combat(agent).map(|c| c.movement_animation) {
        world.set_animation(agent, animation);
    }
}
