//! Seeded headless encounter: one player circling the field and a mixed horde.

use anyhow::{Context, Result};
use serde::Serialize;

use horde_core::rng::derive_seed;
use horde_core::{
    AgentKind, AiConfig, AnimationId, CombatStats, DeterministicRng, Motion, SplitMix64,
    TickContext, Vec2,
};
use horde_system::{AiSystem, Registry};
use horde_tools::TraceLog;

/// Separate RNG stream for spawn placement so it never shifts decision draws.
const SPAWN_STREAM: u64 = 0x5350_4157_4E00_0001;

#[derive(Debug, Clone, Copy)]
pub struct Roster {
    pub melee: u32,
    pub minibosses: u32,
    pub stalkers: u32,
    pub chasers: u32,
    pub flyers: u32,
}

impl Roster {
    fn entries(&self) -> [(AgentKind, u32); 5] {
        [
            (AgentKind::MeleeBrute, self.melee),
            (AgentKind::Miniboss, self.minibosses),
            (AgentKind::RangedStalker, self.stalkers),
            (AgentKind::SimpleChaser, self.chasers),
            (AgentKind::SwarmFlyer, self.flyers),
        ]
    }

    pub fn total(&self) -> u32 {
        self.entries().iter().map(|(_, n)| n).sum()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Summary {
    pub seed: u64,
    pub ticks: u64,
    pub agents: u32,
    pub evaluated: u64,
    pub flocked: u64,
    pub skipped: u64,
    pub attacks_fired: u64,
    pub damage_dispatched: f32,
    pub invariant_violations: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceLog>,
}

/// Movement speed, detection radius and combat stats per kind.
fn archetype(kind: AgentKind) -> (f32, f32, CombatStats) {
    let base = CombatStats::default();
    match kind {
        AgentKind::MeleeBrute => (1.5, 250.0, base),
        AgentKind::Miniboss => (
            1.2,
            250.0,
            CombatStats {
                attack_radius: 80.0,
                cooldown_ms: 1800.0,
                damage: 25.0,
                attack_animation_ms: 600.0,
                attack_animation: AnimationId(11),
                movement_animation: AnimationId(10),
            },
        ),
        AgentKind::RangedStalker => (
            2.0,
            300.0,
            CombatStats {
                attack_animation: AnimationId(21),
                movement_animation: AnimationId(20),
                ..base
            },
        ),
        AgentKind::SimpleChaser => (
            2.5,
            300.0,
            CombatStats {
                attack_radius: 50.0,
                damage: 8.0,
                attack_animation: AnimationId(31),
                movement_animation: AnimationId(30),
                ..base
            },
        ),
        AgentKind::SwarmFlyer => (3.0, 200.0, base),
    }
}

pub fn build_world(config: &AiConfig, roster: &Roster) -> Registry {
    let bounds = config.flock.bounds;
    let mut world = Registry::new();
    world.spawn_player(Motion::new(bounds / 2.0, 3.0));

    let mut rng = SplitMix64::new(derive_seed(config.seed, 0, SPAWN_STREAM));
    for (kind, count) in roster.entries() {
        let (speed, detection_radius, combat) = archetype(kind);
        for _ in 0..count {
            let position = Vec2::new(
                rng.next_f32_unit() * bounds.x,
                rng.next_f32_unit() * bounds.y,
            );
            world.spawn_agent(kind, Motion::new(position, speed), detection_radius, combat);
        }
    }
    world
}

pub fn run(
    config: AiConfig,
    roster: &Roster,
    ticks: u64,
    elapsed_ms: f32,
    trace: bool,
) -> Result<Summary> {
    let mut world = build_world(&config, roster);
    let bounds = config.flock.bounds;
    let mut summary = Summary {
        seed: config.seed,
        ticks,
        agents: roster.total(),
        ..Summary::default()
    };

    let mut ai = AiSystem::new(config).context("invalid AI configuration")?;
    if trace {
        ai = ai.with_trace();
    }

    for n in 1..=ticks {
        steer_player(&mut world, n, bounds);
        let report = ai.step(&TickContext::new(n, elapsed_ms), &mut world);
        summary.evaluated += u64::from(report.evaluated);
        summary.flocked += u64::from(report.flocked);
        summary.skipped += u64::from(report.skipped);
        summary.attacks_fired += u64::from(report.attacks_fired);
        summary.invariant_violations += u64::from(report.invariant_violations);
        summary.damage_dispatched += world.drain_strikes().iter().map(|s| s.damage).sum::<f32>();
        world.integrate(bounds);
    }

    summary.trace = ai.take_trace();
    tracing::info!(
        ticks,
        attacks = summary.attacks_fired,
        damage = summary.damage_dispatched,
        "scenario finished"
    );
    Ok(summary)
}

/// The player walks a slow loop around the field centre.
fn steer_player(world: &mut Registry, tick: u64, bounds: Vec2) {
    let Some(player) = world.player_motion_mut() else {
        return;
    };
    let centre = bounds / 2.0;
    let angle = tick as f32 * 0.01;
    let target = centre + Vec2::new(angle.cos() * bounds.x * 0.3, angle.sin() * bounds.y * 0.3);
    let to_target = target - player.position;
    let distance = to_target.length();
    player.velocity = if distance > player.speed {
        to_target * (player.speed / distance)
    } else {
        to_target
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster {
            melee: 2,
            minibosses: 1,
            stalkers: 2,
            chasers: 2,
            flyers: 5,
        }
    }

    #[test]
    fn spawns_the_whole_roster_inside_bounds() {
        use horde_core::WorldView;

        let config = AiConfig::default().with_seed(3);
        let world = build_world(&config, &roster());
        let agents = world.ai_agents();
        assert_eq!(agents.len() as u32, roster().total());
        for id in agents {
            let p = world.motion(id).unwrap().position;
            assert!(p.x >= 0.0 && p.x <= config.flock.bounds.x);
            assert!(p.y >= 0.0 && p.y <= config.flock.bounds.y);
        }
    }

    #[test]
    fn runs_are_reproducible() {
        let config = AiConfig::default().with_seed(9);
        let a = run(config.clone(), &roster(), 400, 16.0, false).unwrap();
        let b = run(config, &roster(), 400, 16.0, false).unwrap();
        assert_eq!(a.attacks_fired, b.attacks_fired);
        assert_eq!(a.evaluated, b.evaluated);
        assert_eq!(a.damage_dispatched, b.damage_dispatched);
        assert_eq!(a.flocked, 400 * 5);
        assert_eq!(a.invariant_violations, 0);
    }

    #[test]
    fn trace_is_opt_in() {
        let config = AiConfig::default();
        let quiet = run(config.clone(), &roster(), 50, 16.0, false).unwrap();
        assert!(quiet.trace.is_none());
        let traced = run(config, &roster(), 50, 16.0, true).unwrap();
        assert!(traced.trace.is_some());
    }
}
