use horde_core::{AgentKind, AiConfig, CombatStats, Motion, TickContext, Vec2, WorldView};
use horde_system::{AiSystem, Registry, TickReport};

fn world() -> Registry {
    let mut world = Registry::new();
    world.spawn_player(Motion::new(Vec2::new(600.0, 400.0), 3.0));
    let kinds = [
        AgentKind::MeleeBrute,
        AgentKind::RangedStalker,
        AgentKind::SimpleChaser,
        AgentKind::SwarmFlyer,
        AgentKind::SwarmFlyer,
        AgentKind::SwarmFlyer,
        AgentKind::Miniboss,
        AgentKind::RangedStalker,
    ];
    for (i, kind) in kinds.into_iter().enumerate() {
        let x = 100.0 + 130.0 * i as f32;
        let y = if i % 2 == 0 { 150.0 } else { 650.0 };
        world.spawn_agent(kind, Motion::new(Vec2::new(x, y), 2.0), 250.0, CombatStats::default());
    }
    world
}

fn run(seed: u64, ticks: u64) -> (Registry, Vec<TickReport>) {
    let mut world = world();
    let mut ai = AiSystem::new(AiConfig::default().with_seed(seed)).unwrap();
    let bounds = ai.config().flock.bounds;
    let mut reports = Vec::new();
    for n in 1..=ticks {
        // The player drifts in a slow circle.
        let t = n as f32 * 0.02;
        if let Some(p) = world.player_motion_mut() {
            p.velocity = Vec2::new(t.cos() * 3.0, t.sin() * 3.0);
        }
        reports.push(ai.step(&TickContext::new(n, 16.0), &mut world));
        world.integrate(bounds);
    }
    (world, reports)
}

#[test]
fn same_seed_same_outcome() {
    let (a, reports_a) = run(42, 300);
    let (b, reports_b) = run(42, 300);

    assert_eq!(reports_a, reports_b);
    assert_eq!(a.strikes(), b.strikes());
    for id in a.ai_agents() {
        assert_eq!(a.motion(id), b.motion(id), "agent {id}");
    }
}

#[test]
fn long_run_stays_finite() {
    let (world, reports) = run(7, 500);
    assert!(reports.iter().all(|r| r.invariant_violations == 0));
    assert!(reports.iter().all(|r| r.flocked == 3));
    for id in world.ai_agents() {
        let m = world.motion(id).unwrap();
        assert!(m.position.is_finite() && m.velocity.is_finite(), "agent {id}");
    }
}
