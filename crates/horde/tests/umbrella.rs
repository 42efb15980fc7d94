#![cfg(feature = "full")]

use horde::core::{AgentKind, AiConfig, CombatStats, Motion, TickContext, Vec2};
use horde::system::{AiSystem, Registry};

#[test]
fn full_feature_set_runs_a_tick() {
    let mut world = Registry::new();
    world.spawn_player(Motion::new(Vec2::new(100.0, 100.0), 3.0));
    world.spawn_agent(
        AgentKind::MeleeBrute,
        Motion::new(Vec2::new(140.0, 100.0), 2.0),
        200.0,
        CombatStats::default(),
    );

    let mut ai = AiSystem::new(AiConfig::default()).unwrap();
    let report = ai.step(&TickContext::new(1, 16.0), &mut world);
    assert_eq!(report.attacks_fired, 1);
    assert_eq!(ai.catalog().get(horde::core::TreeTemplate::Stalker).len(), 7);
}

#[cfg(feature = "serde")]
#[test]
fn config_round_trips_through_json() {
    let config = AiConfig::default().with_seed(99);
    let json = serde_json::to_string(&config).unwrap();
    let back: AiConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let partial: AiConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
    assert_eq!(partial.seed, 5);
    assert_eq!(partial.flock, AiConfig::default().flock);
}
