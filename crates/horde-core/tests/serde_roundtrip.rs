#![cfg(feature = "serde")]

use horde_core::{AgentKind, AiConfig, AiProfile, Vec2};

#[test]
fn config_roundtrip() {
    let mut config = AiConfig::default().with_seed(42);
    config.flock.bounds = Vec2::new(640.0, 480.0);

    let json = serde_json::to_string(&config).unwrap();
    let back: AiConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}

#[test]
fn partial_config_keeps_defaults() {
    let json = r#"{"seed": 5, "flock": {"chase_weight": 4.0}}"#;
    let back: AiConfig = serde_json::from_str(json).unwrap();
    assert_eq!(back.seed, 5);
    assert_eq!(back.flock.chase_weight, 4.0);
    assert_eq!(back.flock.grouping_radius, 280.0);
    assert_eq!(back.stalk, Default::default());
}

#[test]
fn agent_kind_uses_snake_case() {
    let profile = AiProfile::new(AgentKind::RangedStalker, 300.0);
    let json = serde_json::to_string(&profile).unwrap();
    assert!(json.contains("\"ranged_stalker\""));
}
