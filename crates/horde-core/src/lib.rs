//! Deterministic, engine-agnostic kernel primitives for per-frame NPC decisions.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod components;
pub mod config;
pub mod error;
pub mod math;
pub mod rng;
pub mod steering;
pub mod tick;
pub mod world;

pub use agent::{AgentId, AgentKind, TreeTemplate};
pub use components::{
    AiProfile, AnimationId, CombatStats, Cooldown, Facing, Motion, StrikeRequest,
};
pub use config::{
    AiConfig, CoordinationConfig, FlockConfig, PatrolConfig, StalkConfig, StrikeConfig,
};
pub use error::{AiError, AiResult};
pub use math::Vec2;
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
pub use world::{WorldMut, WorldView};
