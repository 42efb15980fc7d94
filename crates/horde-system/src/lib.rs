//! Per-tick orchestration of the horde decision core.
//!
//! [`AiSystem::step`] runs, in order: cooldown ageing, one tree turn per
//! tree-driven agent (stable id order), the flocking pass for swarm agents,
//! and request consumption by the attack lifecycle.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod attack;
pub mod coordination;
pub mod registry;
pub mod system;

pub use attack::{advance_cooldowns, consume_requests, CooldownTick};
pub use coordination::pack_engaged;
pub use registry::Registry;
pub use system::{AiSystem, TickReport};
