//! Component shapes the decision core reads from and writes to the entity store.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AgentKind, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Kinematic state of a single agent (or the player).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Base movement speed; full-speed steering uses exactly this magnitude.
    pub speed: f32,
    /// Sprite scale; the sign of `scale.x` mirrors the sprite horizontally.
    pub scale: Vec2,
    pub facing: Facing,
    pub attack_facing: Facing,
    /// Per-frame animation counter owned by the renderer.
    pub frame: u32,
    /// Set while the attack animation plays.
    pub attacking: bool,
}

impl Motion {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            speed,
            scale: Vec2::new(1.0, 1.0),
            facing: Facing::Right,
            attack_facing: Facing::Right,
            frame: 0,
            attacking: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Turn toward `target` for an attack, mirroring the sprite if needed.
    pub fn face_toward(&mut self, target: Vec2) {
        if target.x - self.position.x > 0.0 {
            self.attack_facing = Facing::Right;
            if self.scale.x < 0.0 {
                self.scale.x = -self.scale.x;
                self.facing = Facing::Right;
            }
        } else {
            self.attack_facing = Facing::Left;
            if self.scale.x > 0.0 {
                self.scale.x = -self.scale.x;
                self.facing = Facing::Left;
            }
        }
    }

    /// Face along the current horizontal velocity (left when not moving right).
    pub fn face_movement(&mut self) {
        if self.velocity.x > 0.0 {
            self.scale.x = self.scale.x.abs();
            self.facing = Facing::Right;
        } else {
            self.scale.x = -self.scale.x.abs();
            self.facing = Facing::Left;
        }
    }

    pub fn faces_right(&self) -> bool {
        self.scale.x > 0.0
    }
}

/// AI classification plus perception radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AiProfile {
    pub kind: AgentKind,
    pub detection_radius: f32,
}

impl AiProfile {
    pub fn new(kind: AgentKind, detection_radius: f32) -> Self {
        Self {
            kind,
            detection_radius,
        }
    }
}

/// Opaque animation/texture handle understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnimationId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CombatStats {
    /// Player within this distance counts as attackable.
    pub attack_radius: f32,
    pub cooldown_ms: f32,
    pub damage: f32,
    /// How long the attack animation holds before movement animation resumes.
    pub attack_animation_ms: f32,
    pub attack_animation: AnimationId,
    pub movement_animation: AnimationId,
}

impl Default for CombatStats {
    fn default() -> Self {
        Self {
            attack_radius: 60.0,
            cooldown_ms: 1200.0,
            damage: 10.0,
            attack_animation_ms: 400.0,
            attack_animation: AnimationId(1),
            movement_animation: AnimationId(0),
        }
    }
}

/// Cooldown attached when an attack lands; blocks new attacks until elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cooldown {
    pub remaining_ms: f32,
    /// Remaining time of the attack animation; never exceeds `remaining_ms`.
    pub animation_ms: f32,
}

impl Cooldown {
    pub fn start(stats: &CombatStats) -> Self {
        let remaining_ms = stats.cooldown_ms.max(0.0);
        Self {
            remaining_ms,
            animation_ms: stats.attack_animation_ms.clamp(0.0, remaining_ms),
        }
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining_ms <= 0.0
    }

    pub fn animation_done(&self) -> bool {
        self.animation_ms <= 0.0
    }
}

/// One-shot damage-dealing strike spawned when an attack lands.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrikeRequest {
    /// Stable id of the attacking agent.
    pub source: u64,
    pub position: Vec2,
    pub damage: f32,
    pub lifetime_ms: f32,
}
