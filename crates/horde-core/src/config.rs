//! Tuning knobs for the decision core.
//!
//! Defaults reproduce the shipped game's constants. Every struct is
//! `#[serde(default)]` so partial config files only override what they name.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AiError, AiResult, Vec2};

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    /// Seed of the simulation-owned RNG used for idle variety.
    pub seed: u64,
    pub patrol: PatrolConfig,
    pub stalk: StalkConfig,
    pub coordination: CoordinationConfig,
    pub flock: FlockConfig,
    pub strike: StrikeConfig,
}

impl AiConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations that would break leaf invariants.
    pub fn validate(&self) -> AiResult<()> {
        self.patrol.validate()?;
        self.stalk.validate()?;
        self.flock.validate()?;
        Ok(())
    }
}

/// Idle wandering while no player is in sight.
///
/// Bands are inclusive ranges over the `1..=1000` draw.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatrolConfig {
    pub stop_band: (i32, i32),
    pub wander_band: (i32, i32),
    /// Wander components are `(digit - 4.5) * speed / divisor`; must be > 4.5
    /// times sqrt(2) for wandering to stay below base speed.
    pub wander_speed_divisor: f32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            stop_band: (97, 98),
            wander_band: (99, 100),
            wander_speed_divisor: 9.0,
        }
    }
}

impl PatrolConfig {
    fn validate(&self) -> AiResult<()> {
        if self.wander_speed_divisor <= 4.5 * core::f32::consts::SQRT_2 {
            return Err(AiError::Config(format!(
                "patrol.wander_speed_divisor {} lets wandering reach base speed",
                self.wander_speed_divisor
            )));
        }
        Ok(())
    }
}

/// Distance bands (fractions of detection radius) for ranged stalkers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StalkConfig {
    /// Farther than this fraction: approach.
    pub approach_ratio: f32,
    /// Closer than or at this fraction: retreat. Between the two: hold.
    pub retreat_ratio: f32,
    /// Magnitude of the hold-position nudge that keeps the sprite facing the player.
    pub hold_nudge: f32,
}

impl Default for StalkConfig {
    fn default() -> Self {
        Self {
            approach_ratio: 0.60,
            retreat_ratio: 0.55,
            hold_nudge: 0.0001,
        }
    }
}

impl StalkConfig {
    fn validate(&self) -> AiResult<()> {
        if !(self.retreat_ratio < self.approach_ratio) {
            return Err(AiError::Config(format!(
                "stalk.retreat_ratio {} must be below approach_ratio {}",
                self.retreat_ratio, self.approach_ratio
            )));
        }
        Ok(())
    }
}

/// Pack-aggression trigger for ranged stalkers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoordinationConfig {
    /// Any other AI agent this close to the player engages the stalkers.
    pub engage_radius: f32,
}

impl Default for CoordinationConfig {
    fn default() -> Self {
        Self {
            engage_radius: 120.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    pub grouping_radius: f32,
    pub separation_radius: f32,
    pub group_weight: f32,
    pub separation_weight: f32,
    pub match_weight: f32,
    pub chase_weight: f32,
    /// Divides cohesion and alignment so the flock doesn't snap to its centre.
    pub damping: f32,
    /// Divides the summed contributions before they bend current velocity.
    pub blend_divisor: f32,
    /// Axis distance to the field edge that triggers wall avoidance.
    pub wall_avoid_distance: f32,
    /// Play-field size; the field spans `0..=bounds.x`, `0..=bounds.y`.
    pub bounds: Vec2,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            grouping_radius: 280.0,
            separation_radius: 50.0,
            group_weight: 1.0,
            separation_weight: 1.0,
            match_weight: 1.0,
            chase_weight: 3.0,
            damping: 50.0,
            blend_divisor: 40.0,
            wall_avoid_distance: 40.0,
            bounds: Vec2::new(1200.0, 800.0),
        }
    }
}

impl FlockConfig {
    fn validate(&self) -> AiResult<()> {
        if self.damping <= 0.0 || self.blend_divisor <= 0.0 {
            return Err(AiError::Config(
                "flock.damping and flock.blend_divisor must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Geometry of the strike spawned when an attack lands.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrikeConfig {
    /// Horizontal offset from the attacker, along its facing.
    pub offset: f32,
    pub lifetime_ms: f32,
}

impl Default for StrikeConfig {
    fn default() -> Self {
        Self {
            offset: 40.0,
            lifetime_ms: 900.0,
        }
    }
}
