//! Stateless steering math shared by tree leaves and the flocking pass.
//!
//! Every normalisation here clamps the divisor to [`NORMALIZE_FLOOR`]: a zero
//! vector is ordinary input (an agent standing on the player, a boid with no
//! velocity yet) and must never produce NaN or infinity.

use crate::Vec2;

/// Smallest magnitude a vector is divided by when normalised.
pub const NORMALIZE_FLOOR: f32 = 0.001;

/// Scale `v` to unit length, dividing by at least [`NORMALIZE_FLOOR`].
///
/// Vectors shorter than the floor come back *shorter* than unit length; the
/// zero vector stays zero.
pub fn normalize(v: Vec2) -> Vec2 {
    let magnitude = v.length().max(NORMALIZE_FLOOR);
    v / magnitude
}

/// `true` when `a` and `b` are at most `radius` apart (inclusive).
pub fn is_nearby(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) <= radius
}

/// Velocity of magnitude `speed` pointing from `from` to `to`.
pub fn toward(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    normalize(to - from) * speed
}

/// Velocity of magnitude `speed` pointing from `to` back past `from`.
pub fn away_from(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    normalize(from - to) * speed
}
