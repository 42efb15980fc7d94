//! Deterministic boid flocking: cohesion, separation, alignment and player chase,
//! plus wall avoidance while the player is out of sight.
//!
//! Neighbour queries are full scans, O(n²) per step. That is fine for the
//! flock sizes a single encounter spawns; larger flocks need a spatial index.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

use horde_core::steering::{is_nearby, normalize};
use horde_core::{FlockConfig, Vec2};

/// Fewer neighbours than this and the averaged forces contribute nothing.
pub const MIN_NEIGHBORS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockAgent {
    /// Stable identifier used for deterministic neighbour ordering.
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub speed: f32,
    pub detection_radius: f32,
}

impl FlockAgent {
    pub fn new(id: u64, position: Vec2, speed: f32, detection_radius: f32) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            speed,
            detection_radius,
        }
    }
}

/// The four blended contributions for one agent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlockForces {
    pub grouping: Vec2,
    pub separation: Vec2,
    pub matching: Vec2,
    pub chase: Vec2,
}

impl FlockForces {
    pub fn total(&self) -> Vec2 {
        self.grouping + self.separation + self.matching + self.chase
    }
}

/// Flocking solver. Owns only scratch storage; all state lives in the agents.
pub struct Flock {
    config: FlockConfig,
    order: Vec<usize>,
    scratch_velocities: Vec<Vec2>,
}

impl Flock {
    pub fn new(config: FlockConfig) -> Self {
        Self {
            config,
            order: Vec::new(),
            scratch_velocities: Vec::new(),
        }
    }

    /// Replace every agent's velocity with its flocked velocity.
    ///
    /// All agents read the same pre-step snapshot, so the result does not
    /// depend on slice order.
    pub fn step_velocities(&mut self, agents: &mut [FlockAgent], player: Vec2) {
        self.rebuild_order(agents);

        self.scratch_velocities.clear();
        for i in 0..agents.len() {
            let forces = forces_in_order(&self.config, agents, &self.order, i, player);
            self.scratch_velocities
                .push(blend(&self.config, &agents[i], forces, player));
        }

        for (agent, v) in agents.iter_mut().zip(self.scratch_velocities.iter().copied()) {
            agent.velocity = v;
        }
    }

    /// Contributions acting on `agents[i]` against the current snapshot.
    pub fn forces(&mut self, agents: &[FlockAgent], i: usize, player: Vec2) -> FlockForces {
        self.rebuild_order(agents);
        forces_in_order(&self.config, agents, &self.order, i, player)
    }

    // Neighbour sums are visited in id order: independent of slice order.
    fn rebuild_order(&mut self, agents: &[FlockAgent]) {
        self.order.clear();
        self.order.extend(0..agents.len());
        self.order
            .sort_by(|a, b| (agents[*a].id, *a).cmp(&(agents[*b].id, *b)));
    }
}

fn forces_in_order(
    cfg: &FlockConfig,
    agents: &[FlockAgent],
    order: &[usize],
    i: usize,
    player: Vec2,
) -> FlockForces {
    let agent = &agents[i];
    let near = move |radius: f32| {
        order
            .iter()
            .copied()
            .filter(move |&j| j != i && is_nearby(agent.position, agents[j].position, radius))
            .map(move |j| &agents[j])
    };

    FlockForces {
        grouping: group(cfg, agent, near(cfg.grouping_radius)),
        separation: separate(cfg, agent, near(cfg.separation_radius)),
        matching: match_velocity(cfg, agent, near(cfg.grouping_radius)),
        chase: chase(cfg, agent, player),
    }
}

/// `normalize(v + forces / blend_divisor) * speed`, then wall avoidance when
/// the player is out of sight.
pub fn blend(cfg: &FlockConfig, agent: &FlockAgent, forces: FlockForces, player: Vec2) -> Vec2 {
    let bent = agent.velocity + forces.total() / cfg.blend_divisor;
    let v = normalize(bent) * agent.speed;
    if is_nearby(agent.position, player, agent.detection_radius) {
        v
    } else {
        avoid_walls(cfg, agent.position, v, agent.speed)
    }
}

/// Cohesion: steer toward the neighbours' mean position.
pub fn group<'a>(
    cfg: &FlockConfig,
    agent: &FlockAgent,
    neighbors: impl Iterator<Item = &'a FlockAgent>,
) -> Vec2 {
    let (count, sum) = neighbors.fold((0usize, Vec2::ZERO), |(n, s), o| (n + 1, s + o.position));
    if count < MIN_NEIGHBORS {
        return Vec2::ZERO;
    }
    (sum / count as f32 - agent.position) * cfg.group_weight / cfg.damping
}

/// Separation: full-speed push away from the mean offset of close neighbours.
pub fn separate<'a>(
    cfg: &FlockConfig,
    agent: &FlockAgent,
    neighbors: impl Iterator<Item = &'a FlockAgent>,
) -> Vec2 {
    let (count, sum) = neighbors.fold((0usize, Vec2::ZERO), |(n, s), o| {
        (n + 1, s + (o.position - agent.position))
    });
    if count < MIN_NEIGHBORS {
        return Vec2::ZERO;
    }
    normalize(sum / count as f32) * agent.speed * -cfg.separation_weight
}

/// Alignment: steer from current velocity toward the neighbours' mean velocity.
pub fn match_velocity<'a>(
    cfg: &FlockConfig,
    agent: &FlockAgent,
    neighbors: impl Iterator<Item = &'a FlockAgent>,
) -> Vec2 {
    let (count, sum) = neighbors.fold((0usize, Vec2::ZERO), |(n, s), o| (n + 1, s + o.velocity));
    if count < MIN_NEIGHBORS {
        return Vec2::ZERO;
    }
    normalize(sum / count as f32 - agent.velocity) * agent.speed * cfg.match_weight / cfg.damping
}

pub fn chase(cfg: &FlockConfig, agent: &FlockAgent, player: Vec2) -> Vec2 {
    if !is_nearby(agent.position, player, agent.detection_radius) {
        return Vec2::ZERO;
    }
    normalize(player - agent.position) * agent.speed * cfg.chase_weight
}

/// Force each axis toward the interior when within `wall_avoid_distance` of an edge.
///
/// The far edge wins when the field is narrower than twice the threshold.
pub fn avoid_walls(cfg: &FlockConfig, position: Vec2, velocity: Vec2, speed: f32) -> Vec2 {
    let limit = cfg.wall_avoid_distance;
    let mut v = velocity;

    if cfg.bounds.x - position.x < limit {
        v.x = -speed;
    } else if position.x < limit {
        v.x = speed;
    }

    if cfg.bounds.y - position.y < limit {
        v.y = -speed;
    } else if position.y < limit {
        v.y = speed;
    }
    v
}
