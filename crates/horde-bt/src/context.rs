use horde_core::steering::is_nearby;
use horde_core::{AiConfig, Motion, PatrolConfig, StalkConfig};

/// What an agent knows about the player at the start of its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perception {
    /// Player within detection radius.
    pub player_nearby: bool,
    /// Player within attack radius.
    pub player_attackable: bool,
    /// Group-aggression gate; always set for kinds outside the pack rule.
    pub should_attack: bool,
    /// Two independent draws in `1..=1000`.
    pub rand: i32,
    pub rand2: i32,
}

impl Perception {
    pub fn sense(
        agent: &Motion,
        player: &Motion,
        detection_radius: f32,
        attack_radius: f32,
    ) -> Self {
        Self {
            player_nearby: is_nearby(agent.position, player.position, detection_radius),
            player_attackable: is_nearby(agent.position, player.position, attack_radius),
            should_attack: true,
            rand: 0,
            rand2: 0,
        }
    }

    pub fn with_should_attack(mut self, should_attack: bool) -> Self {
        self.should_attack = should_attack;
        self
    }

    pub fn with_draws(mut self, rand: i32, rand2: i32) -> Self {
        self.rand = rand;
        self.rand2 = rand2;
        self
    }
}

/// Leaf tuning copied out of [`AiConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LeafTuning {
    pub patrol: PatrolConfig,
    pub stalk: StalkConfig,
}

impl From<&AiConfig> for LeafTuning {
    fn from(config: &AiConfig) -> Self {
        Self {
            patrol: config.patrol,
            stalk: config.stalk,
        }
    }
}

/// The blackboard for one agent's turn.
///
/// It borrows the agent's kinematics and attack-request flag, so it cannot be
/// held past the evaluation it was built for.
#[derive(Debug)]
pub struct DecisionContext<'a> {
    pub perception: Perception,
    pub detection_radius: f32,
    pub agent: &'a mut Motion,
    pub player: &'a Motion,
    pub attack_requested: &'a mut bool,
    pub tuning: &'a LeafTuning,
    /// Leaf invariant violations observed during this turn.
    pub invariant_violations: u32,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        perception: Perception,
        detection_radius: f32,
        agent: &'a mut Motion,
        player: &'a Motion,
        attack_requested: &'a mut bool,
        tuning: &'a LeafTuning,
    ) -> Self {
        Self {
            perception,
            detection_radius,
            agent,
            player,
            attack_requested,
            tuning,
            invariant_violations: 0,
        }
    }

    pub fn player_distance(&self) -> f32 {
        self.agent.position.distance(self.player.position)
    }
}
