use std::collections::{BTreeMap, BTreeSet};

use horde_core::{
    AgentKind, AiProfile, AnimationId, CombatStats, Cooldown, Motion, StrikeRequest, Vec2,
    WorldMut, WorldView,
};

/// In-memory entity store keyed by `u64` ids.
///
/// Reference implementation of the world contracts, used by the headless
/// runner and tests. Every map is ordered, so iteration is deterministic.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    next_id: u64,
    player: Option<u64>,
    motions: BTreeMap<u64, Motion>,
    profiles: BTreeMap<u64, AiProfile>,
    combat: BTreeMap<u64, CombatStats>,
    dead: BTreeSet<u64>,
    requests: BTreeSet<u64>,
    cooldowns: BTreeMap<u64, Cooldown>,
    animations: BTreeMap<u64, AnimationId>,
    strikes: Vec<StrikeRequest>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    fn allocate(&mut self) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    pub fn spawn_player(&mut self, motion: Motion) -> u64 {
        let id = self.allocate();
        self.motions.insert(id, motion);
        self.player = Some(id);
        id
    }

    pub fn spawn_agent(
        &mut self,
        kind: AgentKind,
        motion: Motion,
        detection_radius: f32,
        combat: CombatStats,
    ) -> u64 {
        let id = self.allocate();
        self.motions.insert(id, motion);
        self.profiles.insert(id, AiProfile::new(kind, detection_radius));
        self.combat.insert(id, combat);
        self.animations.insert(id, combat.movement_animation);
        id
    }

    pub fn player_motion_mut(&mut self) -> Option<&mut Motion> {
        let player = self.player?;
        self.motions.get_mut(&player)
    }

    pub fn kill(&mut self, id: u64) {
        self.dead.insert(id);
    }

    pub fn revive(&mut self, id: u64) {
        self.dead.remove(&id);
    }

    /// Remove an entity and every component it carries.
    pub fn despawn(&mut self, id: u64) {
        self.motions.remove(&id);
        self.profiles.remove(&id);
        self.combat.remove(&id);
        self.dead.remove(&id);
        self.requests.remove(&id);
        self.cooldowns.remove(&id);
        self.animations.remove(&id);
        if self.player == Some(id) {
            self.player = None;
        }
    }

    pub fn insert_motion(&mut self, id: u64, motion: Motion) {
        self.motions.insert(id, motion);
    }

    pub fn remove_motion(&mut self, id: u64) -> Option<Motion> {
        self.motions.remove(&id)
    }

    pub fn remove_combat(&mut self, id: u64) -> Option<CombatStats> {
        self.combat.remove(&id)
    }

    pub fn animation(&self, id: u64) -> Option<AnimationId> {
        self.animations.get(&id).copied()
    }

    pub fn strikes(&self) -> &[StrikeRequest] {
        &self.strikes
    }

    pub fn drain_strikes(&mut self) -> Vec<StrikeRequest> {
        std::mem::take(&mut self.strikes)
    }

    /// Move every entity by its velocity, clamped to `0..=bounds`.
    pub fn integrate(&mut self, bounds: Vec2) {
        for motion in self.motions.values_mut() {
            let p = motion.position + motion.velocity;
            motion.position = Vec2::new(p.x.clamp(0.0, bounds.x), p.y.clamp(0.0, bounds.y));
        }
    }
}

impl WorldView for Registry {
    type Agent = u64;

    fn player(&self) -> Option<u64> {
        self.player
    }

    fn ai_agents(&self) -> Vec<u64> {
        self.profiles.keys().copied().collect()
    }

    fn motion(&self, agent: u64) -> Option<&Motion> {
        self.motions.get(&agent)
    }

    fn profile(&self, agent: u64) -> Option<&AiProfile> {
        self.profiles.get(&agent)
    }

    fn combat(&self, agent: u64) -> Option<&CombatStats> {
        self.combat.get(&agent)
    }

    fn is_dead(&self, agent: u64) -> bool {
        self.dead.contains(&agent)
    }

    fn has_attack_request(&self, agent: u64) -> bool {
        self.requests.contains(&agent)
    }

    fn cooldown(&self, agent: u64) -> Option<&Cooldown> {
        self.cooldowns.get(&agent)
    }
}

impl WorldMut for Registry {
    fn motion_mut(&mut self, agent: u64) -> Option<&mut Motion> {
        self.motions.get_mut(&agent)
    }

    fn set_attack_request(&mut self, agent: u64, requested: bool) {
        if requested {
            self.requests.insert(agent);
        } else {
            self.requests.remove(&agent);
        }
    }

    fn insert_cooldown(&mut self, agent: u64, cooldown: Cooldown) {
        self.cooldowns.insert(agent, cooldown);
    }

    fn cooldown_mut(&mut self, agent: u64) -> Option<&mut Cooldown> {
        self.cooldowns.get_mut(&agent)
    }

    fn remove_cooldown(&mut self, agent: u64) -> Option<Cooldown> {
        self.cooldowns.remove(&agent)
    }

    fn set_animation(&mut self, agent: u64, animation: AnimationId) {
        self.animations.insert(agent, animation);
    }

    fn spawn_strike(&mut self, strike: StrikeRequest) {
        self.strikes.push(strike);
    }
}
