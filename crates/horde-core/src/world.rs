//! Read/write contracts the decision core needs from the entity store.
//!
//! The store itself (component storage, rendering, physics) lives outside
//! this workspace; adapters implement these traits over it.

use crate::{AgentId, AiProfile, AnimationId, CombatStats, Cooldown, Motion, StrikeRequest};

/// Read-only world access.
pub trait WorldView {
    type Agent: AgentId;

    /// The player entity, if one is alive in the world.
    fn player(&self) -> Option<Self::Agent>;

    /// Every entity carrying an AI profile, in a stable order.
    fn ai_agents(&self) -> Vec<Self::Agent>;

    fn motion(&self, agent: Self::Agent) -> Option<&Motion>;
    fn profile(&self, agent: Self::Agent) -> Option<&AiProfile>;
    fn combat(&self, agent: Self::Agent) -> Option<&CombatStats>;

    /// Death-timer predicate owned by an external collaborator.
    fn is_dead(&self, agent: Self::Agent) -> bool;

    fn has_attack_request(&self, agent: Self::Agent) -> bool;
    fn cooldown(&self, agent: Self::Agent) -> Option<&Cooldown>;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {
    fn motion_mut(&mut self, agent: Self::Agent) -> Option<&mut Motion>;

    fn set_attack_request(&mut self, agent: Self::Agent, requested: bool);

    fn insert_cooldown(&mut self, agent: Self::Agent, cooldown: Cooldown);
    fn cooldown_mut(&mut self, agent: Self::Agent) -> Option<&mut Cooldown>;
    fn remove_cooldown(&mut self, agent: Self::Agent) -> Option<Cooldown>;

    /// Ask the renderer to swap the agent's active animation.
    fn set_animation(&mut self, agent: Self::Agent, animation: AnimationId);

    /// Spawn a damage-dealing strike.
    fn spawn_strike(&mut self, strike: StrikeRequest);
}
