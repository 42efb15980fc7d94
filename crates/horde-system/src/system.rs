use std::collections::{BTreeMap, BTreeSet};

use horde_bt::{DecisionContext, LeafTuning, NodeId, Perception, TreeCatalog, TreeCursor};
use horde_core::{
    AgentId, AiConfig, AiError, AiResult, DeterministicRng, Motion, SplitMix64, TickContext,
    WorldMut,
};
use horde_flock::{Flock, FlockAgent};
use horde_tools::{tags, NullTraceSink, TraceEvent, TraceLog, TraceSink};

use crate::{attack, coordination};

/// Per-tick counters returned by [`AiSystem::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub tick: u64,
    /// Agents whose tree advanced this tick.
    pub evaluated: u32,
    /// Agents skipped for a missing component.
    pub skipped: u32,
    pub flocked: u32,
    pub attacks_fired: u32,
    pub recovered: u32,
    pub cooldowns_ready: u32,
    pub invariant_violations: u32,
}

struct Swarm<A> {
    agents: Vec<A>,
    boids: Vec<FlockAgent>,
}

impl<A> Default for Swarm<A> {
    fn default() -> Self {
        Self {
            agents: Vec::new(),
            boids: Vec::new(),
        }
    }
}

/// Drives every NPC for one simulation tick.
///
/// Owns the shared tree topologies, one [`TreeCursor`] per agent, the flocking
/// scratch space and the RNG that feeds idle variety.
pub struct AiSystem<W: WorldMut> {
    config: AiConfig,
    tuning: LeafTuning,
    catalog: TreeCatalog,
    flock: Flock,
    rng: SplitMix64,
    cursors: BTreeMap<W::Agent, TreeCursor>,
    reported: BTreeSet<W::Agent>,
    trace: Option<TraceLog>,
}

impl<W: WorldMut> AiSystem<W> {
    pub fn new(config: AiConfig) -> AiResult<Self> {
        config.validate()?;
        let catalog = TreeCatalog::build()?;
        Ok(Self {
            tuning: LeafTuning::from(&config),
            flock: Flock::new(config.flock),
            rng: SplitMix64::new(config.seed),
            catalog,
            config,
            cursors: BTreeMap::new(),
            reported: BTreeSet::new(),
            trace: None,
        })
    }

    /// Record decision trace events into an in-memory [`TraceLog`].
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(TraceLog::default());
        self
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TreeCatalog {
        &self.catalog
    }

    pub fn trace(&self) -> Option<&TraceLog> {
        self.trace.as_ref()
    }

    pub fn take_trace(&mut self) -> Option<TraceLog> {
        self.trace.as_mut().map(std::mem::take)
    }

    pub fn cursor(&self, agent: W::Agent) -> Option<&TreeCursor> {
        self.cursors.get(&agent)
    }

    /// Run one tick: age cooldowns, take every tree turn, flock swarm agents,
    /// then consume attack requests.
    pub fn step(&mut self, ctx: &TickContext, world: &mut W) -> TickReport {
        let mut report = TickReport {
            tick: ctx.tick,
            ..TickReport::default()
        };
        let agents = world.ai_agents();
        self.prune(&agents);

        let mut null = NullTraceSink;
        let cooled = {
            let sink: &mut dyn TraceSink = match self.trace.as_mut() {
                Some(log) => log,
                None => &mut null,
            };
            attack::advance_cooldowns(world, &agents, ctx.elapsed_ms, ctx.tick, sink)
        };
        report.recovered = cooled.recovered;
        report.cooldowns_ready = cooled.ready;

        let Some(player) = world.player() else {
            tracing::debug!(tick = ctx.tick, error = %AiError::NoPlayer, "decision pass skipped");
            return report;
        };
        let Some(player_motion) = world.motion(player).copied() else {
            tracing::debug!(tick = ctx.tick, error = %AiError::NoPlayer, "player has no motion");
            return report;
        };

        let mut swarm = Swarm::default();
        for &agent in &agents {
            self.take_turn(ctx, world, &agents, agent, &player_motion, &mut swarm, &mut report);
        }

        // Flocking overwrites velocity, so it runs after every tree turn.
        if !swarm.boids.is_empty() {
            self.flock.step_velocities(&mut swarm.boids, player_motion.position);
            for (&agent, boid) in swarm.agents.iter().zip(&swarm.boids) {
                if let Some(motion) = world.motion_mut(agent) {
                    motion.velocity = boid.velocity;
                }
            }
            report.flocked = swarm.boids.len() as u32;
        }

        let sink: &mut dyn TraceSink = match self.trace.as_mut() {
            Some(log) => log,
            None => &mut null,
        };
        report.attacks_fired =
            attack::consume_requests(world, &agents, player, &self.config.strike, ctx.tick, sink);

        tracing::debug!(
            tick = report.tick,
            evaluated = report.evaluated,
            skipped = report.skipped,
            flocked = report.flocked,
            attacks = report.attacks_fired,
            "ai tick"
        );
        report
    }

    /// Drop cursors and skip reports of agents that left the world.
    fn prune(&mut self, agents: &[W::Agent]) {
        let live: BTreeSet<W::Agent> = agents.iter().copied().collect();
        self.cursors.retain(|agent, _| live.contains(agent));
        self.reported.retain(|agent| live.contains(agent));
    }

    /// Number of agents holding a tree cursor.
    pub fn tracked(&self) -> usize {
        self.cursors.len()
    }

    #[allow(clippy::too_many_arguments)]
    fn take_turn(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        agents: &[W::Agent],
        agent: W::Agent,
        player: &Motion,
        swarm: &mut Swarm<W::Agent>,
        report: &mut TickReport,
    ) {
        // A request only lives until the agent's next turn.
        world.set_attack_request(agent, false);

        let Some(profile) = world.profile(agent).copied() else {
            self.skip(ctx, agent, "profile", report);
            return;
        };
        let Some(motion) = world.motion(agent).copied() else {
            self.skip(ctx, agent, "motion", report);
            return;
        };

        let Some(template) = profile.kind.template() else {
            swarm.agents.push(agent);
            swarm.boids.push(FlockAgent {
                id: agent.stable_id(),
                position: motion.position,
                velocity: motion.velocity,
                speed: motion.speed,
                detection_radius: profile.detection_radius,
            });
            return;
        };

        let Some(combat) = world.combat(agent).copied() else {
            self.skip(ctx, agent, "combat_stats", report);
            return;
        };

        let should_attack = !profile.kind.coordinates_with_pack()
            || coordination::pack_engaged(
                &*world,
                agents,
                agent,
                player.position,
                self.config.coordination.engage_radius,
            );
        let perception = Perception::sense(
            &motion,
            player,
            profile.detection_radius,
            combat.attack_radius,
        )
        .with_should_attack(should_attack)
        .with_draws(self.rng.roll_1000(), self.rng.roll_1000());

        let tree = self.catalog.get(template);
        let cursor = self
            .cursors
            .entry(agent)
            .or_insert_with(|| TreeCursor::new(tree));
        let before = cursor.current();

        let mut moved = motion;
        let mut requested = false;
        let mut turn = DecisionContext::new(
            perception,
            profile.detection_radius,
            &mut moved,
            player,
            &mut requested,
            &self.tuning,
        );
        let next: NodeId = cursor.step(tree, &mut turn);
        report.invariant_violations += turn.invariant_violations;

        if let Some(m) = world.motion_mut(agent) {
            m.velocity = moved.velocity;
        }
        world.set_attack_request(agent, requested);
        report.evaluated += 1;

        if next != before {
            if let Some(log) = self.trace.as_mut() {
                log.emit(
                    TraceEvent::new(ctx.tick, tags::BT_STEP)
                        .with_agent(agent.stable_id())
                        .with_value(next.0 as u64),
                );
            }
        }
    }

    fn skip(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        component: &'static str,
        report: &mut TickReport,
    ) {
        report.skipped += 1;
        if self.reported.insert(agent) {
            let err = AiError::MissingComponent {
                agent: agent.stable_id(),
                component,
            };
            tracing::warn!(tick = ctx.tick, error = %err, "agent skipped");
            if let Some(log) = self.trace.as_mut() {
                log.emit(
                    TraceEvent::new(ctx.tick, tags::AGENT_SKIPPED).with_agent(agent.stable_id()),
                );
            }
        }
    }
}
