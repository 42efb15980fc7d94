#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One decision-core event.
///
/// `agent` is the stable id of the agent involved. `value` carries the
/// tag-specific payload: the new node index for tree steps, damage for fired
/// attacks, zero otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub tag: Cow<'static, str>,
    pub agent: u64,
    pub value: u64,
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
            tag: tag.into(),
            agent: 0,
            value: 0,
        }
    }

    pub fn with_agent(mut self, agent: u64) -> Self {
        self.agent = agent;
        self
    }

    pub fn with_value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }
}

/// Tags emitted by the decision core.
pub mod tags {
    /// An agent's resumption pointer moved; `value` is the new node index.
    pub const BT_STEP: &str = "bt.step";
    /// An attack landed; `value` is the damage rounded down.
    pub const ATTACK_FIRE: &str = "attack.fire";
    /// The attack animation finished and the movement animation was restored.
    pub const ATTACK_RECOVER: &str = "attack.recover";
    /// A cooldown elapsed; the agent may attack again.
    pub const ATTACK_READY: &str = "attack.ready";
    /// An agent was skipped for a missing component.
    pub const AGENT_SKIPPED: &str = "agent.skipped";
}

/// Destination for events while the system ticks.
pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

/// Discards everything; used when tracing is off.
#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// In-memory trace kept by `AiSystem` and dumped by the CLI.
#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a TraceEvent> + 'a {
        self.events.iter().filter(move |e| e.tag == tag)
    }

    /// Events about one agent, in emission order.
    pub fn for_agent(&self, agent: u64) -> impl Iterator<Item = &TraceEvent> + '_ {
        self.events.iter().filter(move |e| e.agent == agent)
    }

    /// Node indices an agent's cursor moved through.
    pub fn tree_walk(&self, agent: u64) -> Vec<u64> {
        self.for_agent(agent)
            .filter(|e| e.tag == tags::BT_STEP)
            .map(|e| e.value)
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
