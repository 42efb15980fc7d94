use core::fmt::{self, Debug};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier for an agent.
///
/// Deterministic simulation requires:
/// - stable ordering (`Ord`)
/// - a stable numeric ID (`stable_id`) for traces and logs
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

/// AI classification carried by every NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentKind {
    MeleeBrute,
    /// Tougher variant of [`AgentKind::MeleeBrute`]; same decision tree.
    Miniboss,
    RangedStalker,
    SimpleChaser,
    /// Driven by the flocking pass instead of a behavior tree.
    SwarmFlyer,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::MeleeBrute,
        AgentKind::Miniboss,
        AgentKind::RangedStalker,
        AgentKind::SimpleChaser,
        AgentKind::SwarmFlyer,
    ];

    /// Tree topology evaluated for this kind, `None` for flocking agents.
    pub fn template(self) -> Option<TreeTemplate> {
        match self {
            AgentKind::MeleeBrute | AgentKind::Miniboss => Some(TreeTemplate::Melee),
            AgentKind::RangedStalker => Some(TreeTemplate::Stalker),
            AgentKind::SimpleChaser => Some(TreeTemplate::Chaser),
            AgentKind::SwarmFlyer => None,
        }
    }

    pub fn is_swarm(self) -> bool {
        matches!(self, AgentKind::SwarmFlyer)
    }

    /// Whether should-attack is decided by the pack-coordination scan.
    pub fn coordinates_with_pack(self) -> bool {
        matches!(self, AgentKind::RangedStalker)
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::MeleeBrute => "melee_brute",
            AgentKind::Miniboss => "miniboss",
            AgentKind::RangedStalker => "ranged_stalker",
            AgentKind::SimpleChaser => "simple_chaser",
            AgentKind::SwarmFlyer => "swarm_flyer",
        };
        f.write_str(name)
    }
}

/// The three prebuilt tree shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TreeTemplate {
    Melee,
    Stalker,
    Chaser,
}
