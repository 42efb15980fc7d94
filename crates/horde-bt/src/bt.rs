use core::fmt;

/// Tri-state node result.
///
/// `Success` and `Failure` are the terminal "true"/"false" outcomes; `Running`
/// means the branch is incomplete and must resume next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BtStatus {
    /// Also the pre-first-tick default: never read as a terminal result.
    #[default]
    Running,
    Success,
    Failure,
}

impl BtStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, BtStatus::Running)
    }
}

/// Stable index of a node inside its [`BehaviorTree`](crate::BehaviorTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    /// Logical OR over children.
    Selector,
    /// Logical AND over children.
    Sequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Patrol,
    ChasePlayer,
    AttackPlayer,
    StalkPlayer,
}

/// Closed set of node kinds, split into the two capability groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Composite(CompositeKind),
    Leaf(LeafKind),
}

impl NodeKind {
    pub const SELECTOR: NodeKind = NodeKind::Composite(CompositeKind::Selector);
    pub const SEQUENCE: NodeKind = NodeKind::Composite(CompositeKind::Sequence);

    pub fn is_composite(self) -> bool {
        matches!(self, NodeKind::Composite(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Composite(CompositeKind::Selector) => "selector",
            NodeKind::Composite(CompositeKind::Sequence) => "sequence",
            NodeKind::Leaf(LeafKind::Patrol) => "patrol",
            NodeKind::Leaf(LeafKind::ChasePlayer) => "chase_player",
            NodeKind::Leaf(LeafKind::AttackPlayer) => "attack_player",
            NodeKind::Leaf(LeafKind::StalkPlayer) => "stalk_player",
        };
        f.write_str(name)
    }
}
