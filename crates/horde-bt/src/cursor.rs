use crate::bt::{BtStatus, NodeId};
use crate::context::DecisionContext;
use crate::tree::BehaviorTree;

/// One agent's resumable position inside a shared [`BehaviorTree`].
///
/// `current` starts at the root. `states` keeps the last result written by
/// every node; slots a branch has not reached yet stay `Running`. `tree` names
/// the tree the cursor was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeCursor {
    tree: &'static str,
    current: NodeId,
    states: Vec<BtStatus>,
}

impl TreeCursor {
    pub fn new(tree: &BehaviorTree) -> Self {
        Self {
            tree: tree.name(),
            current: tree.root(),
            states: vec![BtStatus::Running; tree.len()],
        }
    }

    /// Name of the tree this cursor walks.
    pub fn tree(&self) -> &'static str {
        self.tree
    }

    /// Node that runs on the next [`TreeCursor::step`].
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn state(&self, id: NodeId) -> Option<BtStatus> {
        self.states.get(id.index()).copied()
    }

    pub fn states(&self) -> &[BtStatus] {
        &self.states
    }

    pub fn reset(&mut self, tree: &BehaviorTree) {
        self.tree = tree.name();
        self.current = tree.root();
        self.states.clear();
        self.states.resize(tree.len(), BtStatus::Running);
    }

    /// Run the current node once and advance the pointer.
    ///
    /// Returns the new resumption point. A cursor built for another tree is
    /// reset to the root first, even when both trees have the same size.
    pub fn step(&mut self, tree: &BehaviorTree, ctx: &mut DecisionContext<'_>) -> NodeId {
        if self.tree != tree.name()
            || self.states.len() != tree.len()
            || !tree.contains(self.current)
        {
            tracing::warn!(
                tree = tree.name(),
                previous = self.tree,
                expected = tree.len(),
                actual = self.states.len(),
                "cursor does not match tree; resetting"
            );
            self.reset(tree);
        }
        let ran = self.current;
        self.current = tree.run(ran, &mut self.states, ctx);
        tracing::trace!(tree = tree.name(), ran = %ran, next = %self.current, "cursor stepped");
        self.current
    }
}
