use horde_core::{AiError, AiResult};

use crate::bt::{BtStatus, CompositeKind, LeafKind, NodeId, NodeKind};
use crate::context::DecisionContext;
use crate::{leaves, nodes};

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Exactly one parent; the root is its own parent.
    pub parent: NodeId,
    /// Ordered children, empty for leaves.
    pub children: Vec<NodeId>,
}

/// Immutable tree topology stored as a flat arena.
///
/// Children always have a larger index than their parent, so evaluation
/// recursion is bounded by the tree's depth.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorTree {
    name: &'static str,
    nodes: Vec<Node>,
}

impl BehaviorTree {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(|n| n.kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).map(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// First node of `kind`, in arena order.
    pub fn find(&self, kind: NodeKind) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.kind == kind)
            .map(|i| NodeId(i as u32))
    }

    pub fn depth(&self) -> usize {
        (0..self.nodes.len())
            .map(|i| self.path_to(NodeId(i as u32)).len())
            .max()
            .unwrap_or(0)
    }

    /// Node ids from the root down to `id`, inclusive. Empty for unknown ids.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut path = vec![id];
        let mut current = id;
        while current != NodeId::ROOT && path.len() <= self.nodes.len() {
            current = self.nodes[current.index()].parent;
            path.push(current);
        }
        path.reverse();
        path
    }

    /// Check the arena invariants the evaluator relies on.
    pub fn validate(&self) -> AiResult<()> {
        let Some(root) = self.nodes.first() else {
            return Err(AiError::InvalidTree(format!("{}: no nodes", self.name)));
        };
        if root.parent != NodeId::ROOT {
            return Err(AiError::InvalidTree(format!(
                "{}: root must be its own parent",
                self.name
            )));
        }
        for (index, node) in self.nodes.iter().enumerate().skip(1) {
            let id = NodeId(index as u32);
            if node.parent >= id {
                return Err(AiError::InvalidTree(format!(
                    "{}: node {id} has parent {} that does not precede it",
                    self.name, node.parent
                )));
            }
            if !self.nodes[node.parent.index()].children.contains(&id) {
                return Err(AiError::InvalidTree(format!(
                    "{}: node {id} is not listed by its parent {}",
                    self.name, node.parent
                )));
            }
        }
        for (index, node) in self.nodes.iter().enumerate() {
            let id = NodeId(index as u32);
            match node.kind {
                NodeKind::Composite(_) if node.children.is_empty() => {
                    return Err(AiError::InvalidTree(format!(
                        "{}: composite {id} has no children",
                        self.name
                    )));
                }
                NodeKind::Leaf(_) if !node.children.is_empty() => {
                    return Err(AiError::InvalidTree(format!(
                        "{}: leaf {id} has children",
                        self.name
                    )));
                }
                _ => {}
            }
            let misplaced = |c: &&NodeId| c.index() <= index || !self.contains(**c);
            if let Some(bad) = node.children.iter().find(misplaced) {
                return Err(AiError::InvalidTree(format!(
                    "{}: node {id} has out-of-order child {bad}",
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// Evaluate `id` for this tick and return the next resumption point.
    ///
    /// Writes the node's result (and those of any descendants it ran) into
    /// `states`, which must have one slot per node.
    pub fn run(
        &self,
        id: NodeId,
        states: &mut [BtStatus],
        ctx: &mut DecisionContext<'_>,
    ) -> NodeId {
        let node = &self.nodes[id.index()];
        let (status, next) = match node.kind {
            NodeKind::Composite(CompositeKind::Selector) => nodes::selector(self, id, states, ctx),
            NodeKind::Composite(CompositeKind::Sequence) => nodes::sequence(self, id, states, ctx),
            NodeKind::Leaf(leaf) => {
                let status = leaves::run(leaf, ctx);
                let next = if status.is_terminal() {
                    node.parent
                } else {
                    id
                };
                (status, next)
            }
        };
        tracing::trace!(
            tree = self.name,
            node = %id,
            kind = %node.kind,
            ?status,
            next = %next,
            "node ran"
        );
        states[id.index()] = status;
        next
    }
}

/// Incremental arena construction.
///
/// Structural mistakes (a child under a leaf, an unknown parent) are recorded
/// and reported by [`TreeBuilder::build`].
#[derive(Debug)]
pub struct TreeBuilder {
    name: &'static str,
    nodes: Vec<Node>,
    error: Option<String>,
}

impl TreeBuilder {
    /// Start a tree whose self-parented root has `root` kind.
    pub fn new(name: &'static str, root: NodeKind) -> Self {
        Self {
            name,
            nodes: vec![Node {
                kind: root,
                parent: NodeId::ROOT,
                children: Vec::new(),
            }],
            error: None,
        }
    }

    pub fn child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        match self.nodes.get(parent.index()).map(|n| n.kind) {
            None => {
                self.error
                    .get_or_insert_with(|| format!("unknown parent {parent} for {kind}"));
            }
            Some(NodeKind::Leaf(_)) => {
                self.error
                    .get_or_insert_with(|| format!("leaf {parent} cannot take child {kind}"));
            }
            Some(NodeKind::Composite(_)) => {
                self.nodes[parent.index()].children.push(id);
            }
        }
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        id
    }

    pub fn composite(&mut self, parent: NodeId, kind: CompositeKind) -> NodeId {
        self.child(parent, NodeKind::Composite(kind))
    }

    pub fn leaf(&mut self, parent: NodeId, kind: LeafKind) -> NodeId {
        self.child(parent, NodeKind::Leaf(kind))
    }

    pub fn build(self) -> AiResult<BehaviorTree> {
        if let Some(error) = self.error {
            return Err(AiError::InvalidTree(format!("{}: {error}", self.name)));
        }
        let tree = BehaviorTree {
            name: self.name,
            nodes: self.nodes,
        };
        tree.validate()?;
        Ok(tree)
    }
}
