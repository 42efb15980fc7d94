//! Resumable behavior trees built on `horde-core`.
//!
//! Trees are flat arenas of nodes addressed by [`NodeId`]. Topology is built
//! once per [`TreeTemplate`](horde_core::TreeTemplate) and shared; every agent
//! owns a [`TreeCursor`] holding its resumption pointer and the per-node
//! results of its last evaluation.
//!
//! Each tick the cursor runs exactly one node. That node returns the node to
//! run *next* tick: itself while running, a descendant to resume inside it, or
//! its parent to bubble a terminal result up. Roots are their own parent, so
//! the pointer never leaves the tree.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod context;
pub mod cursor;
pub mod leaves;
mod nodes;
pub mod templates;
pub mod tree;

pub use bt::{BtStatus, CompositeKind, LeafKind, NodeId, NodeKind};
pub use context::{DecisionContext, LeafTuning, Perception};
pub use cursor::TreeCursor;
pub use templates::TreeCatalog;
pub use tree::{BehaviorTree, Node, TreeBuilder};
