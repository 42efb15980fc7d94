//! Composite evaluation.
//!
//! Both composites rescan their children from the first one on every call;
//! they keep no per-node child index. A running child past index 0 is only
//! reached again when every earlier sibling fails in that same scan.

use crate::bt::{BtStatus, NodeId};
use crate::context::DecisionContext;
use crate::tree::BehaviorTree;

/// OR over children: first `Success` wins, first `Running` suspends there.
pub(crate) fn selector(
    tree: &BehaviorTree,
    id: NodeId,
    states: &mut [BtStatus],
    ctx: &mut DecisionContext<'_>,
) -> (BtStatus, NodeId) {
    let parent = tree.parent(id).unwrap_or(id);
    for &child in tree.children(id) {
        let next = tree.run(child, states, ctx);
        match states[child.index()] {
            BtStatus::Success => return (BtStatus::Success, parent),
            BtStatus::Running => return (BtStatus::Running, next),
            BtStatus::Failure => continue,
        }
    }
    (BtStatus::Failure, parent)
}

/// AND over children: first `Failure` loses, first `Running` suspends there.
pub(crate) fn sequence(
    tree: &BehaviorTree,
    id: NodeId,
    states: &mut [BtStatus],
    ctx: &mut DecisionContext<'_>,
) -> (BtStatus, NodeId) {
    let parent = tree.parent(id).unwrap_or(id);
    for &child in tree.children(id) {
        let next = tree.run(child, states, ctx);
        match states[child.index()] {
            BtStatus::Failure => return (BtStatus::Failure, parent),
            BtStatus::Running => return (BtStatus::Running, next),
            BtStatus::Success => continue,
        }
    }
    (BtStatus::Success, parent)
}
