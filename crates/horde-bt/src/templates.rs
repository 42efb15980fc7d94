//! The three tree shapes NPCs run.
//!
//! ```text
//! melee / chaser               stalker
//! 0 selector                   0 selector
//! ├─ 1 patrol                  ├─ 1 patrol
//! └─ 2 sequence                └─ 2 sequence
//!    ├─ 3 chase_player            ├─ 3 stalk_player
//!    └─ 4 attack_player           └─ 4 sequence
//!                                    ├─ 5 chase_player
//!                                    └─ 6 attack_player
//! ```

use horde_core::{AiResult, TreeTemplate};

use crate::bt::{CompositeKind, LeafKind, NodeId, NodeKind};
use crate::tree::{BehaviorTree, TreeBuilder};

pub fn melee() -> AiResult<BehaviorTree> {
    patrol_then_engage("melee")
}

pub fn chaser() -> AiResult<BehaviorTree> {
    patrol_then_engage("chaser")
}

pub fn stalker() -> AiResult<BehaviorTree> {
    let mut b = TreeBuilder::new("stalker", NodeKind::SELECTOR);
    b.leaf(NodeId::ROOT, LeafKind::Patrol);
    let hunt = b.composite(NodeId::ROOT, CompositeKind::Sequence);
    b.leaf(hunt, LeafKind::StalkPlayer);
    let engage = b.composite(hunt, CompositeKind::Sequence);
    b.leaf(engage, LeafKind::ChasePlayer);
    b.leaf(engage, LeafKind::AttackPlayer);
    b.build()
}

fn patrol_then_engage(name: &'static str) -> AiResult<BehaviorTree> {
    let mut b = TreeBuilder::new(name, NodeKind::SELECTOR);
    b.leaf(NodeId::ROOT, LeafKind::Patrol);
    let engage = b.composite(NodeId::ROOT, CompositeKind::Sequence);
    b.leaf(engage, LeafKind::ChasePlayer);
    b.leaf(engage, LeafKind::AttackPlayer);
    b.build()
}

/// Built topology for every [`TreeTemplate`], shared by all agents.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeCatalog {
    melee: BehaviorTree,
    stalker: BehaviorTree,
    chaser: BehaviorTree,
}

impl TreeCatalog {
    pub fn build() -> AiResult<Self> {
        Ok(Self {
            melee: melee()?,
            stalker: stalker()?,
            chaser: chaser()?,
        })
    }

    pub fn get(&self, template: TreeTemplate) -> &BehaviorTree {
        match template {
            TreeTemplate::Melee => &self.melee,
            TreeTemplate::Stalker => &self.stalker,
            TreeTemplate::Chaser => &self.chaser,
        }
    }
}
