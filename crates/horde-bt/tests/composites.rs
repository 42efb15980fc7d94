use horde_bt::{
    BtStatus, CompositeKind, DecisionContext, LeafKind, LeafTuning, NodeId, NodeKind, Perception,
    TreeBuilder, TreeCursor,
};
use horde_core::{Motion, Vec2};

struct Fixture {
    agent: Motion,
    player: Motion,
    requested: bool,
    tuning: LeafTuning,
}

impl Fixture {
    fn new() -> Self {
        Self {
            agent: Motion::new(Vec2::new(0.0, 0.0), 2.0),
            player: Motion::new(Vec2::new(100.0, 0.0), 3.0),
            requested: false,
            tuning: LeafTuning::default(),
        }
    }

    fn ctx(&mut self, perception: Perception) -> DecisionContext<'_> {
        DecisionContext::new(
            perception,
            200.0,
            &mut self.agent,
            &self.player,
            &mut self.requested,
            &self.tuning,
        )
    }
}

fn nearby() -> Perception {
    Perception {
        player_nearby: true,
        player_attackable: false,
        should_attack: true,
        rand: 500,
        rand2: 500,
    }
}

fn attackable() -> Perception {
    Perception {
        player_attackable: true,
        ..nearby()
    }
}

fn away() -> Perception {
    Perception {
        player_nearby: false,
        ..nearby()
    }
}

#[test]
fn selector_suspends_at_first_running_child() {
    let mut b = TreeBuilder::new("sel", NodeKind::SELECTOR);
    let patrol = b.leaf(NodeId::ROOT, LeafKind::Patrol);
    let chase = b.leaf(NodeId::ROOT, LeafKind::ChasePlayer);
    let tree = b.build().unwrap();
    let mut cursor = TreeCursor::new(&tree);
    let mut fx = Fixture::new();

    let next = cursor.step(&tree, &mut fx.ctx(nearby()));
    assert_eq!(next, chase);
    assert_eq!(cursor.state(patrol), Some(BtStatus::Failure));
    assert_eq!(cursor.state(chase), Some(BtStatus::Running));
    assert_eq!(cursor.state(NodeId::ROOT), Some(BtStatus::Running));

    // Resumes directly at the running leaf; patrol is not re-evaluated.
    let next = cursor.step(&tree, &mut fx.ctx(nearby()));
    assert_eq!(next, chase);

    // Terminal leaf bubbles to its parent.
    let next = cursor.step(&tree, &mut fx.ctx(attackable()));
    assert_eq!(next, NodeId::ROOT);
    assert_eq!(cursor.state(chase), Some(BtStatus::Success));

    // The self-parented root keeps the pointer inside the tree.
    let next = cursor.step(&tree, &mut fx.ctx(attackable()));
    assert_eq!(next, NodeId::ROOT);
    assert_eq!(cursor.state(NodeId::ROOT), Some(BtStatus::Success));
}

#[test]
fn selector_fails_only_when_every_child_fails() {
    let mut b = TreeBuilder::new("sel", NodeKind::SELECTOR);
    b.leaf(NodeId::ROOT, LeafKind::AttackPlayer);
    b.leaf(NodeId::ROOT, LeafKind::ChasePlayer);
    let tree = b.build().unwrap();
    let mut cursor = TreeCursor::new(&tree);
    let mut fx = Fixture::new();

    let next = cursor.step(&tree, &mut fx.ctx(away()));
    assert_eq!(next, NodeId::ROOT);
    assert_eq!(cursor.state(NodeId::ROOT), Some(BtStatus::Failure));
    assert!(!fx.requested);
}

#[test]
fn sequence_succeeds_through_and_suspends_at_running() {
    let mut b = TreeBuilder::new("seq", NodeKind::SEQUENCE);
    let chase = b.leaf(NodeId::ROOT, LeafKind::ChasePlayer);
    let attack = b.leaf(NodeId::ROOT, LeafKind::AttackPlayer);
    let tree = b.build().unwrap();
    let mut cursor = TreeCursor::new(&tree);
    let mut fx = Fixture::new();

    let next = cursor.step(&tree, &mut fx.ctx(attackable()));
    assert_eq!(next, attack);
    assert_eq!(cursor.state(chase), Some(BtStatus::Success));
    assert!(fx.requested);

    let next = cursor.step(&tree, &mut fx.ctx(away()));
    assert_eq!(next, NodeId::ROOT);
    assert_eq!(cursor.state(attack), Some(BtStatus::Failure));
    assert!(!fx.requested);

    let next = cursor.step(&tree, &mut fx.ctx(away()));
    assert_eq!(next, NodeId::ROOT);
    assert_eq!(cursor.state(NodeId::ROOT), Some(BtStatus::Failure));
}

#[test]
fn sequence_stops_at_first_failure() {
    let mut b = TreeBuilder::new("seq", NodeKind::SEQUENCE);
    let patrol = b.leaf(NodeId::ROOT, LeafKind::Patrol);
    let attack = b.leaf(NodeId::ROOT, LeafKind::AttackPlayer);
    let tree = b.build().unwrap();
    let mut cursor = TreeCursor::new(&tree);
    let mut fx = Fixture::new();
    fx.requested = true;

    cursor.step(&tree, &mut fx.ctx(attackable()));
    assert_eq!(cursor.state(patrol), Some(BtStatus::Failure));
    assert_eq!(cursor.state(NodeId::ROOT), Some(BtStatus::Failure));
    // Attack never ran, so it left the request alone.
    assert_eq!(cursor.state(attack), Some(BtStatus::Running));
    assert!(fx.requested);
}

#[test]
fn composites_rescan_from_the_first_child() {
    // Root sequence whose first child succeeds every time the player is
    // attackable: re-entering the root must run it again.
    let mut b = TreeBuilder::new("rescan", NodeKind::SEQUENCE);
    let inner = b.composite(NodeId::ROOT, CompositeKind::Selector);
    b.leaf(inner, LeafKind::ChasePlayer);
    let attack = b.leaf(NodeId::ROOT, LeafKind::AttackPlayer);
    let tree = b.build().unwrap();
    let mut cursor = TreeCursor::new(&tree);
    let mut fx = Fixture::new();

    assert_eq!(cursor.step(&tree, &mut fx.ctx(attackable())), attack);
    assert_eq!(cursor.step(&tree, &mut fx.ctx(away())), NodeId::ROOT);

    fx.agent.velocity = Vec2::new(4.0, 0.0);
    cursor.step(&tree, &mut fx.ctx(away()));
    assert_eq!(cursor.state(inner), Some(BtStatus::Failure));
    // The chase leaf ran again and halved velocity on failure.
    assert_eq!(fx.agent.velocity, Vec2::new(2.0, 0.0));
}

#[test]
fn cursor_resets_when_used_with_another_tree() {
    let mut small = TreeBuilder::new("small", NodeKind::SELECTOR);
    small.leaf(NodeId::ROOT, LeafKind::Patrol);
    let small = small.build().unwrap();
    let large = horde_bt::templates::stalker().unwrap();

    let mut cursor = TreeCursor::new(&large);
    let mut fx = Fixture::new();
    cursor.step(&large, &mut fx.ctx(away()));
    assert_eq!(cursor.current(), NodeId(1));

    let next = cursor.step(&small, &mut fx.ctx(away()));
    assert_eq!(next, NodeId(1));
    assert_eq!(cursor.states().len(), small.len());
}

#[test]
fn cursor_resets_for_a_different_tree_of_the_same_size() {
    let melee = horde_bt::templates::melee().unwrap();
    let chaser = horde_bt::templates::chaser().unwrap();
    assert_eq!(melee.len(), chaser.len());

    let mut cursor = TreeCursor::new(&melee);
    let mut fx = Fixture::new();
    // Nearby player: patrol fails, the root selector suspends inside the chase leaf.
    cursor.step(&melee, &mut fx.ctx(nearby()));
    cursor.step(&melee, &mut fx.ctx(nearby()));
    assert_ne!(cursor.current(), NodeId::ROOT);

    cursor.step(&chaser, &mut fx.ctx(away()));
    assert_eq!(cursor.tree(), "chaser");
    // Restarted at the chaser root: patrol ran and suspended.
    assert_eq!(cursor.current(), NodeId(1));
}
