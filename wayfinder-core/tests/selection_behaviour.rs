//! Behavioural tests for selection marking.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfinder_core::test_support::ids;
use wayfinder_core::{NodeId, Selection};

#[derive(Debug, Default)]
struct SelectionWorld {
    selection: RefCell<Selection>,
}

impl SelectionWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn mark(&self, node: &str) {
        self.selection
            .borrow_mut()
            .toggle_mark(&node.into())
            .expect("only selected locations are marked");
    }
}

#[fixture]
fn world() -> SelectionWorld {
    SelectionWorld::default()
}

#[given("locations a, b and c are selected")]
fn given_selected(world: &SelectionWorld) {
    world.selection.replace(Selection::new(ids(&["a", "b", "c"])));
}

#[when("location a is marked")]
fn when_mark_a(world: &SelectionWorld) {
    world.mark("a");
}

#[when("location b is marked")]
fn when_mark_b(world: &SelectionWorld) {
    world.mark("b");
}

#[when("location c is marked")]
fn when_mark_c(world: &SelectionWorld) {
    world.mark("c");
}

#[when("location a is deselected")]
fn when_deselect_a(world: &SelectionWorld) {
    let selected = world.selection.borrow_mut().toggle(&"a".into());
    assert!(!selected);
}

#[then("a is the start")]
fn then_start_a(world: &SelectionWorld) {
    assert_eq!(world.selection.borrow().start(), Some(&NodeId::from("a")));
}

#[then("b is the start")]
fn then_start_b(world: &SelectionWorld) {
    assert_eq!(world.selection.borrow().start(), Some(&NodeId::from("b")));
}

#[then("there is no start")]
fn then_no_start(world: &SelectionWorld) {
    assert!(world.selection.borrow().start().is_none());
}

#[then("the mandatory locations are b")]
fn then_mandatory_b(world: &SelectionWorld) {
    assert_eq!(world.selection.borrow().effective_mandatory(), ids(&["b"]));
}

#[then("the mandatory locations are a and c")]
fn then_mandatory_a_c(world: &SelectionWorld) {
    assert_eq!(
        world.selection.borrow().effective_mandatory(),
        ids(&["a", "c"])
    );
}

#[then("the optional locations are b")]
fn then_optional_b(world: &SelectionWorld) {
    assert_eq!(world.selection.borrow().optional(), ids(&["b"]));
}

#[then("the optional locations are b and c")]
fn then_optional_b_c(world: &SelectionWorld) {
    assert_eq!(world.selection.borrow().optional(), ids(&["b", "c"]));
}

#[scenario(path = "tests/features/selection.feature", index = 0)]
fn first_mark_sets_start(world: SelectionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/selection.feature", index = 1)]
fn later_marks_are_mandatory(world: SelectionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/selection.feature", index = 2)]
fn deselecting_start(world: SelectionWorld) {
    let _ = world;
}
