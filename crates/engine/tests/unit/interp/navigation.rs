//! # Navigation Tests
//!
//! Tests for descend/ascend and for turns as the only way to reach sibling
//! cells.

use rtl_core::core::State;

use crate::common::harness::run_program;
use crate::common::TestRun;

#[test]
fn test_descend_moves_to_fresh_child() {
    let mut run = TestRun::new("v");
    run.run().unwrap();
    assert_eq!(run.interp.active_cube_id().index(), 1);
    assert_eq!(run.interp.tree().len(), 2);
}

#[test]
fn test_descend_then_ascend_returns_to_same_cube() {
    let mut run = TestRun::new("v ^");
    run.run().unwrap();
    assert_eq!(run.interp.active_cube_id(), run.interp.tree().root());
}

#[test]
fn test_ascend_at_root_is_noop_not_fault() {
    let mut run = TestRun::new("^ ^ g++");
    run.run().unwrap();
    assert_eq!(run.interp.state(), State::Halted);
    assert_eq!(run.interp.active_cube_id(), run.interp.tree().root());
    assert_eq!(run.register(), 1);
}

#[test]
fn test_repeated_descend_reuses_child() {
    let mut run = TestRun::new("v ^ v ^ v");
    run.run().unwrap();
    assert_eq!(run.interp.active_cube_id().index(), 1);
    assert_eq!(run.interp.tree().len(), 2);
}

#[test]
fn test_descend_chain_allocates_in_order() {
    let mut run = TestRun::new("v v v");
    run.run().unwrap();
    assert_eq!(run.interp.active_cube_id().index(), 3);
    assert_eq!(run.interp.tree().len(), 4);
}

#[test]
fn test_cell_values_are_per_cube() {
    let mut run = TestRun::new("setd 7 v setd 9 ^");
    run.run().unwrap();
    assert_eq!(run.cell(), 7);

    let tree = run.interp.tree();
    let child = tree.cube(tree.root()).active_cell().child().unwrap();
    assert_eq!(tree.cube(child).active_cell().payload(), 9);
}

#[test]
fn test_turn_changes_which_sibling_is_active() {
    // Store 7, turn it away from the active position, and the cell reads 0;
    // the inverse turn brings the 7 back. No indexing is involved.
    let mut run = TestRun::new("setd 7 F outputd F' outputd");
    run.run().unwrap();
    assert_eq!(run.output(), "0\n7\n");
}

#[test]
fn test_rotation_tokens_execute() {
    assert_eq!(run_program("setd 3 x x' y2 y2 z' z outputd"), "3\n");
}

#[test]
fn test_descend_into_turned_cell_follows_child() {
    // A child allocated at the active cell travels with its facelet on a
    // turn; descending afterwards creates a second, different child.
    let mut run = TestRun::new("v ^ F v ^");
    run.run().unwrap();
    assert_eq!(run.interp.tree().len(), 3);
}
