mod common;

use common::*;

use kbdsim_core::Action;

/// default row: ´ a z; table composes ´ + a only
fn deadkey_definition() -> kbdsim_core::SourceDefinition {
    let mut definition = desktop_definition(&[("default", "´ a z")]);
    definition.transforms = Some(transform_table(&[("´", &[("a", "á")])]));
    definition
}

#[test]
fn test_deadkey_round_trip() {
    let (mut engine, layout) = engine_for(&deadkey_definition());

    // the trigger commits nothing and goes pending
    assert_eq!(click_key(&mut engine, &layout, "Backquote"), Action::None);
    assert_eq!(engine.pending_deadkey(), Some("´"));

    assert_commits(&mut engine, &layout, "Digit1", "á");
    assert_eq!(engine.pending_deadkey(), None);
}

#[test]
fn test_unmatched_combination_commits_both_characters() {
    let (mut engine, layout) = engine_for(&deadkey_definition());

    click_key(&mut engine, &layout, "Backquote");
    // no entry for ´ + z: literal concatenation, nothing is lost
    assert_commits(&mut engine, &layout, "Digit2", "´z");
    assert_eq!(engine.pending_deadkey(), None);
}

#[test]
fn test_deadkey_followed_by_deadkey() {
    let (mut engine, layout) = engine_for(&deadkey_definition());

    click_key(&mut engine, &layout, "Backquote");
    // a pending deadkey always consumes the next output, even another trigger
    assert_commits(&mut engine, &layout, "Backquote", "´´");
    assert_eq!(engine.pending_deadkey(), None);
}

#[test]
fn test_backspace_cancels_pending_deadkey_without_deletion() {
    let (mut engine, layout) = engine_for(&deadkey_definition());

    click_key(&mut engine, &layout, "Backquote");
    assert_eq!(click_key(&mut engine, &layout, "Backspace"), Action::None);
    assert_eq!(engine.pending_deadkey(), None);

    // the cancelled trigger is gone: a now commits plain
    assert_commits(&mut engine, &layout, "Digit1", "a");

    // without a pending deadkey, backspace requests a real deletion
    assert_eq!(click_key(&mut engine, &layout, "Backspace"), Action::DeleteBackward);
}

#[test]
fn test_enter_flushes_pending_deadkey_verbatim() {
    let (mut engine, layout) = engine_for(&deadkey_definition());

    click_key(&mut engine, &layout, "Backquote");
    assert_commits(&mut engine, &layout, "Enter", "´\n");

    click_key(&mut engine, &layout, "Backquote");
    assert_commits(&mut engine, &layout, "Tab", "´\t");
}

#[test]
fn test_deadkey_from_shift_layer_consumes_latch() {
    let mut definition = desktop_definition(&[("default", "` a"), ("shift", "´ A")]);
    definition.transforms = Some(transform_table(&[("´", &[("a", "á")])]));
    let (mut engine, layout) = engine_for(&definition);

    click_key(&mut engine, &layout, "ShiftLeft");
    // the shift layer's trigger goes pending and consumes the latch
    assert_eq!(click_key(&mut engine, &layout, "Backquote"), Action::None);
    assert_eq!(engine.pending_deadkey(), Some("´"));
    assert!(!engine.modifiers().shift);

    assert_commits(&mut engine, &layout, "Digit1", "á");
}

#[test]
fn test_layout_swap_drops_pending_deadkey() {
    let (mut engine, layout) = engine_for(&deadkey_definition());

    click_key(&mut engine, &layout, "Backquote");
    assert_eq!(engine.pending_deadkey(), Some("´"));

    // the replacement layout has no transforms at all
    let plain = desktop_definition(&[("default", "´ a z")]);
    engine.set_layout(std::sync::Arc::new(transform_windows(&plain)));
    assert_eq!(engine.pending_deadkey(), None);

    // the same character now commits directly
    assert_commits(&mut engine, &layout, "Backquote", "´");
}

#[test]
fn test_space_resolves_pending_deadkey_through_the_table() {
    let mut definition = desktop_definition(&[("default", "´ a")]);
    definition.transforms = Some(transform_table(&[("´", &[("a", "á"), (" ", "´")])]));
    let (mut engine, layout) = engine_for(&definition);

    click_key(&mut engine, &layout, "Backquote");
    // a table entry for space commits the trigger itself
    assert_commits(&mut engine, &layout, "Space", "´");
}
