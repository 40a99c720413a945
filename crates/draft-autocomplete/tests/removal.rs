use std::sync::Arc;

use draft_autocomplete::{
    Autocomplete, AutocompleteConfig, CommandOutcome, StaticSource, remove_token_backward,
};
use draft_core::{
    BlockRange, ContentState, EditorState, EntityData, Mutability, Point, Selection,
    replace_text_in_range,
};

fn autocomplete() -> Autocomplete {
    let source = Arc::new(StaticSource::new([
        "React",
        "Redux",
        "DraftJS",
        "TypeScript",
    ]));
    Autocomplete::new(AutocompleteConfig::new(source))
}

fn state_with_text(text: &str) -> EditorState {
    let content = ContentState::from_text(text);
    let selection = Selection::collapsed(Point::new("b0", text.chars().count()));
    EditorState::new(content, selection)
}

fn type_str(autocomplete: &mut Autocomplete, state: &mut EditorState, text: &str) {
    for ch in text.chars() {
        let prev = state.clone();
        *state = prev.clone().insert_plain_text(&ch.to_string());
        autocomplete.on_change(&prev, state);
    }
}

/// Commits "Redux" into `"Hello "` and returns the resulting state, with
/// the caret just after the spacer.
fn committed_state(ac: &mut Autocomplete) -> EditorState {
    let mut state = state_with_text("Hello ");
    type_str(ac, &mut state, "<>R");
    ac.handle_key("down", &state);
    let CommandOutcome::Edited(state) = ac.handle_key("enter", &state) else {
        panic!("Expected a document edit");
    };
    state
}

#[test]
fn commit_then_two_deletions_round_trips_to_the_pre_trigger_text() {
    let mut ac = autocomplete();
    let state = committed_state(&mut ac);
    assert_eq!(state.content().plain_text(), "Hello Redux\u{200B}");

    // The character before the caret is the entity-free spacer, so the
    // first deletion falls through to the default single-char removal.
    let outcome = ac.handle_key("backspace", &state);
    assert!(matches!(outcome, CommandOutcome::NotHandled));
    let prev = state.clone();
    let state = prev.clone().delete_backward();
    ac.on_change(&prev, &state);
    assert_eq!(state.content().plain_text(), "Hello Redux");

    // The second deletion removes the whole token run at once.
    let CommandOutcome::Edited(state) = ac.handle_key("backspace", &state) else {
        panic!("Expected the token to be removed");
    };
    assert_eq!(state.content().plain_text(), "Hello ");
    assert!(state.selection().is_collapsed());
    assert_eq!(state.selection().focus, Point::new("b0", 6));

    let block = state.content().block("b0").unwrap();
    assert!(block.entity.iter().all(|key| key.is_none()));
}

#[test]
fn token_is_never_partially_deleted() {
    let mut ac = autocomplete();
    let state = committed_state(&mut ac);

    let state = state.delete_backward();
    let state = remove_token_backward(&state).unwrap();
    let text = state.content().plain_text();
    assert!(!text.contains("Red"));
    assert_eq!(text, "Hello ");
}

#[test]
fn removal_only_spans_the_token_run() {
    let content = ContentState::from_text("Hello  world");
    let selection = Selection::collapsed(Point::new("b0", 6));
    let mut state = EditorState::new(content, selection);
    let mut ac = autocomplete();

    type_str(&mut ac, &mut state, "<>");
    let CommandOutcome::Edited(state) = ac.handle_key("enter", &state) else {
        panic!("Expected a document edit");
    };
    assert_eq!(state.content().plain_text(), "Hello React\u{200B} world");

    // Caret placed directly after the token's last character.
    let state = state.force_selection(Selection::collapsed(Point::new("b0", 11)));
    let state = remove_token_backward(&state).unwrap();

    assert_eq!(state.content().plain_text(), "Hello \u{200B} world");
    assert_eq!(state.selection().focus, Point::new("b0", 6));
}

#[test]
fn plain_text_before_the_caret_is_not_handled() {
    let state = state_with_text("Hello");
    assert!(remove_token_backward(&state).is_none());
}

#[test]
fn caret_at_the_block_start_is_not_handled() {
    let state =
        state_with_text("Hello").force_selection(Selection::collapsed(Point::new("b0", 0)));
    assert!(remove_token_backward(&state).is_none());
}

#[test]
fn a_non_collapsed_selection_is_not_handled() {
    let mut ac = autocomplete();
    let state = committed_state(&mut ac).force_selection(Selection {
        anchor: Point::new("b0", 6),
        focus: Point::new("b0", 11),
    });
    assert!(remove_token_backward(&state).is_none());

    let outcome = ac.handle_key("backspace", &state);
    assert!(matches!(outcome, CommandOutcome::NotHandled));
}

#[test]
fn foreign_entity_kinds_are_not_handled() {
    let content = ContentState::from_text("see docs now");
    let (content, key) = content.create_entity("link", Mutability::Mutable, EntityData::new());
    let content =
        replace_text_in_range(&content, &BlockRange::new("b0", 4..8), "docs", Some(&key)).unwrap();

    let state = EditorState::new(content, Selection::collapsed(Point::new("b0", 8)));
    assert!(remove_token_backward(&state).is_none());
}
