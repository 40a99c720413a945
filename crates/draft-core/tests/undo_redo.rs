use draft_core::{ChangeKind, ContentState, EditorState, Point, Selection};

fn state_with_text(text: &str) -> EditorState {
    let content = ContentState::from_text(text);
    let selection = Selection::collapsed(Point::new("b0", text.chars().count()));
    EditorState::new(content, selection)
}

#[test]
fn each_push_is_one_undo_step() {
    let state = state_with_text("")
        .insert_plain_text("a")
        .insert_plain_text("b");
    assert_eq!(state.content().plain_text(), "ab");
    assert_eq!(state.selection().focus.offset, 2);

    let state = state.undo();
    assert_eq!(state.content().plain_text(), "a");
    assert_eq!(state.selection().focus.offset, 1);

    let state = state.undo();
    assert_eq!(state.content().plain_text(), "");
    assert_eq!(state.selection().focus.offset, 0);
    assert!(!state.can_undo());

    let state = state.redo();
    assert_eq!(state.content().plain_text(), "a");
    assert_eq!(state.selection().focus.offset, 1);
}

#[test]
fn force_selection_is_not_undoable() {
    let state = state_with_text("abc");
    let state = state.force_selection(Selection::collapsed(Point::new("b0", 1)));
    assert!(!state.can_undo());
    assert_eq!(state.selection().focus.offset, 1);
}

#[test]
fn a_new_edit_clears_the_redo_stack() {
    let state = state_with_text("")
        .insert_plain_text("a")
        .insert_plain_text("b")
        .undo();
    assert!(state.can_redo());

    let state = state.insert_plain_text("c");
    assert!(!state.can_redo());
    assert_eq!(state.content().plain_text(), "ac");
}

#[test]
fn last_change_kind_tracks_the_edit() {
    let state = state_with_text("");
    assert_eq!(state.last_change_kind(), None);

    let state = state.insert_plain_text("a");
    assert_eq!(state.last_change_kind(), Some(ChangeKind::InsertCharacters));

    let state = state.delete_backward();
    assert_eq!(
        state.last_change_kind(),
        Some(ChangeKind::BackspaceCharacter)
    );
}

#[test]
fn delete_backward_at_the_block_start_is_a_noop() {
    let state = state_with_text("abc").force_selection(Selection::collapsed(Point::new("b0", 0)));
    let state = state.delete_backward();
    assert_eq!(state.content().plain_text(), "abc");
    assert!(!state.can_undo());
}

#[test]
fn typing_over_a_selection_replaces_it() {
    let state = state_with_text("Hello").force_selection(Selection {
        anchor: Point::new("b0", 0),
        focus: Point::new("b0", 5),
    });

    let state = state.insert_plain_text("X");
    assert_eq!(state.content().plain_text(), "X");
    assert_eq!(state.selection().focus.offset, 1);
    assert!(state.selection().is_collapsed());

    let state = state.undo();
    assert_eq!(state.content().plain_text(), "Hello");
}
