use draft_core::{
    BlockRange, ChangeKind, EditorState, EntityData, Mutability, Point, RemovalDirection,
    Selection, insert_text, remove_range, replace_text_in_range,
};
use serde_json::Value;

use crate::trigger;

pub const TOKEN_ENTITY_KIND: &str = "autocomplete_token";

/// Zero-width, entity-free character inserted after every committed token.
/// An immutable entity renders as non-editable, which blocks the caret from
/// landing just after it; the spacer supplies a valid editable position.
pub const SPACER: char = '\u{200B}';

/// Commits `label` as an atomic entity-tagged run replacing the marker-to-
/// caret range, followed by one spacer character. Falls back to plain
/// untagged insertion at the caret when no marker can be found.
pub fn insert_token(state: &EditorState, trigger: &str, label: &str) -> EditorState {
    let caret = state.selection().focus.clone();
    let text = block_text(state, &caret.block);

    let Some(range) = trigger::marker_range(trigger, &text, caret.offset) else {
        return state.clone().insert_plain_text(label);
    };

    let mut data = EntityData::new();
    data.insert("text".to_string(), Value::String(label.to_string()));
    let (content, entity_key) =
        state
            .content()
            .create_entity(TOKEN_ENTITY_KIND, Mutability::Immutable, data);

    let token_range = BlockRange::new(caret.block.clone(), range.clone());
    let Ok(content) = replace_text_in_range(&content, &token_range, label, Some(&entity_key))
    else {
        return state.clone();
    };

    let token_end = range.start + label.chars().count();
    let spacer_at = Point::new(caret.block.clone(), token_end);
    let Ok(content) = insert_text(&content, &spacer_at, &SPACER.to_string()) else {
        return state.clone();
    };

    let after = Selection::collapsed(Point::new(caret.block.clone(), token_end + 1));
    state
        .clone()
        .push_state(content, ChangeKind::ApplyEntity)
        .force_selection(after)
}

/// Intercepts backward deletion at a collapsed caret. When the character
/// before the caret belongs to a committed token, the token's whole run is
/// removed in one mutation and the caret collapses to the run's start.
/// `None` signals "not handled": the caller applies its default deletion.
pub fn remove_token_backward(state: &EditorState) -> Option<EditorState> {
    let selection = state.selection();
    if !selection.is_collapsed() {
        return None;
    }
    let caret = selection.focus.clone();
    if caret.offset == 0 {
        return None;
    }

    let block = state.content().block(&caret.block)?;
    let entity_key = block.entity_at(caret.offset - 1)?.clone();
    let entity = state.content().entity(&entity_key)?;
    if entity.kind != TOKEN_ENTITY_KIND {
        return None;
    }

    let run = block.entity_run_at(caret.offset - 1);
    let range = BlockRange::new(caret.block.clone(), run.clone());
    let content = remove_range(state.content(), &range, RemovalDirection::Backward).ok()?;

    let after = Selection::collapsed(Point::new(caret.block.clone(), run.start));
    Some(
        state
            .clone()
            .push_state(content, ChangeKind::RemoveRange)
            .force_selection(after),
    )
}

pub(crate) fn block_text(state: &EditorState, block_key: &str) -> String {
    state
        .content()
        .block(block_key)
        .map(|block| block.text.clone())
        .unwrap_or_default()
}
