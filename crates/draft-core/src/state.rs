use serde::{Deserialize, Serialize};

use crate::content::{ContentState, Point, Selection};
use crate::modifier::{self, BlockRange, RemovalDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    InsertCharacters,
    BackspaceCharacter,
    RemoveRange,
    ApplyEntity,
}

#[derive(Debug, Clone, Default)]
pub struct EditorConfig {
    pub max_undo: usize,
}

impl EditorConfig {
    fn with_defaults(mut self) -> Self {
        if self.max_undo == 0 {
            self.max_undo = 200;
        }
        self
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    content: ContentState,
    selection: Selection,
}

/// Immutable snapshot pair plus history. Every edit derives a new state from
/// the prior one; `push_state` records the edit as a single undo step.
#[derive(Debug, Clone)]
pub struct EditorState {
    content: ContentState,
    selection: Selection,
    last_change: Option<ChangeKind>,
    config: EditorConfig,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl EditorState {
    pub fn new(content: ContentState, selection: Selection) -> Self {
        Self::with_config(content, selection, EditorConfig::default())
    }

    pub fn with_config(content: ContentState, selection: Selection, config: EditorConfig) -> Self {
        Self {
            content,
            selection,
            last_change: None,
            config: config.with_defaults(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn content(&self) -> &ContentState {
        &self.content
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn last_change_kind(&self) -> Option<ChangeKind> {
        self.last_change
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Records an undo-visible edit: the prior snapshot is pushed onto the
    /// undo stack and the redo stack is cleared.
    pub fn push_state(mut self, content: ContentState, change: ChangeKind) -> Self {
        self.undo_stack.push(Snapshot {
            content: std::mem::replace(&mut self.content, content),
            selection: self.selection.clone(),
        });
        if self.undo_stack.len() > self.config.max_undo {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        self.last_change = Some(change);
        self
    }

    /// Moves the caret without recording an undo entry.
    pub fn force_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn undo(mut self) -> Self {
        let Some(snapshot) = self.undo_stack.pop() else {
            return self;
        };
        self.redo_stack.push(Snapshot {
            content: std::mem::replace(&mut self.content, snapshot.content),
            selection: std::mem::replace(&mut self.selection, snapshot.selection),
        });
        self
    }

    pub fn redo(mut self) -> Self {
        let Some(snapshot) = self.redo_stack.pop() else {
            return self;
        };
        self.undo_stack.push(Snapshot {
            content: std::mem::replace(&mut self.content, snapshot.content),
            selection: std::mem::replace(&mut self.selection, snapshot.selection),
        });
        self
    }

    /// Types `text` at the caret; a same-block selection is replaced first.
    pub fn insert_plain_text(self, text: &str) -> Self {
        let selection = self.selection.clone();

        if !selection.is_collapsed() {
            if selection.anchor.block != selection.focus.block {
                return self;
            }
            let (start, end) = ordered_offsets(&selection);
            let range = BlockRange::new(selection.focus.block.clone(), start..end);
            let Ok(content) = modifier::replace_text_in_range(&self.content, &range, text, None)
            else {
                return self;
            };
            let caret = Point::new(selection.focus.block.clone(), start + text.chars().count());
            return self
                .push_state(content, ChangeKind::InsertCharacters)
                .force_selection(Selection::collapsed(caret));
        }

        let caret = selection.focus;
        let Some(block) = self.content.block(&caret.block) else {
            return self;
        };
        let offset = caret.offset.min(block.char_len());
        let Ok(content) = modifier::insert_text(&self.content, &caret, text) else {
            return self;
        };
        let after = Point::new(caret.block.clone(), offset + text.chars().count());
        self.push_state(content, ChangeKind::InsertCharacters)
            .force_selection(Selection::collapsed(after))
    }

    /// Ordinary backspace: removes the selected range, or the single
    /// character before a collapsed caret.
    pub fn delete_backward(self) -> Self {
        let selection = self.selection.clone();

        if !selection.is_collapsed() {
            if selection.anchor.block != selection.focus.block {
                return self;
            }
            let (start, end) = ordered_offsets(&selection);
            let range = BlockRange::new(selection.focus.block.clone(), start..end);
            let Ok(content) =
                modifier::remove_range(&self.content, &range, RemovalDirection::Backward)
            else {
                return self;
            };
            let caret = Point::new(selection.focus.block.clone(), start);
            return self
                .push_state(content, ChangeKind::RemoveRange)
                .force_selection(Selection::collapsed(caret));
        }

        let caret = selection.focus;
        if caret.offset == 0 {
            return self;
        }
        let range = BlockRange::new(caret.block.clone(), caret.offset..caret.offset);
        let Ok(content) = modifier::remove_range(&self.content, &range, RemovalDirection::Backward)
        else {
            return self;
        };
        let after = Point::new(caret.block.clone(), caret.offset - 1);
        self.push_state(content, ChangeKind::BackspaceCharacter)
            .force_selection(Selection::collapsed(after))
    }
}

fn ordered_offsets(selection: &Selection) -> (usize, usize) {
    let (a, b) = (selection.anchor.offset, selection.focus.offset);
    (a.min(b), a.max(b))
}
