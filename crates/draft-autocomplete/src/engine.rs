use draft_core::EditorState;

use crate::config::AutocompleteConfig;
use crate::keymap::{KeyCommand, bind_key};
use crate::position::{CaretRect, DeferredMeasure, PositionProbe};
use crate::session::{Session, Suggestion};
use crate::token::{block_text, insert_token, remove_token_backward};
use crate::trigger;

/// Result of routing a key through the autocomplete engine. `NotHandled`
/// falls through to the rich-text engine's default binding.
#[derive(Debug)]
pub enum CommandOutcome {
    Handled,
    Edited(EditorState),
    NotHandled,
}

/// Owns the session state machine and coordinates trigger detection,
/// filtering, token insertion and removal against immutable editor
/// snapshots. At most one session exists at a time.
pub struct Autocomplete {
    config: AutocompleteConfig,
    session: Option<Session>,
    measure: DeferredMeasure,
}

impl Autocomplete {
    pub fn new(config: AutocompleteConfig) -> Self {
        Self {
            config,
            session: None,
            measure: DeferredMeasure::new(),
        }
    }

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Runs on every editor state change. Opens a session when a single
    /// inserted character closes the trigger marker before the caret,
    /// refilters an open session against the text after the marker, and
    /// cancels the session when no marker remains at or before the caret.
    pub fn on_change(&mut self, prev: &EditorState, next: &EditorState) {
        let focus = next.selection().focus.clone();
        let new_text = block_text(next, &focus.block);

        match self.session.take() {
            None => {
                if !next.selection().is_collapsed() {
                    return;
                }
                let prev_text = block_text(prev, &focus.block);
                if trigger::should_open(&self.config.trigger, &prev_text, &new_text, focus.offset) {
                    let suggestions = self.filtered("");
                    self.session = Some(Session::new(String::new(), suggestions, 0));
                    self.measure.invalidate();
                }
            }
            Some(session) => {
                let Some(match_start) =
                    trigger::match_start(&self.config.trigger, &new_text, focus.offset)
                else {
                    // Marker deleted or caret moved away: cancel, no
                    // document mutation.
                    return;
                };
                let match_string = trigger::char_slice(&new_text, match_start..focus.offset);
                let suggestions = self.filtered(&match_string);
                self.session = Some(Session::new(
                    match_string,
                    suggestions,
                    session.selected_index(),
                ));
                self.measure.invalidate();
            }
        }
    }

    pub fn handle_key(&mut self, key: &str, state: &EditorState) -> CommandOutcome {
        match bind_key(key) {
            Some(command) => self.handle_command(command, state),
            None => CommandOutcome::NotHandled,
        }
    }

    pub fn handle_command(&mut self, command: KeyCommand, state: &EditorState) -> CommandOutcome {
        match command {
            KeyCommand::ArrowDown => match &mut self.session {
                Some(session) => {
                    session.select_next();
                    CommandOutcome::Handled
                }
                None => CommandOutcome::NotHandled,
            },
            KeyCommand::ArrowUp => match &mut self.session {
                Some(session) => {
                    session.select_prev();
                    CommandOutcome::Handled
                }
                None => CommandOutcome::NotHandled,
            },
            KeyCommand::Enter | KeyCommand::Tab => match self.commit(state) {
                Some(next) => CommandOutcome::Edited(next),
                None => CommandOutcome::NotHandled,
            },
            KeyCommand::Escape => {
                if self.session.is_some() {
                    self.cancel();
                    CommandOutcome::Handled
                } else {
                    CommandOutcome::NotHandled
                }
            }
            KeyCommand::Backspace => match remove_token_backward(state) {
                Some(next) => CommandOutcome::Edited(next),
                None => CommandOutcome::NotHandled,
            },
        }
    }

    /// Commits the highlighted suggestion. Closes the session.
    pub fn commit(&mut self, state: &EditorState) -> Option<EditorState> {
        let session = self.session.take()?;
        let label = session.selected().label.clone();
        Some(insert_token(state, &self.config.trigger, &label))
    }

    /// Pointer path: commits `suggestion` regardless of the highlighted
    /// index. Closes the session.
    pub fn commit_suggestion(
        &mut self,
        state: &EditorState,
        suggestion: &Suggestion,
    ) -> Option<EditorState> {
        self.session.take()?;
        Some(insert_token(state, &self.config.trigger, &suggestion.label))
    }

    /// Escape: pure state transition, the document is untouched.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Deferred position measurement. The host calls this strictly after
    /// the triggering mutation has been committed and rendered, so the
    /// measured caret rectangle reflects the latest state.
    pub fn after_commit(&mut self, probe: &dyn PositionProbe, state: &EditorState) {
        self.measure.run(probe, state);
    }

    pub fn list_position(&self) -> Option<CaretRect> {
        self.measure.rect()
    }

    fn filtered(&self, match_string: &str) -> Vec<Suggestion> {
        let mut suggestions = self.config.source.suggest(match_string);
        suggestions.truncate(self.config.max_suggestions);
        suggestions
    }
}
