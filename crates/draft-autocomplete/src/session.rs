use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
}

impl Suggestion {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Live state of an open autocomplete interaction. The suggestion list is
/// never empty and `selected_index` always stays within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    match_string: String,
    suggestions: Vec<Suggestion>,
    selected_index: usize,
}

impl Session {
    pub(crate) fn new(
        match_string: String,
        mut suggestions: Vec<Suggestion>,
        selected_index: usize,
    ) -> Self {
        if suggestions.is_empty() {
            suggestions.push(Suggestion::new(match_string.clone()));
        }
        let selected_index = if selected_index < suggestions.len() {
            selected_index
        } else {
            0
        };
        Self {
            match_string,
            suggestions,
            selected_index,
        }
    }

    pub fn match_string(&self) -> &str {
        &self.match_string
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> &Suggestion {
        &self.suggestions[self.selected_index]
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.suggestions.len();
    }

    pub fn select_prev(&mut self) {
        self.selected_index =
            (self.selected_index + self.suggestions.len() - 1) % self.suggestions.len();
    }
}
