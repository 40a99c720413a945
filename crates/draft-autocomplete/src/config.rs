use std::sync::Arc;

use crate::session::Suggestion;

const DEFAULT_TRIGGER: &str = "<>";
const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Candidate sourcing boundary: maps the current match string to an ordered
/// candidate list. Implementations may look candidates up however they like;
/// the engine only sees the returned list.
pub trait SuggestionSource: Send + Sync {
    fn suggest(&self, match_string: &str) -> Vec<Suggestion>;
}

/// Fixed candidate list filtered by case-insensitive prefix match.
pub struct StaticSource {
    candidates: Vec<String>,
}

impl StaticSource {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }
}

impl SuggestionSource for StaticSource {
    fn suggest(&self, match_string: &str) -> Vec<Suggestion> {
        let needle = match_string.to_lowercase();
        self.candidates
            .iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&needle))
            .map(|candidate| Suggestion::new(candidate.as_str()))
            .collect()
    }
}

#[derive(Clone)]
pub struct AutocompleteConfig {
    pub trigger: String,
    pub max_suggestions: usize,
    pub source: Arc<dyn SuggestionSource>,
}

impl AutocompleteConfig {
    pub fn new(source: Arc<dyn SuggestionSource>) -> Self {
        Self {
            trigger: DEFAULT_TRIGGER.to_string(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            source,
        }
    }

    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        let trigger = trigger.into();
        if !trigger.is_empty() {
            self.trigger = trigger;
        }
        self
    }

    pub fn max_suggestions(mut self, max_suggestions: usize) -> Self {
        if max_suggestions > 0 {
            self.max_suggestions = max_suggestions;
        }
        self
    }
}
