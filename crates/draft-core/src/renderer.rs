use std::collections::HashMap;

use crate::content::{ContentState, Entity, EntityKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedSpan {
    pub text: String,
    pub entity: Option<EntityKey>,
    pub editable: bool,
}

impl DecoratedSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entity: None,
            editable: true,
        }
    }
}

pub trait EntityRenderer: Send + Sync {
    fn kind(&self) -> &'static str;
    fn render(&self, entity: &Entity, text: &str) -> DecoratedSpan;
}

#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn EntityRenderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, renderer: Box<dyn EntityRenderer>) -> Result<(), String> {
        let kind = renderer.kind().to_string();
        if self.renderers.contains_key(&kind) {
            return Err(format!("Duplicate renderer kind: {kind}"));
        }
        self.renderers.insert(kind, renderer);
        Ok(())
    }

    pub fn renderer(&self, kind: &str) -> Option<&dyn EntityRenderer> {
        self.renderers.get(kind).map(|renderer| renderer.as_ref())
    }

    /// Splits a block into maximal entity runs and plain runs. Entity kinds
    /// without a registered renderer degrade to plain editable spans.
    pub fn decorate_block(&self, content: &ContentState, block_key: &str) -> Vec<DecoratedSpan> {
        let Some(block) = content.block(block_key) else {
            return Vec::new();
        };

        let chars: Vec<char> = block.text.chars().collect();
        let mut spans: Vec<DecoratedSpan> = Vec::new();
        let mut ix = 0;

        while ix < chars.len() {
            let entity_key = block.entity.get(ix).cloned().flatten();
            let mut end = ix + 1;
            while end < chars.len() && block.entity.get(end).cloned().flatten() == entity_key {
                end += 1;
            }
            let text: String = chars[ix..end].iter().collect();

            let span = match &entity_key {
                Some(key) => {
                    let rendered = content
                        .entity(key)
                        .and_then(|entity| self.renderer(&entity.kind).map(|r| (entity, r)))
                        .map(|(entity, renderer)| renderer.render(entity, &text));
                    match rendered {
                        Some(mut span) => {
                            span.entity = Some(key.clone());
                            span
                        }
                        None => DecoratedSpan {
                            text,
                            entity: Some(key.clone()),
                            editable: true,
                        },
                    }
                }
                None => DecoratedSpan::plain(text),
            };
            spans.push(span);
            ix = end;
        }

        spans
    }
}
