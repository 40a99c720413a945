use draft_core::{DecoratedSpan, Entity, EntityRenderer, RendererRegistry};

use crate::token::TOKEN_ENTITY_KIND;

/// Committed tokens render as visually distinct, non-editable spans.
pub struct TokenRenderer;

impl EntityRenderer for TokenRenderer {
    fn kind(&self) -> &'static str {
        TOKEN_ENTITY_KIND
    }

    fn render(&self, _entity: &Entity, text: &str) -> DecoratedSpan {
        DecoratedSpan {
            text: text.to_string(),
            entity: None,
            editable: false,
        }
    }
}

pub fn token_registry() -> RendererRegistry {
    let mut registry = RendererRegistry::new();
    registry
        .register(Box::new(TokenRenderer))
        .expect("token registry must be valid");
    registry
}
