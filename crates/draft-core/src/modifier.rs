use std::ops::Range;

use crate::content::{BlockKey, ContentState, EntityKey, Point, byte_offset};

/// A range of characters inside a single block, in char offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRange {
    pub block: BlockKey,
    pub range: Range<usize>,
}

impl BlockRange {
    pub fn new(block: impl Into<BlockKey>, range: Range<usize>) -> Self {
        Self {
            block: block.into(),
            range,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalDirection {
    Backward,
    Forward,
}

#[derive(Debug)]
pub enum ModifierError {
    UnknownBlock(String),
}

pub fn insert_text(
    content: &ContentState,
    at: &Point,
    text: &str,
) -> Result<ContentState, ModifierError> {
    splice(content, &at.block, at.offset..at.offset, text, None)
}

pub fn replace_text_in_range(
    content: &ContentState,
    range: &BlockRange,
    text: &str,
    entity: Option<&EntityKey>,
) -> Result<ContentState, ModifierError> {
    splice(content, &range.block, range.range.clone(), text, entity)
}

/// Removes `range` in one mutation. A collapsed range removes the single
/// character on the `direction` side of it, which is the engine's default
/// single-character deletion.
pub fn remove_range(
    content: &ContentState,
    range: &BlockRange,
    direction: RemovalDirection,
) -> Result<ContentState, ModifierError> {
    let chars = if range.range.is_empty() {
        let at = range.range.start;
        match direction {
            RemovalDirection::Backward => at.saturating_sub(1)..at,
            RemovalDirection::Forward => at..at + 1,
        }
    } else {
        range.range.clone()
    };
    splice(content, &range.block, chars, "", None)
}

fn splice(
    content: &ContentState,
    block_key: &str,
    range: Range<usize>,
    text: &str,
    entity: Option<&EntityKey>,
) -> Result<ContentState, ModifierError> {
    let Some(block_ix) = content.block_index(block_key) else {
        return Err(ModifierError::UnknownBlock(block_key.to_string()));
    };

    let mut next = content.clone();
    let block = &mut next.blocks[block_ix];
    let len = block.char_len();
    let start = range.start.min(len);
    let end = range.end.min(len).max(start);

    let start_byte = byte_offset(&block.text, start);
    let end_byte = byte_offset(&block.text, end);
    block.text.replace_range(start_byte..end_byte, text);

    let inserted = text.chars().count();
    block
        .entity
        .splice(start..end, vec![entity.cloned(); inserted]);

    Ok(next)
}
