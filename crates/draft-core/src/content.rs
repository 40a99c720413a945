use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

pub type BlockKey = String;
pub type EntityKey = String;
pub type EntityData = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutability {
    Immutable,
    Mutable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: String,
    pub mutability: Mutability,
    #[serde(default)]
    pub data: EntityData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EntityMap {
    #[serde(default)]
    entities: BTreeMap<EntityKey, Entity>,
    #[serde(default)]
    next_key: u64,
}

impl EntityMap {
    pub(crate) fn create(
        &mut self,
        kind: impl Into<String>,
        mutability: Mutability,
        data: EntityData,
    ) -> EntityKey {
        self.next_key += 1;
        let key = self.next_key.to_string();
        self.entities.insert(
            key.clone(),
            Entity {
                kind: kind.into(),
                mutability,
                data,
            },
        );
        key
    }

    pub fn entity(&self, key: &str) -> Option<&Entity> {
        self.entities.get(key)
    }
}

/// A run of text whose characters each carry an optional entity key. The
/// `entity` list is parallel to the chars of `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub key: BlockKey,
    pub text: String,
    #[serde(default)]
    pub entity: Vec<Option<EntityKey>>,
}

impl Block {
    pub fn new(key: impl Into<BlockKey>, text: impl Into<String>) -> Self {
        let text = text.into();
        let entity = vec![None; text.chars().count()];
        Self {
            key: key.into(),
            text,
            entity,
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn entity_at(&self, char_ix: usize) -> Option<&EntityKey> {
        self.entity.get(char_ix).and_then(|key| key.as_ref())
    }

    /// Maximal contiguous run of characters around `char_ix` carrying the
    /// same entity key (or the same absence of one).
    pub fn entity_run_at(&self, char_ix: usize) -> Range<usize> {
        let key = self.entity.get(char_ix).cloned().flatten();
        let mut start = char_ix;
        while start > 0 && self.entity.get(start - 1).cloned().flatten() == key {
            start -= 1;
        }
        let mut end = (char_ix + 1).min(self.entity.len());
        while end < self.entity.len() && self.entity.get(end).cloned().flatten() == key {
            end += 1;
        }
        start..end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContentState {
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    entity_map: EntityMap,
}

impl ContentState {
    pub fn from_text(text: &str) -> Self {
        let blocks = text
            .split('\n')
            .enumerate()
            .map(|(ix, line)| Block::new(format!("b{ix}"), line))
            .collect();
        Self {
            blocks,
            entity_map: EntityMap::default(),
        }
    }

    pub fn block(&self, key: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.key == key)
    }

    pub fn block_index(&self, key: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.key == key)
    }

    pub fn plain_text(&self) -> String {
        let lines: Vec<&str> = self.blocks.iter().map(|block| block.text.as_str()).collect();
        lines.join("\n")
    }

    pub fn entity(&self, key: &str) -> Option<&Entity> {
        self.entity_map.entity(key)
    }

    /// Returns a new snapshot carrying the entity together with its key.
    pub fn create_entity(
        &self,
        kind: impl Into<String>,
        mutability: Mutability,
        data: EntityData,
    ) -> (Self, EntityKey) {
        let mut next = self.clone();
        let key = next.entity_map.create(kind, mutability, data);
        (next, key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub block: BlockKey,
    pub offset: usize,
}

impl Point {
    pub fn new(block: impl Into<BlockKey>, offset: usize) -> Self {
        Self {
            block: block.into(),
            offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Point,
    pub focus: Point,
}

impl Selection {
    pub fn collapsed(point: Point) -> Self {
        Self {
            anchor: point.clone(),
            focus: point,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

pub(crate) fn byte_offset(text: &str, char_ix: usize) -> usize {
    text.char_indices()
        .nth(char_ix)
        .map(|(byte_ix, _)| byte_ix)
        .unwrap_or(text.len())
}
