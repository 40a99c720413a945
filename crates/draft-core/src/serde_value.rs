use serde::{Deserialize, Serialize};

use crate::content::ContentState;

const DEFAULT_SCHEMA: &str = "draft";
const DEFAULT_VERSION: u32 = 1;

fn default_schema() -> String {
    DEFAULT_SCHEMA.to_string()
}

fn default_version() -> u32 {
    DEFAULT_VERSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftValue {
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default = "default_version")]
    pub version: u32,
    pub content: ContentState,
}

impl DraftValue {
    pub fn from_content(content: ContentState) -> Self {
        Self {
            schema: default_schema(),
            version: default_version(),
            content,
        }
    }

    pub fn into_content(self) -> ContentState {
        self.content
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
