//! Lifecycle catalog: the ordered list of engine-invoked method names.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::constants::UNITY_MESSAGES;
use crate::error::{Error, Result};

/// One catalog record. Only `name` is required in catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleMessage {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Ordered, read-only list of lifecycle messages. Entries are not validated: duplicates and
/// empty names are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LifecycleCatalog {
    messages: Vec<LifecycleMessage>,
}

impl LifecycleCatalog {
    pub fn new(messages: Vec<LifecycleMessage>) -> Self {
        Self { messages }
    }

    /// The Unity `MonoBehaviour` messages.
    pub fn builtin() -> Self {
        UNITY_MESSAGES
            .iter()
            .map(|(name, description)| LifecycleMessage {
                name: (*name).to_string(),
                description: (*description).to_string(),
            })
            .collect()
    }

    /// Parse a JSON array of `{ "name": ..., "description": ... }` records.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text).map_err(|source| Error::Catalog {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), entries = catalog.len(), "loaded lifecycle catalog");
        Ok(catalog)
    }

    pub fn messages(&self) -> &[LifecycleMessage] {
        &self.messages
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|m| m.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&LifecycleMessage> {
        self.messages.iter().find(|m| m.name == name)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<LifecycleMessage> for LifecycleCatalog {
    fn from_iter<I: IntoIterator<Item = LifecycleMessage>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
