//! Load-once guard for external scripts.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use helix_sections::HeadEntry;
use tracing::debug;

use crate::dom::Document;

/// Names of the scripts already appended to the document head.
#[derive(Debug, Clone, Default)]
pub struct ScriptRegistry {
    loaded: Arc<Mutex<HashSet<String>>>,
}

impl ScriptRegistry {
    fn loaded(&self) -> MutexGuard<'_, HashSet<String>> {
        self.loaded.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `<script src>` to the head the first time `name` is requested.
    /// Returns `false` when the script was already loaded.
    pub fn ensure_loaded(&self, document: &dyn Document, name: &str, src: &str) -> bool {
        if !self.loaded().insert(name.to_string()) {
            return false;
        }
        document.append_head(HeadEntry::Script {
            src: src.to_string(),
        });
        debug!(script = name, src, "script loaded");
        true
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded().contains(name)
    }

    /// Forget every loaded name. Head entries already appended stay.
    pub fn reset(&self) {
        self.loaded().clear();
    }
}
