//! Shared page state handed to every lifecycle call.

use std::sync::Arc;

use crate::bus::EventBus;
use crate::dom::Document;
use crate::reveal::RevealObserver;
use crate::scripts::ScriptRegistry;

/// Process-wide services, constructed once and passed explicitly.
///
/// Cloning is cheap: every field is a handle to shared state.
#[derive(Clone)]
pub struct Runtime {
    pub document: Arc<dyn Document>,
    pub bus: EventBus,
    pub reveal: RevealObserver,
    pub scripts: ScriptRegistry,
}

impl Runtime {
    pub fn new(document: Arc<dyn Document>) -> Self {
        Self {
            document,
            bus: EventBus::new(),
            reveal: RevealObserver::default(),
            scripts: ScriptRegistry::default(),
        }
    }

    /// Same runtime with a different reveal configuration.
    pub fn with_reveal(mut self, reveal: RevealObserver) -> Self {
        self.reveal = reveal;
        self
    }
}
