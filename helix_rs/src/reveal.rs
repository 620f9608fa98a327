//! Reveal-on-scroll state.
//!
//! Elements carrying the marker class start hidden (see the page CSS). The
//! host reports intersection ratios; the first time an observed element
//! reaches the threshold it gets the revealed class and is no longer
//! observed.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use helix_sections::styles::{REVEALED_CLASS, REVEAL_MARKER_CLASS};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dom::{DomError, Document};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Intersection ratio at which an element is revealed.
    pub threshold: f64,
    /// Margin applied to the viewport by browser hosts.
    pub root_margin: String,
    pub marker_class: String,
    pub revealed_class: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -5% 0px".to_string(),
            marker_class: REVEAL_MARKER_CLASS.to_string(),
            revealed_class: REVEALED_CLASS.to_string(),
        }
    }
}

/// Shared reveal state. Clones observe the same set.
#[derive(Debug, Clone, Default)]
pub struct RevealObserver {
    options: RevealOptions,
    observed: Arc<Mutex<BTreeSet<String>>>,
}

impl RevealObserver {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            observed: Arc::default(),
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    fn observed(&self) -> MutexGuard<'_, BTreeSet<String>> {
        self.observed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start observing every element bearing the marker class that is not
    /// already revealed. Returns how many were newly observed.
    pub fn observe_marked(&self, document: &dyn Document) -> usize {
        let ids = document.elements_with_class(&self.options.marker_class);
        let mut observed = self.observed();
        let added = ids
            .into_iter()
            .filter(|id| !document.has_class(id, &self.options.revealed_class))
            .filter(|id| observed.insert(id.clone()))
            .count();
        debug!(added, total = observed.len(), "observing reveal targets");
        added
    }

    /// Report an intersection. Returns `true` when this call revealed the
    /// element.
    pub fn intersect(&self, document: &dyn Document, id: &str, ratio: f64) -> Result<bool, DomError> {
        if ratio < self.options.threshold {
            return Ok(false);
        }
        if !self.observed().remove(id) {
            return Ok(false);
        }
        document.toggle_class(id, &self.options.revealed_class, true)?;
        Ok(true)
    }

    /// Reveal everything still observed, as if fully in view. Used when
    /// pre-rendering a page that has no scrolling host.
    pub fn reveal_all(&self, document: &dyn Document) -> Result<usize, DomError> {
        let pending: Vec<String> = std::mem::take(&mut *self.observed()).into_iter().collect();
        for id in &pending {
            document.toggle_class(id, &self.options.revealed_class, true)?;
        }
        Ok(pending.len())
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.observed().contains(id)
    }

    pub fn observed_count(&self) -> usize {
        self.observed().len()
    }

    /// Stop observing everything.
    pub fn reset(&self) {
        self.observed().clear();
    }
}
