//! Host document abstraction.
//!
//! Components never reach for an ambient DOM. Everything they touch goes
//! through [`Document`]: containers addressed by element id, inline style
//! properties, classes, layout reads, image-load signals, event listeners and
//! `<head>` injection.
//!
//! [`StaticDocument`] is the in-memory implementation used by the pre-renderer
//! and by tests.

mod images;
mod static_doc;

use std::sync::Arc;

use helix_sections::HeadEntry;
use serde_json::Value;
use thiserror::Error;

pub use images::{ImageLoad, ImageOutcome, ImageSignal, all_settled, image_load};
pub use static_doc::StaticDocument;

/// Target name for viewport-level events (`resize`, `scroll`).
pub const WINDOW: &str = "window";

/// Event listener attached to a document target.
///
/// The payload is whatever the host attaches to the event (`scrollY` for
/// scroll, the form values for submit, ...).
pub type Listener = Arc<dyn Fn(&Value) -> anyhow::Result<()> + Send + Sync>;

/// Wrap a closure into a [`Listener`].
pub fn listener<F>(f: F) -> Listener
where
    F: Fn(&Value) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Handle returned by [`Document::add_event_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Errors raised by document operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    /// No element with that id exists in the document.
    #[error("element #{0} not found")]
    NotFound(String),
}

/// Surface that components mount into.
///
/// Implementations use interior mutability: a document is shared as
/// `Arc<dyn Document>` between components, listeners and background tasks.
pub trait Document: Send + Sync {
    /// Whether an element with this id exists.
    fn contains(&self, id: &str) -> bool;

    /// Replace the content of an element.
    fn set_inner_html(&self, id: &str, html: String) -> Result<(), DomError>;

    /// Current content of an element, if it exists.
    fn inner_html(&self, id: &str) -> Option<String>;

    /// Remove all content of an element.
    fn clear(&self, id: &str) -> Result<(), DomError>;

    /// Set an inline style property (custom properties included).
    fn set_style_property(&self, id: &str, name: &str, value: &str) -> Result<(), DomError>;

    /// Inline style property previously set on an element.
    fn style_property(&self, id: &str, name: &str) -> Option<String>;

    /// Add (`enabled`) or remove a class on an element.
    fn toggle_class(&self, id: &str, class: &str, enabled: bool) -> Result<(), DomError>;

    /// Whether the element currently carries the class.
    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Ids of the elements bearing a class, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<String>;

    /// Rendered widths (px) of the element's children, in document order.
    fn child_widths(&self, id: &str) -> Vec<f64>;

    /// Load signals of the images below the element that are still loading.
    /// Images that already finished are not returned.
    fn image_loads(&self, id: &str) -> Vec<ImageLoad>;

    /// Append an entry to the document head.
    fn append_head(&self, entry: HeadEntry);

    /// Attach a listener for `event` on `target` (an element id or [`WINDOW`]).
    fn add_event_listener(&self, target: &str, event: &str, listener: Listener) -> ListenerId;

    /// Detach a listener. Returns `false` if it was not attached.
    fn remove_event_listener(&self, id: ListenerId) -> bool;
}
