//! In-memory [`Document`].
//!
//! Top-level containers are declared up front, in page order. Elements nested
//! inside mounted markup are addressable by their `id="..."` attribute, which
//! is how sub-components and the logo carousel mount into slots rendered by
//! their parent section. Layout is not computed: widths are supplied through
//! [`StaticDocument::set_layout`], and pending images through
//! [`StaticDocument::stage_images`].

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use helix_sections::{HeadEntry, MountedContainer, PageMeta, render_document};
use serde_json::Value;
use tracing::warn;

use super::{DomError, Document, ImageLoad, ImageSignal, Listener, ListenerId, image_load};

struct ListenerEntry {
    id: ListenerId,
    target: String,
    event: String,
    listener: Listener,
}

#[derive(Default)]
struct DocState {
    containers: Vec<String>,
    html: HashMap<String, String>,
    styles: HashMap<String, BTreeMap<String, String>>,
    classes: HashMap<String, BTreeSet<String>>,
    layout: HashMap<String, Vec<f64>>,
    images: HashMap<String, Vec<ImageLoad>>,
    head: Vec<HeadEntry>,
    listeners: Vec<ListenerEntry>,
    next_listener: u64,
    writes: Vec<String>,
}

/// Offset of the `id="{id}"` attribute in `html`. The attribute name must
/// stand on its own, so `data-id="{id}"` does not count.
fn find_id_attr(html: &str, id: &str) -> Option<usize> {
    let needle = format!("id=\"{id}\"");
    html.match_indices(&needle).map(|(pos, _)| pos).find(|&pos| {
        html[..pos]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_whitespace() || c == '<')
    })
}

impl DocState {
    fn contains(&self, id: &str) -> bool {
        if self.containers.iter().any(|c| c == id) {
            return true;
        }
        self.html
            .values()
            .any(|html| find_id_attr(html, id).is_some())
    }

    fn ensure(&self, id: &str) -> Result<(), DomError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomError::NotFound(id.to_string()))
        }
    }

    /// Forget every element that lived inside `html` (content, styles, classes).
    fn drop_descendants(&mut self, html: &str) {
        let nested: Vec<String> = self
            .html
            .keys()
            .chain(self.styles.keys())
            .chain(self.classes.keys())
            .filter(|id| find_id_attr(html, id).is_some())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        for id in nested {
            self.styles.remove(&id);
            self.classes.remove(&id);
            if let Some(inner) = self.html.remove(&id) {
                self.drop_descendants(&inner);
            }
        }
    }

    fn replace(&mut self, id: &str, html: String) {
        if let Some(previous) = self.html.remove(id) {
            self.drop_descendants(&previous);
        }
        self.html.insert(id.to_string(), html);
    }

    /// Markup of an element with the content of its mounted slots spliced in.
    fn expand(&self, html: &str) -> String {
        let mut out = html.to_string();
        for (id, inner) in &self.html {
            if self.containers.contains(id) {
                continue;
            }
            if find_id_attr(html, id).is_none() {
                continue;
            }
            let Some(pos) = find_id_attr(&out, id) else {
                continue;
            };
            if let Some(close) = out[pos..].find('>') {
                let at = pos + close + 1;
                out.insert_str(at, &self.expand(inner));
            }
        }
        out
    }

    /// Expanded markup with the classes toggled on nested elements written
    /// into their start tags.
    fn serialize(&self, html: &str) -> String {
        let mut out = self.expand(html);
        for (id, classes) in &self.classes {
            if classes.is_empty() || self.containers.contains(id) {
                continue;
            }
            let joined = classes.iter().cloned().collect::<Vec<_>>().join(" ");
            add_classes(&mut out, id, &joined);
        }
        out
    }
}

/// Append `classes` to the class attribute of the element with `id`.
fn add_classes(html: &mut String, id: &str, classes: &str) {
    let Some(pos) = find_id_attr(html, id) else {
        return;
    };
    let start = html[..pos].rfind('<').unwrap_or(0);
    let Some(end) = html[pos..].find('>').map(|close| pos + close) else {
        return;
    };
    match html[start..end].find("class=\"") {
        Some(offset) => {
            let value = start + offset + "class=\"".len();
            let close = html[value..end].find('"').map_or(end, |q| value + q);
            let sep = if close > value { " " } else { "" };
            html.insert_str(close, &format!("{sep}{classes}"));
        }
        None => {
            let at = if html[..end].ends_with('/') { end - 1 } else { end };
            html.insert_str(at, &format!(" class=\"{classes}\""));
        }
    }
}

/// In-memory document with declared top-level containers.
#[derive(Default)]
pub struct StaticDocument {
    state: Mutex<DocState>,
}

impl std::fmt::Debug for StaticDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("StaticDocument")
            .field("containers", &state.containers)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl StaticDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with the given top-level containers, in page order.
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let doc = Self::new();
        for id in ids {
            doc.add_container(id);
        }
        doc
    }

    fn state(&self) -> MutexGuard<'_, DocState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Declare a top-level container (appended after existing ones).
    pub fn add_container(&self, id: impl Into<String>) {
        let id = id.into();
        let mut state = self.state();
        if !state.containers.contains(&id) {
            state.containers.push(id);
        }
    }

    /// Top-level containers, in page order.
    pub fn containers(&self) -> Vec<String> {
        self.state().containers.clone()
    }

    /// Ids passed to `set_inner_html`, in call order.
    pub fn writes(&self) -> Vec<String> {
        self.state().writes.clone()
    }

    /// Supply the rendered widths of an element's children.
    pub fn set_layout(&self, id: impl Into<String>, widths: Vec<f64>) {
        self.state().layout.insert(id.into(), widths);
    }

    /// Mark `count` images below `id` as still loading and hand back their
    /// signals.
    pub fn stage_images(&self, id: impl Into<String>, count: usize) -> Vec<ImageSignal> {
        let (signals, loads): (Vec<_>, Vec<_>) = (0..count).map(|_| image_load()).unzip();
        self.state().images.entry(id.into()).or_default().extend(loads);
        signals
    }

    /// Head entries appended so far.
    pub fn head_entries(&self) -> Vec<HeadEntry> {
        self.state().head.clone()
    }

    /// Number of listeners attached for `event` on `target`.
    pub fn listener_count(&self, target: &str, event: &str) -> usize {
        self.state()
            .listeners
            .iter()
            .filter(|entry| entry.target == target && entry.event == event)
            .count()
    }

    /// Fire `event` on `target`. Listeners run synchronously, outside the
    /// document lock; a failing listener is logged and does not stop the rest.
    /// Returns the number of listeners invoked.
    pub fn dispatch(&self, target: &str, event: &str, payload: &Value) -> usize {
        let listeners: Vec<Listener> = self
            .state()
            .listeners
            .iter()
            .filter(|entry| entry.target == target && entry.event == event)
            .map(|entry| entry.listener.clone())
            .collect();

        for listener in &listeners {
            if let Err(e) = listener(payload) {
                warn!(target_id = target, event, "listener failed: {e:#}");
            }
        }
        listeners.len()
    }

    /// Serialize the whole page: containers in order with mounted slots
    /// spliced in, head entries appended, inline styles emitted as rules.
    pub fn render(&self, meta: &PageMeta) -> String {
        let state = self.state();

        let containers: Vec<MountedContainer> = state
            .containers
            .iter()
            .map(|id| MountedContainer {
                id: id.clone(),
                classes: state
                    .classes
                    .get(id)
                    .map(|set| set.iter().cloned().collect())
                    .unwrap_or_default(),
                html: state
                    .html
                    .get(id)
                    .map(|html| state.serialize(html))
                    .unwrap_or_default(),
            })
            .collect();

        let mut meta = meta.clone();
        meta.head.extend(state.head.iter().cloned());

        let mut rules: Vec<String> = state
            .styles
            .iter()
            .filter(|(_, props)| !props.is_empty())
            .map(|(id, props)| {
                let body = props
                    .iter()
                    .map(|(name, value)| format!("{name}: {value};"))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("#{id} {{ {body} }}")
            })
            .collect();
        rules.sort();
        if !rules.is_empty() {
            meta.head.push(HeadEntry::Style(rules.join("\n")));
        }

        render_document(&meta, &containers)
    }
}

impl Document for StaticDocument {
    fn contains(&self, id: &str) -> bool {
        self.state().contains(id)
    }

    fn set_inner_html(&self, id: &str, html: String) -> Result<(), DomError> {
        let mut state = self.state();
        state.ensure(id)?;
        state.replace(id, html);
        state.writes.push(id.to_string());
        Ok(())
    }

    fn inner_html(&self, id: &str) -> Option<String> {
        let state = self.state();
        if !state.contains(id) {
            return None;
        }
        Some(state.html.get(id).cloned().unwrap_or_default())
    }

    fn clear(&self, id: &str) -> Result<(), DomError> {
        let mut state = self.state();
        state.ensure(id)?;
        state.replace(id, String::new());
        Ok(())
    }

    fn set_style_property(&self, id: &str, name: &str, value: &str) -> Result<(), DomError> {
        let mut state = self.state();
        state.ensure(id)?;
        state
            .styles
            .entry(id.to_string())
            .or_default()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn style_property(&self, id: &str, name: &str) -> Option<String> {
        self.state()
            .styles
            .get(id)
            .and_then(|props| props.get(name))
            .cloned()
    }

    fn toggle_class(&self, id: &str, class: &str, enabled: bool) -> Result<(), DomError> {
        let mut state = self.state();
        state.ensure(id)?;
        let classes = state.classes.entry(id.to_string()).or_default();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.state()
            .classes
            .get(id)
            .is_some_and(|classes| classes.contains(class))
    }

    /// Static approximation: a top-level container is reported when its
    /// mounted markup uses the class anywhere.
    fn elements_with_class(&self, class: &str) -> Vec<String> {
        let state = self.state();
        state
            .containers
            .iter()
            .filter(|id| {
                state
                    .html
                    .get(*id)
                    .is_some_and(|html| state.expand(html).contains(class))
            })
            .cloned()
            .collect()
    }

    fn child_widths(&self, id: &str) -> Vec<f64> {
        self.state().layout.get(id).cloned().unwrap_or_default()
    }

    fn image_loads(&self, id: &str) -> Vec<ImageLoad> {
        self.state().images.remove(id).unwrap_or_default()
    }

    fn append_head(&self, entry: HeadEntry) {
        self.state().head.push(entry);
    }

    fn add_event_listener(&self, target: &str, event: &str, listener: Listener) -> ListenerId {
        let mut state = self.state();
        state.next_listener += 1;
        let id = ListenerId(state.next_listener);
        state.listeners.push(ListenerEntry {
            id,
            target: target.to_string(),
            event: event.to_string(),
            listener,
        });
        id
    }

    fn remove_event_listener(&self, id: ListenerId) -> bool {
        let mut state = self.state();
        let before = state.listeners.len();
        state.listeners.retain(|entry| entry.id != id);
        state.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::dom::{WINDOW, listener};

    #[test]
    fn missing_container_is_an_error() {
        let doc = StaticDocument::with_containers(["a"]);
        assert!(doc.contains("a"));
        assert_eq!(
            doc.set_inner_html("b", "<p></p>".into()),
            Err(DomError::NotFound("b".into()))
        );
        assert!(doc.writes().is_empty());
    }

    #[test]
    fn nested_elements_become_addressable() {
        let doc = StaticDocument::with_containers(["hero"]);
        doc.set_inner_html("hero", r#"<section><div id="slot"></div></section>"#.into())
            .unwrap();

        assert!(doc.contains("slot"));
        doc.set_inner_html("slot", "<span>logos</span>".into()).unwrap();

        let page = doc.render(&PageMeta::default());
        assert!(page.contains(r#"<div id="slot"><span>logos</span></div>"#));
    }

    #[test]
    fn only_a_real_id_attribute_makes_an_element_addressable() {
        let doc = StaticDocument::with_containers(["hero"]);
        doc.set_inner_html(
            "hero",
            r#"<ul><li data-id="logo"></li><li id="slot"></li></ul>"#.into(),
        )
        .unwrap();

        assert!(doc.contains("slot"));
        assert!(!doc.contains("logo"));
        assert_eq!(
            doc.set_inner_html("logo", "<b></b>".into()),
            Err(DomError::NotFound("logo".into()))
        );
    }

    #[test]
    fn rerendering_a_parent_drops_slot_content() {
        let doc = StaticDocument::with_containers(["hero"]);
        doc.set_inner_html("hero", r#"<div id="slot"></div>"#.into()).unwrap();
        doc.set_inner_html("slot", "<b>old</b>".into()).unwrap();
        doc.set_style_property("slot", "--x", "1px").unwrap();

        doc.set_inner_html("hero", r#"<div id="slot"></div>"#.into()).unwrap();

        assert_eq!(doc.inner_html("slot").as_deref(), Some(""));
        assert_eq!(doc.style_property("slot", "--x"), None);
    }

    #[test]
    fn nested_classes_are_serialized_into_the_tag() {
        let doc = StaticDocument::with_containers(["hero"]);
        doc.set_inner_html(
            "hero",
            r#"<div id="slot"></div><div class="track" id="track"></div>"#.into(),
        )
        .unwrap();
        doc.toggle_class("slot", "ready", true).unwrap();
        doc.toggle_class("track", "moving", true).unwrap();

        let page = doc.render(&PageMeta::default());
        assert!(page.contains(r#"<div id="slot" class="ready"></div>"#));
        assert!(page.contains(r#"<div class="track moving" id="track"></div>"#));
    }

    #[test]
    fn clear_empties_a_container() {
        let doc = StaticDocument::with_containers(["a"]);
        doc.set_inner_html("a", "<p>x</p>".into()).unwrap();
        doc.clear("a").unwrap();
        assert_eq!(doc.inner_html("a").as_deref(), Some(""));
    }

    #[test]
    fn classes_and_styles_on_elements() {
        let doc = StaticDocument::with_containers(["a"]);
        doc.toggle_class("a", "animate", true).unwrap();
        assert!(doc.has_class("a", "animate"));
        doc.toggle_class("a", "animate", false).unwrap();
        assert!(!doc.has_class("a", "animate"));

        doc.set_style_property("a", "--scroll-width", "120px").unwrap();
        let page = doc.render(&PageMeta::default());
        assert!(page.contains("#a { --scroll-width: 120px; }"));
    }

    #[test]
    fn dispatch_reaches_matching_listeners_only() {
        let doc = StaticDocument::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        let id = doc.add_event_listener(
            WINDOW,
            "resize",
            listener(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        );
        doc.add_event_listener(WINDOW, "scroll", listener(|_| anyhow::bail!("boom")));

        assert_eq!(doc.dispatch(WINDOW, "resize", &Value::Null), 1);
        assert_eq!(doc.dispatch(WINDOW, "scroll", &Value::Null), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        assert!(doc.remove_event_listener(id));
        assert!(!doc.remove_event_listener(id));
        assert_eq!(doc.dispatch(WINDOW, "resize", &Value::Null), 0);
    }

    #[test]
    fn staged_images_are_handed_out_once() {
        let doc = StaticDocument::new();
        let signals = doc.stage_images("track", 3);
        assert_eq!(signals.len(), 3);
        assert_eq!(doc.image_loads("track").len(), 3);
        assert!(doc.image_loads("track").is_empty());
    }

    #[test]
    fn elements_with_class_follow_container_order() {
        let doc = StaticDocument::with_containers(["one", "two", "three"]);
        doc.set_inner_html("three", r#"<p class="animate-on-scroll"></p>"#.into())
            .unwrap();
        doc.set_inner_html("one", r#"<p class="animate-on-scroll"></p>"#.into())
            .unwrap();
        doc.set_inner_html("two", "<p></p>".into()).unwrap();

        assert_eq!(doc.elements_with_class("animate-on-scroll"), vec!["one", "three"]);
    }
}
