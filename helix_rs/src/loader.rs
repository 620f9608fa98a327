//! Ordered component registry.

use std::collections::HashMap;

use tracing::{error, info, warn};

use crate::component::Component;
use crate::runtime::Runtime;

/// Outcome of a batch mount/unmount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Named components, mounted and unmounted in registration order.
#[derive(Debug, Default)]
pub struct ComponentLoader {
    components: HashMap<String, Component>,
    order: Vec<String>,
    initialized: bool,
}

impl ComponentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `component` under `name`.
    ///
    /// Registering an existing name replaces the component and keeps its
    /// original position in the mount order. The replaced component is
    /// returned as is (still mounted if it was).
    pub fn register(&mut self, name: impl Into<String>, component: Component) -> Option<Component> {
        let name = name.into();
        let previous = self.components.insert(name.clone(), component);
        if previous.is_some() {
            warn!(component = %name, "component already registered, replacing it");
        } else {
            self.order.push(name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Component> {
        self.components.get_mut(name)
    }

    /// Registered names, in mount order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Mount every component in registration order. A failing component is
    /// logged and skipped; the rest still mount.
    pub fn mount_all(&mut self, runtime: &Runtime) -> BatchReport {
        let mut report = BatchReport::default();

        for name in &self.order {
            let Some(component) = self.components.get_mut(name) else {
                continue;
            };
            match component.mount(runtime) {
                Ok(()) => report.succeeded.push(name.clone()),
                Err(e) => {
                    error!(component = %name, "failed to mount: {e}");
                    report.failed.push(name.clone());
                }
            }
        }

        self.initialized = true;
        info!(
            mounted = report.succeeded.len(),
            failed = report.failed.len(),
            "components mounted"
        );
        report
    }

    /// Unmount every component in registration order, isolating failures.
    pub fn unmount_all(&mut self, runtime: &Runtime) -> BatchReport {
        let mut report = BatchReport::default();

        for name in &self.order {
            let Some(component) = self.components.get_mut(name) else {
                continue;
            };
            match component.unmount(runtime) {
                Ok(()) => report.succeeded.push(name.clone()),
                Err(e) => {
                    error!(component = %name, "failed to unmount: {e}");
                    report.failed.push(name.clone());
                }
            }
        }

        self.initialized = false;
        report
    }

    /// Unmount everything and forget all registrations.
    pub fn clear(&mut self, runtime: &Runtime) -> BatchReport {
        let report = self.unmount_all(runtime);
        self.components.clear();
        self.order.clear();
        report
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::component::testing::{Log, Probe};
    use crate::dom::{Document, StaticDocument};

    fn setup(containers: &[&str]) -> (Arc<StaticDocument>, Runtime, Log) {
        let doc = Arc::new(StaticDocument::with_containers(containers.iter().copied()));
        let rt = Runtime::new(doc.clone());
        (doc, rt, Log::default())
    }

    #[test]
    fn mounts_in_registration_order() {
        let (doc, rt, log) = setup(&["c1", "c2", "c3"]);
        let mut loader = ComponentLoader::new();
        loader.register("third", Component::new("c3", Probe::new("third", &log)));
        loader.register("first", Component::new("c1", Probe::new("first", &log)));
        loader.register("second", Component::new("c2", Probe::new("second", &log)));

        let report = loader.mount_all(&rt);

        assert!(report.is_clean());
        assert_eq!(loader.names(), ["third", "first", "second"]);
        assert_eq!(doc.writes(), vec!["c3", "c1", "c2"]);
        assert!(loader.is_initialized());
    }

    #[test]
    fn failing_component_does_not_stop_the_batch() {
        let (doc, rt, log) = setup(&["a", "b", "c"]);
        let mut loader = ComponentLoader::new();
        loader.register("A", Component::new("a", Probe::new("A", &log)));
        loader.register("B", Component::new("b", Probe::failing("B", &log)));
        loader.register("C", Component::new("c", Probe::new("C", &log)));

        let report = loader.mount_all(&rt);

        assert_eq!(report.succeeded, vec!["A", "C"]);
        assert_eq!(report.failed, vec!["B"]);
        assert!(loader.get("A").unwrap().is_mounted());
        assert!(!loader.get("B").unwrap().is_mounted());
        assert!(loader.get("C").unwrap().is_mounted());
        assert_eq!(doc.inner_html("b").as_deref(), Some(""));
        assert_eq!(*log.lock().unwrap(), vec!["mount:A", "mount:C"]);
    }

    #[test]
    fn register_then_get() {
        let (_, _, log) = setup(&[]);
        let mut loader = ComponentLoader::new();
        loader.register("x", Component::new("x-box", Probe::new("x", &log)));

        assert_eq!(loader.get("x").map(Component::container_id), Some("x-box"));
        assert!(loader.get("y").is_none());
    }

    #[test]
    fn reregistering_keeps_one_slot_and_last_component() {
        let (_, _, log) = setup(&[]);
        let mut loader = ComponentLoader::new();
        loader.register("x", Component::new("old", Probe::new("x", &log)));
        loader.register("y", Component::new("y", Probe::new("y", &log)));
        let replaced = loader.register("x", Component::new("new", Probe::new("x", &log)));

        assert_eq!(replaced.map(|c| c.container_id().to_string()).as_deref(), Some("old"));
        assert_eq!(loader.names(), ["x", "y"]);
        assert_eq!(loader.get("x").unwrap().container_id(), "new");
    }

    #[test]
    fn unmount_all_resets_initialized() {
        let (doc, rt, log) = setup(&["a", "b"]);
        let mut loader = ComponentLoader::new();
        loader.register("A", Component::new("a", Probe::new("A", &log)));
        loader.register("B", Component::new("b", Probe::new("B", &log)));
        loader.mount_all(&rt);

        let report = loader.unmount_all(&rt);

        assert_eq!(report.succeeded, vec!["A", "B"]);
        assert!(!loader.is_initialized());
        assert_eq!(doc.inner_html("a").as_deref(), Some(""));
        assert_eq!(loader.len(), 2);
    }

    #[test]
    fn clear_forgets_registrations() {
        let (_, rt, log) = setup(&["a"]);
        let mut loader = ComponentLoader::new();
        loader.register("A", Component::new("a", Probe::new("A", &log)));
        loader.mount_all(&rt);

        loader.clear(&rt);

        assert!(loader.is_empty());
        assert!(loader.get("A").is_none());
        assert_eq!(*log.lock().unwrap(), vec!["mount:A", "unmount:A"]);
    }
}
