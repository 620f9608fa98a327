//! Component lifecycle.
//!
//! A [`Component`] binds a [`View`] to a container id and a props map. The
//! view decides what the markup looks like; the component decides when it is
//! written, cleared and re-written.
//!
//! ```text
//! new ──> mount ──> (update ──> mount)* ──> unmount
//!           │                                  │
//!           └── View::on_mount    View::on_unmount
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::dom::DomError;
use crate::runtime::Runtime;

/// Component configuration: a JSON object, shallow-merged on update.
pub type Props = Map<String, Value>;

/// Deserialize props into a view's typed configuration. Unknown keys are
/// ignored; missing keys fall back to the type's serde defaults.
pub fn props_as<T: DeserializeOwned>(props: &Props) -> Result<T, ComponentError> {
    Ok(serde_json::from_value(Value::Object(props.clone()))?)
}

/// Serialize a typed configuration into props. Values that do not serialize
/// to an object yield empty props.
pub fn to_props<T: Serialize>(value: &T) -> Props {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            debug!("props value is not an object: {other}");
            Props::new()
        }
        Err(e) => {
            debug!("props failed to serialize: {e}");
            Props::new()
        }
    }
}

/// Shallow merge: top-level keys of `partial` replace those of `base`.
pub fn merge_props(base: &mut Props, partial: Props) {
    for (key, value) in partial {
        base.insert(key, value);
    }
}

#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("invalid props: {0}")]
    Props(#[from] serde_json::Error),

    #[error("render failed: {0}")]
    Render(String),

    #[error("{hook} failed: {error:#}")]
    Hook {
        hook: &'static str,
        error: anyhow::Error,
    },

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// What a lifecycle hook gets to see.
pub struct MountContext<'a> {
    pub container_id: &'a str,
    pub props: &'a Props,
    pub runtime: &'a Runtime,
}

/// Markup producer behind a component.
///
/// `render` must be a pure function of the props. Side effects (listeners,
/// scripts, sub-components) belong in the hooks, which are called after the
/// markup is in the document and before it is removed.
pub trait View: Send {
    /// Short name used in logs.
    fn kind(&self) -> &'static str;

    /// Props a fresh component starts from.
    fn defaults(&self) -> Props {
        Props::new()
    }

    fn render(&self, props: &Props) -> Result<String, ComponentError>;

    fn on_mount(&mut self, _cx: &MountContext<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    fn on_unmount(&mut self, _cx: &MountContext<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A view mounted (or mountable) into one container.
pub struct Component {
    container_id: String,
    props: Props,
    mounted: bool,
    view: Box<dyn View>,
}

impl std::fmt::Debug for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("kind", &self.view.kind())
            .field("container_id", &self.container_id)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl Component {
    /// Component with the view's default props.
    pub fn new(container_id: impl Into<String>, view: impl View + 'static) -> Self {
        Self::with_props(container_id, view, Props::new())
    }

    /// Component with `overrides` shallow-merged over the view's defaults.
    pub fn with_props(
        container_id: impl Into<String>,
        view: impl View + 'static,
        overrides: Props,
    ) -> Self {
        Self::boxed(container_id, Box::new(view), overrides)
    }

    /// Same as [`Component::with_props`] for an already boxed view.
    pub fn boxed(container_id: impl Into<String>, view: Box<dyn View>, overrides: Props) -> Self {
        let mut props = view.defaults();
        merge_props(&mut props, overrides);
        Self {
            container_id: container_id.into(),
            props,
            mounted: false,
            view,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.view.kind()
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Markup for the current props.
    pub fn render(&self) -> Result<String, ComponentError> {
        self.view.render(&self.props)
    }

    /// Write the markup into the container and run `on_mount`.
    ///
    /// A missing container is logged and skipped: the component stays
    /// unmounted and the call succeeds.
    pub fn mount(&mut self, runtime: &Runtime) -> Result<(), ComponentError> {
        if !runtime.document.contains(&self.container_id) {
            warn!(
                container = %self.container_id,
                kind = self.view.kind(),
                "container not found, skipping mount"
            );
            return Ok(());
        }

        let html = self.render()?;
        runtime.document.set_inner_html(&self.container_id, html)?;
        self.mounted = true;

        let cx = MountContext {
            container_id: &self.container_id,
            props: &self.props,
            runtime,
        };
        self.view
            .on_mount(&cx)
            .map_err(|error| ComponentError::Hook {
                hook: "on_mount",
                error,
            })
    }

    /// Clear the container (when present) and run `on_unmount`.
    pub fn unmount(&mut self, runtime: &Runtime) -> Result<(), ComponentError> {
        if runtime.document.contains(&self.container_id) {
            runtime.document.clear(&self.container_id)?;
        }
        self.mounted = false;

        let cx = MountContext {
            container_id: &self.container_id,
            props: &self.props,
            runtime,
        };
        self.view
            .on_unmount(&cx)
            .map_err(|error| ComponentError::Hook {
                hook: "on_unmount",
                error,
            })
    }

    /// Merge `partial` into the props and re-mount if currently mounted.
    pub fn update(&mut self, partial: Props, runtime: &Runtime) -> Result<(), ComponentError> {
        merge_props(&mut self.props, partial);
        if self.mounted {
            self.mount(runtime)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording views shared by lifecycle tests.

    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;

    pub type Log = Arc<Mutex<Vec<String>>>;

    /// Renders `<p>{title}</p>` and records every hook call into `log`.
    pub struct Probe {
        pub name: &'static str,
        pub log: Log,
        pub fail_render: bool,
    }

    impl Probe {
        pub fn new(name: &'static str, log: &Log) -> Self {
            Self {
                name,
                log: log.clone(),
                fail_render: false,
            }
        }

        pub fn failing(name: &'static str, log: &Log) -> Self {
            Self {
                fail_render: true,
                ..Self::new(name, log)
            }
        }
    }

    impl View for Probe {
        fn kind(&self) -> &'static str {
            "probe"
        }

        fn defaults(&self) -> Props {
            to_props(&json!({ "title": self.name }))
        }

        fn render(&self, props: &Props) -> Result<String, ComponentError> {
            if self.fail_render {
                return Err(ComponentError::Render(format!("{} refuses", self.name)));
            }
            let title = props.get("title").and_then(Value::as_str).unwrap_or("");
            Ok(format!("<p>{title}</p>"))
        }

        fn on_mount(&mut self, _cx: &MountContext<'_>) -> anyhow::Result<()> {
            self.log.lock().unwrap().push(format!("mount:{}", self.name));
            Ok(())
        }

        fn on_unmount(&mut self, _cx: &MountContext<'_>) -> anyhow::Result<()> {
            self.log.lock().unwrap().push(format!("unmount:{}", self.name));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::testing::{Log, Probe};
    use super::*;
    use crate::dom::{Document, StaticDocument};

    fn runtime(containers: &[&str]) -> (Arc<StaticDocument>, Runtime) {
        let doc = Arc::new(StaticDocument::with_containers(containers.iter().copied()));
        let rt = Runtime::new(doc.clone());
        (doc, rt)
    }

    fn props(value: Value) -> Props {
        to_props(&value)
    }

    #[test]
    fn mount_writes_markup_and_runs_hook() {
        let (doc, rt) = runtime(&["box"]);
        let log = Log::default();
        let mut component = Component::new("box", Probe::new("a", &log));

        component.mount(&rt).unwrap();

        assert!(component.is_mounted());
        assert_eq!(doc.inner_html("box").as_deref(), Some("<p>a</p>"));
        assert_eq!(*log.lock().unwrap(), vec!["mount:a"]);
    }

    #[test]
    fn mount_without_container_is_a_no_op() {
        let (doc, rt) = runtime(&[]);
        let log = Log::default();
        let mut component = Component::new("missing", Probe::new("a", &log));

        component.mount(&rt).unwrap();

        assert!(!component.is_mounted());
        assert!(doc.writes().is_empty());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn render_failure_leaves_component_unmounted() {
        let (doc, rt) = runtime(&["box"]);
        let log = Log::default();
        let mut component = Component::new("box", Probe::failing("b", &log));

        assert!(matches!(component.mount(&rt), Err(ComponentError::Render(_))));
        assert!(!component.is_mounted());
        assert!(doc.writes().is_empty());
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let log = Log::default();
        let component = Component::with_props(
            "box",
            Probe::new("a", &log),
            props(json!({ "title": "Custom", "extra": 1 })),
        );

        assert_eq!(component.props()["title"], json!("Custom"));
        assert_eq!(component.props()["extra"], json!(1));
        assert_eq!(component.render().unwrap(), "<p>Custom</p>");
    }

    #[test]
    fn update_remounts_only_when_mounted() {
        let (doc, rt) = runtime(&["box"]);
        let log = Log::default();
        let mut component = Component::new("box", Probe::new("a", &log));

        component
            .update(props(json!({ "title": "Early" })), &rt)
            .unwrap();
        assert!(doc.writes().is_empty());
        assert_eq!(component.props()["title"], json!("Early"));

        component.mount(&rt).unwrap();
        component
            .update(props(json!({ "title": "Late" })), &rt)
            .unwrap();

        assert_eq!(doc.writes(), vec!["box", "box"]);
        assert_eq!(doc.inner_html("box").as_deref(), Some("<p>Late</p>"));
    }

    #[test]
    fn unmount_clears_container() {
        let (doc, rt) = runtime(&["box"]);
        let log = Log::default();
        let mut component = Component::new("box", Probe::new("a", &log));

        component.mount(&rt).unwrap();
        component.unmount(&rt).unwrap();

        assert!(!component.is_mounted());
        assert_eq!(doc.inner_html("box").as_deref(), Some(""));
        assert_eq!(*log.lock().unwrap(), vec!["mount:a", "unmount:a"]);
    }

    #[test]
    fn typed_props_ignore_unknown_keys() {
        #[derive(serde::Deserialize, Default)]
        #[serde(default)]
        struct Typed {
            title: String,
            count: u32,
        }

        let typed: Typed = props_as(&props(json!({ "title": "x", "bogus": true }))).unwrap();
        assert_eq!(typed.title, "x");
        assert_eq!(typed.count, 0);

        let err = props_as::<Typed>(&props(json!({ "count": "many" })));
        assert!(matches!(err, Err(ComponentError::Props(_))));
    }
}
