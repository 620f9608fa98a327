//! Lifecycle behavior through the public API, with views defined outside
//! the crate.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use helix::bus::handler;
use helix::component::{props_as, to_props};
use helix::dom::WINDOW;
use helix::{
    App, Component, ComponentError, ComponentLoader, Document, EventBus, InfiniteLogoCarousel,
    LandingConfig, MountContext, Props, Runtime, StaticDocument, View,
};
use helix_sections::types::LogoEntry;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct BannerProps {
    text: String,
}

/// Publishes `banner:mounted` from its hook; can be told to fail rendering.
struct Banner {
    broken: bool,
}

impl View for Banner {
    fn kind(&self) -> &'static str {
        "banner"
    }

    fn defaults(&self) -> Props {
        to_props(&BannerProps {
            text: "hello".into(),
        })
    }

    fn render(&self, props: &Props) -> Result<String, ComponentError> {
        if self.broken {
            return Err(ComponentError::Render("broken banner".into()));
        }
        let props: BannerProps = props_as(props)?;
        Ok(format!("<aside>{}</aside>", props.text))
    }

    fn on_mount(&mut self, cx: &MountContext<'_>) -> anyhow::Result<()> {
        cx.runtime
            .bus
            .publish("banner:mounted", &json!({ "container": cx.container_id }));
        Ok(())
    }
}

fn runtime(containers: &[&str]) -> (Arc<StaticDocument>, Runtime) {
    let doc = Arc::new(StaticDocument::with_containers(containers.iter().copied()));
    let rt = Runtime::new(doc.clone());
    (doc, rt)
}

fn record(bus: &EventBus, event: &str) -> Arc<Mutex<Vec<Value>>> {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
    let sink = seen.clone();
    bus.subscribe(
        event,
        handler(move |data| {
            sink.lock().unwrap().push(data.clone());
            Ok(())
        }),
    );
    seen
}

#[test]
fn batch_with_one_broken_component() {
    let (doc, rt) = runtime(&["a", "b", "c"]);
    let mounted = record(&rt.bus, "banner:mounted");

    let mut loader = ComponentLoader::new();
    loader.register("A", Component::new("a", Banner { broken: false }));
    loader.register("B", Component::new("b", Banner { broken: true }));
    loader.register("C", Component::new("c", Banner { broken: false }));

    let report = loader.mount_all(&rt);

    assert_eq!(report.succeeded, vec!["A", "C"]);
    assert_eq!(report.failed, vec!["B"]);
    assert_eq!(doc.inner_html("a").as_deref(), Some("<aside>hello</aside>"));
    assert_eq!(doc.inner_html("b").as_deref(), Some(""));
    assert_eq!(
        *mounted.lock().unwrap(),
        vec![json!({ "container": "a" }), json!({ "container": "c" })]
    );
}

#[test]
fn update_is_deferred_until_mount() {
    let (doc, rt) = runtime(&["slot"]);
    let mut banner = Component::new("slot", Banner { broken: false });

    banner
        .update(to_props(&json!({ "text": "first" })), &rt)
        .unwrap();
    assert!(doc.writes().is_empty());

    banner.mount(&rt).unwrap();
    banner
        .update(to_props(&json!({ "text": "second" })), &rt)
        .unwrap();

    assert_eq!(doc.inner_html("slot").as_deref(), Some("<aside>second</aside>"));
}

#[test]
fn last_registration_wins() {
    let (doc, rt) = runtime(&["one", "two"]);
    let mut loader = ComponentLoader::new();
    loader.register("banner", Component::new("one", Banner { broken: false }));
    loader.register("banner", Component::new("two", Banner { broken: false }));

    loader.mount_all(&rt);

    assert_eq!(loader.names(), ["banner"]);
    assert_eq!(doc.writes(), vec!["two"]);
}

#[test]
fn once_subscription_across_clones() {
    let bus = EventBus::new();
    let clone = bus.clone();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    bus.once(
        "app:ready",
        handler(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }),
    );
    clone.publish("app:ready", &Value::Null);
    bus.publish("app:ready", &Value::Null);

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn carousel_tracks_layout_changes() {
    let (doc, _rt) = runtime(&["logos"]);
    let logos: Vec<LogoEntry> = (0..4)
        .map(|i| LogoEntry::new(format!("{i}.png"), format!("Logo {i}"), format!("{i}")))
        .collect();
    let mut carousel = InfiniteLogoCarousel::new("logos", logos);
    doc.set_layout(carousel.track_id().to_string(), vec![90.0; 8]);

    carousel.init(doc.clone()).unwrap();
    assert_eq!(carousel.wait_measured().await, 360.0);
    assert_eq!(doc.inner_html("logos").unwrap().matches("<img").count(), 8);

    doc.set_layout(carousel.track_id().to_string(), vec![70.0; 8]);
    for _ in 0..5 {
        doc.dispatch(WINDOW, "resize", &Value::Null);
        tokio::time::sleep(Duration::from_millis(30)).await;
    }
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(carousel.measurement_count(), 2);
    assert_eq!(
        doc.style_property(carousel.track_id(), "--scroll-width").as_deref(),
        Some("280px")
    );
}

#[tokio::test]
async fn full_page_lifecycle() {
    let doc = Arc::new(StaticDocument::with_containers(helix::sections::containers()));
    let rt = Runtime::new(doc.clone());
    let ready = record(&rt.bus, helix::APP_READY);
    let mut app = App::new(rt, LandingConfig::default());

    app.init().unwrap();
    assert_eq!(ready.lock().unwrap().len(), 1);
    assert!(app.component("contact").unwrap().is_mounted());

    doc.dispatch(WINDOW, "scroll", &json!({ "scrollY": 300 }));
    assert!(doc.has_class(helix_sections::NAV_ID, "bg-black/80"));

    let rt = app.runtime().clone();
    let header = app.component_mut("header").unwrap();
    header
        .update(to_props(&json!({ "brand_name": "Helix Labs" })), &rt)
        .unwrap();
    assert!(doc.inner_html("header-container").unwrap().contains("Helix Labs"));

    app.destroy();
    assert_eq!(doc.listener_count(WINDOW, "scroll"), 0);
    assert_eq!(doc.listener_count("contact-form", "submit"), 0);
}
