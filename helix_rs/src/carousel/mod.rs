//! Infinite logo carousel.
//!
//! The logo sequence is rendered twice inside one track. Once every image
//! below the track has settled, the width of the first copy is written to
//! the track as `--scroll-width` and the animation class is switched on; the
//! CSS animation then translates the track by exactly one copy and loops.
//! Window resizes re-measure after a debounce.

mod debounce;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use helix_sections::render_logo_track;
use helix_sections::styles::{CAROUSEL_ANIMATION_CLASS, SCROLL_WIDTH_PROPERTY};
use helix_sections::types::{LogoEntry, default_logos};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::dom::{DomError, Document, ListenerId, WINDOW, all_settled, listener};

pub use debounce::Debouncer;

/// Container the App mounts the carousel into.
pub const DEFAULT_CONTAINER: &str = "logo-carousel-container";

/// Resize debounce used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Id of the track element rendered inside `container_id`.
pub fn track_id_for(container_id: &str) -> String {
    format!("{container_id}-track")
}

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel measurement needs a running tokio runtime")]
    NoRuntime,

    #[error(transparent)]
    Dom(#[from] DomError),
}

#[derive(Debug, Clone)]
pub struct CarouselOptions {
    pub container_id: String,
    pub logos: Vec<LogoEntry>,
    pub debounce: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER.to_string(),
            logos: default_logos(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Measured {
    distance: f64,
    count: usize,
}

/// Sum the first half of the track's children and publish it on the track.
fn measure(
    document: &dyn Document,
    track_id: &str,
    state: &watch::Sender<Measured>,
) -> Result<f64, DomError> {
    let widths = document.child_widths(track_id);
    let half = widths.len() / 2;
    let distance: f64 = widths
        .iter()
        .take(half)
        .copied()
        .filter(|width| width.is_finite() && *width > 0.0)
        .sum();

    document.set_style_property(track_id, SCROLL_WIDTH_PROPERTY, &format!("{distance}px"))?;
    document.toggle_class(track_id, CAROUSEL_ANIMATION_CLASS, distance > 0.0)?;

    state.send_modify(|m| {
        m.distance = distance;
        m.count += 1;
    });
    debug!(track = track_id, distance, items = half, "carousel measured");
    Ok(distance)
}

/// Measure if the document is still alive; failures are logged.
fn remeasure(document: &Weak<dyn Document>, track_id: &str, state: &watch::Sender<Measured>) {
    let Some(document) = document.upgrade() else {
        return;
    };
    if let Err(e) = measure(document.as_ref(), track_id, state) {
        warn!(track = track_id, "carousel measurement failed: {e}");
    }
}

struct Attached {
    document: Arc<dyn Document>,
    listener: ListenerId,
    debouncer: Debouncer,
    measure_task: JoinHandle<()>,
}

/// Horizontally looping logo strip. Not a [`Component`](crate::Component):
/// it owns a resize listener and background tasks instead of lifecycle hooks.
pub struct InfiniteLogoCarousel {
    options: CarouselOptions,
    track_id: String,
    state: Arc<watch::Sender<Measured>>,
    attached: Option<Attached>,
    destroyed: Arc<AtomicBool>,
}

impl std::fmt::Debug for InfiniteLogoCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfiniteLogoCarousel")
            .field("container_id", &self.options.container_id)
            .field("logos", &self.options.logos.len())
            .field("attached", &self.attached.is_some())
            .finish()
    }
}

impl InfiniteLogoCarousel {
    pub fn new(container_id: impl Into<String>, logos: Vec<LogoEntry>) -> Self {
        Self::with_options(CarouselOptions {
            container_id: container_id.into(),
            logos,
            ..Default::default()
        })
    }

    pub fn with_options(options: CarouselOptions) -> Self {
        let (state, _) = watch::channel(Measured::default());
        Self {
            track_id: track_id_for(&options.container_id),
            options,
            state: Arc::new(state),
            attached: None,
            destroyed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.options.container_id
    }

    pub fn track_id(&self) -> &str {
        &self.track_id
    }

    pub fn logos(&self) -> &[LogoEntry] {
        &self.options.logos
    }

    /// Track markup: every logo twice, originals first.
    pub fn render(&self) -> String {
        render_logo_track(&self.options.logos, &self.track_id)
    }

    pub fn is_initialized(&self) -> bool {
        self.attached.is_some()
    }

    /// Mount into the container, measure once images settle, and re-measure
    /// on (debounced) window resize.
    ///
    /// A missing container is logged and leaves the carousel detached.
    /// Calling `init` on an initialized carousel re-attaches it.
    pub fn init(&mut self, document: Arc<dyn Document>) -> Result<(), CarouselError> {
        let container = self.options.container_id.clone();
        if !document.contains(&container) {
            error!(container = %container, "carousel container not found");
            return Ok(());
        }
        let handle = Handle::try_current().map_err(|_| CarouselError::NoRuntime)?;

        self.destroy();
        self.destroyed = Arc::new(AtomicBool::new(false));

        document.set_inner_html(&container, self.render())?;

        let weak = Arc::downgrade(&document);
        let loads = document.image_loads(&self.track_id);
        let pending_images = loads.len();

        let measure_task = {
            let weak = weak.clone();
            let track = self.track_id.clone();
            let state = self.state.clone();
            let destroyed = self.destroyed.clone();
            handle.spawn(async move {
                all_settled(loads).await;
                if !destroyed.load(Ordering::SeqCst) {
                    remeasure(&weak, &track, &state);
                }
            })
        };

        let debouncer = {
            let track = self.track_id.clone();
            let state = self.state.clone();
            let destroyed = self.destroyed.clone();
            Debouncer::new(self.options.debounce, handle, move || {
                if !destroyed.load(Ordering::SeqCst) {
                    remeasure(&weak, &track, &state);
                }
            })
        };

        let on_resize = debouncer.clone();
        let listener = document.add_event_listener(
            WINDOW,
            "resize",
            listener(move |_| {
                on_resize.trigger();
                Ok(())
            }),
        );

        info!(
            container = %container,
            logos = self.options.logos.len(),
            pending_images,
            "carousel initialized"
        );

        self.attached = Some(Attached {
            document,
            listener,
            debouncer,
            measure_task,
        });
        Ok(())
    }

    /// Re-measure right now, bypassing the debounce.
    pub fn measure(&self) -> Result<f64, CarouselError> {
        match &self.attached {
            Some(attached) => Ok(measure(
                attached.document.as_ref(),
                &self.track_id,
                &self.state,
            )?),
            None => Ok(self.scroll_distance()),
        }
    }

    /// Width of one logo sequence, as last measured (0 before measurement).
    pub fn scroll_distance(&self) -> f64 {
        self.state.borrow().distance
    }

    /// How many measurements have completed.
    pub fn measurement_count(&self) -> usize {
        self.state.borrow().count
    }

    /// Wait until at least one measurement has completed and return the
    /// distance. A detached carousel never measures, so it returns the last
    /// known distance right away.
    pub async fn wait_measured(&self) -> f64 {
        if self.attached.is_none() {
            return self.scroll_distance();
        }
        let mut rx = self.state.subscribe();
        match rx.wait_for(|m| m.count > 0).await {
            Ok(m) => m.distance,
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => self.scroll_distance(),
        }
    }

    /// Remove the resize listener and stop pending measurements.
    pub fn destroy(&mut self) {
        self.destroyed.store(true, Ordering::SeqCst);
        if let Some(attached) = self.attached.take() {
            attached.document.remove_event_listener(attached.listener);
            attached.debouncer.cancel();
            attached.measure_task.abort();
            debug!(container = %self.options.container_id, "carousel destroyed");
        }
    }
}

impl Drop for InfiniteLogoCarousel {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::sleep;

    use super::*;
    use crate::dom::StaticDocument;
    use serde_json::Value;

    fn logos(n: usize) -> Vec<LogoEntry> {
        (0..n)
            .map(|i| LogoEntry::new(format!("logo-{i}.png"), format!("Logo {i}"), format!("L{i}")))
            .collect()
    }

    fn document() -> Arc<StaticDocument> {
        Arc::new(StaticDocument::with_containers([DEFAULT_CONTAINER]))
    }

    #[test]
    fn render_contains_every_logo_twice() {
        let carousel = InfiniteLogoCarousel::new(DEFAULT_CONTAINER, logos(8));
        let html = carousel.render();

        assert_eq!(html.matches("<img").count(), 16);
        assert!(html.contains("id=\"logo-carousel-container-track\""));
    }

    #[tokio::test]
    async fn distance_is_width_of_first_copy() {
        let doc = document();
        doc.set_layout(track_id_for(DEFAULT_CONTAINER), vec![100.0, 120.0, 80.0, 100.0, 120.0, 80.0]);
        let mut carousel = InfiniteLogoCarousel::new(DEFAULT_CONTAINER, logos(3));

        carousel.init(doc.clone()).unwrap();
        let distance = carousel.wait_measured().await;

        assert_eq!(distance, 300.0);
        let track = carousel.track_id();
        assert_eq!(doc.style_property(track, "--scroll-width").as_deref(), Some("300px"));
        assert!(doc.has_class(track, CAROUSEL_ANIMATION_CLASS));
    }

    #[tokio::test]
    async fn zero_logos_measure_zero() {
        let doc = document();
        let mut carousel = InfiniteLogoCarousel::new(DEFAULT_CONTAINER, Vec::new());

        carousel.init(doc.clone()).unwrap();
        assert_eq!(carousel.wait_measured().await, 0.0);

        let track = carousel.track_id();
        assert_eq!(doc.style_property(track, "--scroll-width").as_deref(), Some("0px"));
        assert!(!doc.has_class(track, CAROUSEL_ANIMATION_CLASS));
    }

    #[tokio::test]
    async fn measurement_waits_for_every_image() {
        let doc = document();
        let track = track_id_for(DEFAULT_CONTAINER);
        doc.set_layout(&track, vec![50.0; 4]);
        let mut signals = doc.stage_images(&track, 4).into_iter();
        let mut carousel = InfiniteLogoCarousel::new(DEFAULT_CONTAINER, logos(2));

        carousel.init(doc.clone()).unwrap();
        signals.next().unwrap().loaded();
        signals.next().unwrap().failed();
        signals.next().unwrap().loaded();
        tokio::task::yield_now().await;
        assert_eq!(carousel.measurement_count(), 0);

        // A signal dropped without reporting settles too.
        drop(signals);
        assert_eq!(carousel.wait_measured().await, 100.0);
        assert_eq!(carousel.measurement_count(), 1);
    }

    #[tokio::test]
    async fn missing_container_leaves_carousel_detached() {
        let doc = Arc::new(StaticDocument::new());
        let mut carousel = InfiniteLogoCarousel::new("nowhere", logos(2));

        carousel.init(doc.clone()).unwrap();

        assert!(!carousel.is_initialized());
        assert!(doc.writes().is_empty());
        assert_eq!(doc.listener_count(WINDOW, "resize"), 0);
    }

    #[tokio::test]
    async fn detached_carousel_does_not_wait_for_measurement() {
        let doc = Arc::new(StaticDocument::new());
        let mut carousel = InfiniteLogoCarousel::new("nowhere", logos(2));
        carousel.init(doc).unwrap();

        let distance = tokio::time::timeout(Duration::from_secs(1), carousel.wait_measured())
            .await
            .expect("wait_measured returns for a detached carousel");

        assert_eq!(distance, 0.0);
        assert_eq!(carousel.measurement_count(), 0);
    }

    #[test]
    fn init_outside_a_runtime_is_an_error() {
        let doc = document();
        let mut carousel = InfiniteLogoCarousel::new(DEFAULT_CONTAINER, logos(1));
        assert!(matches!(carousel.init(doc), Err(CarouselError::NoRuntime)));
    }

    #[tokio::test(start_paused = true)]
    async fn resize_burst_recomputes_once() {
        let doc = document();
        doc.set_layout(track_id_for(DEFAULT_CONTAINER), vec![40.0; 4]);
        let mut carousel = InfiniteLogoCarousel::new(DEFAULT_CONTAINER, logos(2));
        carousel.init(doc.clone()).unwrap();
        carousel.wait_measured().await;
        assert_eq!(carousel.measurement_count(), 1);

        doc.set_layout(track_id_for(DEFAULT_CONTAINER), vec![60.0; 4]);
        for _ in 0..5 {
            doc.dispatch(WINDOW, "resize", &Value::Null);
            sleep(Duration::from_millis(50)).await;
        }
        sleep(Duration::from_millis(200)).await;

        assert_eq!(carousel.measurement_count(), 2);
        assert_eq!(carousel.scroll_distance(), 120.0);
    }

    #[tokio::test(start_paused = true)]
    async fn destroy_detaches_resize_listener() {
        let doc = document();
        let mut carousel = InfiniteLogoCarousel::new(DEFAULT_CONTAINER, logos(2));
        carousel.init(doc.clone()).unwrap();
        carousel.wait_measured().await;
        assert_eq!(doc.listener_count(WINDOW, "resize"), 1);

        doc.dispatch(WINDOW, "resize", &Value::Null);
        carousel.destroy();
        sleep(Duration::from_millis(500)).await;

        assert_eq!(doc.listener_count(WINDOW, "resize"), 0);
        assert_eq!(carousel.measurement_count(), 1);
        assert!(!carousel.is_initialized());
    }
}
