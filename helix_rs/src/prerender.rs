//! Static pre-rendering of the whole page.
//!
//! The page is assembled in a [`StaticDocument`] exactly as a browser host
//! would see it after `App::init`, then serialized. Logo widths are not
//! measurable without a layout engine, so every item is assumed to be
//! `carousel.item_width` pixels wide.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::app::App;
use crate::carousel::{CarouselError, track_id_for};
use crate::config::LandingConfig;
use crate::dom::{DomError, StaticDocument};
use crate::loader::BatchReport;
use crate::reveal::RevealObserver;
use crate::runtime::Runtime;
use crate::sections;

const MEASURE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum PrerenderError {
    #[error(transparent)]
    Carousel(#[from] CarouselError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

#[derive(Debug)]
pub struct Prerendered {
    /// Complete HTML document
    pub html: String,
    pub report: BatchReport,
    pub scroll_distance: f64,
}

/// Render the configured page to a complete HTML document.
pub async fn prerender(config: &LandingConfig) -> Result<Prerendered, PrerenderError> {
    let document = Arc::new(StaticDocument::with_containers(sections::containers()));
    let items = 2 * config.carousel.logos.len();
    document.set_layout(
        track_id_for(&config.carousel.container),
        vec![config.carousel.item_width; items],
    );

    let runtime = Runtime::new(document.clone())
        .with_reveal(RevealObserver::new(config.reveal.options.clone()));
    let mut app = App::new(runtime.clone(), config.clone());
    let report = app.init()?;

    let scroll_distance = match app.carousel() {
        Some(carousel) if carousel.is_initialized() => {
            match timeout(MEASURE_TIMEOUT, carousel.wait_measured()).await {
                Ok(distance) => distance,
                Err(_) => {
                    warn!("carousel was not measured in time, leaving it static");
                    carousel.scroll_distance()
                }
            }
        }
        _ => 0.0,
    };

    if config.reveal.reveal_on_build {
        let revealed = runtime.reveal.reveal_all(document.as_ref())?;
        info!(revealed, "reveal targets shown in static output");
    }

    let html = document.render(&config.site.page_meta());
    Ok(Prerendered {
        html,
        report,
        scroll_distance,
    })
}
