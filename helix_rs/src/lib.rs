//! # helix
//!
//! **Component lifecycle for the DoubleHelix landing page** - a small,
//! explicit framework that mounts server-rendered sections into a host
//! document, plus the infinite logo carousel and a static pre-renderer.
//!
//! ## Features
//!
//! - **Component lifecycle** - render / mount / unmount / update over a [`View`]
//! - **Ordered loader** - batch mounting with per-component failure isolation
//! - **Event bus** - synchronous publish/subscribe with `once` and handles
//! - **Logo carousel** - duplicated track, image-settled measurement, debounced resize
//! - **Static output** - the whole page rendered to one HTML document
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use helix::{App, LandingConfig, Runtime, StaticDocument, sections};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let document = Arc::new(StaticDocument::with_containers(sections::containers()));
//! let mut app = App::new(Runtime::new(document.clone()), LandingConfig::default());
//!
//! let report = app.init()?;
//! assert!(report.is_clean());
//! println!("{}", document.render(&Default::default()));
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! helix build --out dist/index.html   # Pre-render the page
//! helix sections                      # Mount order and containers
//! helix check --config helix.toml     # Render every section, report failures
//! ```

pub mod app;
pub mod bus;
pub mod carousel;
pub mod cli;
pub mod component;
pub mod config;
pub mod dom;
pub mod loader;
pub mod prerender;
pub mod reveal;
pub mod runtime;
pub mod scripts;
pub mod sections;

pub use app::{APP_READY, App};
pub use bus::{EventBus, Handler, Subscription, handler};
pub use carousel::{CarouselError, CarouselOptions, InfiniteLogoCarousel};
pub use component::{Component, ComponentError, MountContext, Props, View};
pub use config::LandingConfig;
pub use dom::{Document, DomError, StaticDocument};
pub use loader::{BatchReport, ComponentLoader};
pub use prerender::{Prerendered, prerender};
pub use reveal::{RevealObserver, RevealOptions};
pub use runtime::Runtime;
pub use scripts::ScriptRegistry;
