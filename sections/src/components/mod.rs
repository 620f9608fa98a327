//! Leptos UI components for the landing page sections.
//!
//! Each component is a Leptos `#[component]` function taking one typed
//! props struct from [`crate::types`]. They are rendered to strings through
//! the `render_*` functions at the crate root.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── mount containers (filled by the lifecycle layer)
//!     ├── BackgroundLayer
//!     ├── HeaderBar
//!     ├── HeroSection ── slot: LogoTrack
//!     ├── FeaturesSection ── slot: ApiStatusCard
//!     ├── MobileSuiteSection
//!     ├── TestimonialsSection
//!     ├── ContactSection
//!     └── FooterSection
//! ```

mod background;
mod contact;
mod document;
mod features;
mod footer;
mod header;
mod hero;
mod icons;
mod logo_carousel;
mod mobile_suite;
mod testimonials;

pub use background::BackgroundLayer;
pub use contact::ContactSection;
pub use document::PageDocument;
pub use features::{ApiStatusCard, FeaturesSection};
pub use footer::FooterSection;
pub use header::{HeaderBar, NAV_ID};
pub use hero::HeroSection;
pub use icons::*;
pub use logo_carousel::LogoTrack;
pub use mobile_suite::MobileSuiteSection;
pub use testimonials::TestimonialsSection;
