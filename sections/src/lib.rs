//! # helix-sections
//!
//! Leptos SSR views for the DoubleHelix landing page.
//!
//! Every section is a pure function of one typed props struct: no reactive
//! runtime, no hidden state, no DOM access. The lifecycle layer (`helix`)
//! decides where and when the produced markup is mounted.
//!
//! ## Quick Start
//!
//! ```rust
//! use helix_sections::{render_header, types::HeaderProps};
//!
//! let html = render_header(&HeaderProps::default());
//! assert!(html.contains("DoubleHelix"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - props structs with the shipped copy as defaults
//! - [`components`] - Leptos `#[component]` functions
//! - [`styles`] - hand-written CSS and the class/property names it defines
//!
//! ## Leptos 0.8 SSR
//!
//! Markup is produced with `RenderHtml::to_html()`:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <HeroSection props=props /> }.to_html();
//! ```
//!
//! ---
//!
//! Built by The DoubleHelix Web Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::{
    ApiStatusCard, BackgroundLayer, ContactSection, FeaturesSection, FooterSection, HeaderBar,
    HeroSection, LogoTrack, MobileSuiteSection, PageDocument, TestimonialsSection,
};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{
    ApiStatusProps, BackgroundProps, ContactProps, FeaturesProps, FooterProps, HeaderProps,
    HeroProps, LogoEntry, MobileSuiteProps, TestimonialsProps,
};

pub use components::NAV_ID;

/// Render the animated background layer.
pub fn render_background(props: &BackgroundProps) -> String {
    view! { <BackgroundLayer props=props.clone() /> }.to_html()
}

/// Render the navigation header.
pub fn render_header(props: &HeaderProps) -> String {
    view! { <HeaderBar props=props.clone() /> }.to_html()
}

/// Render the hero section (with an empty logo carousel slot).
pub fn render_hero(props: &HeroProps) -> String {
    view! { <HeroSection props=props.clone() /> }.to_html()
}

/// Render the features grid (with an empty API status slot).
pub fn render_features(props: &FeaturesProps) -> String {
    view! { <FeaturesSection props=props.clone() /> }.to_html()
}

/// Render the API status card.
pub fn render_api_status(props: &ApiStatusProps) -> String {
    view! { <ApiStatusCard props=props.clone() /> }.to_html()
}

/// Render the mobile suite showcase.
pub fn render_mobile_suite(props: &MobileSuiteProps) -> String {
    view! { <MobileSuiteSection props=props.clone() /> }.to_html()
}

/// Render the testimonials section.
pub fn render_testimonials(props: &TestimonialsProps) -> String {
    view! { <TestimonialsSection props=props.clone() /> }.to_html()
}

/// Render the contact section and its form.
pub fn render_contact(props: &ContactProps) -> String {
    view! { <ContactSection props=props.clone() /> }.to_html()
}

/// Render the footer.
pub fn render_footer(props: &FooterProps) -> String {
    view! { <FooterSection props=props.clone() /> }.to_html()
}

/// Render the logo strip: `logos` twice, back to back, inside a track with
/// id `track_id`.
pub fn render_logo_track(logos: &[LogoEntry], track_id: &str) -> String {
    view! { <LogoTrack logos=logos.to_vec() track_id=track_id.to_string() /> }.to_html()
}

/// Extra `<head>` content requested by the lifecycle layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadEntry {
    /// External script, loaded with `defer`
    Script {
        /// Script URL
        src: String,
    },
    /// Inline script body
    InlineScript(String),
    /// Inline stylesheet
    Style(String),
}

/// Document-level metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    /// `<title>`
    pub title: String,
    /// `<html lang>`
    pub lang: String,
    /// `<meta name="description">`
    pub description: String,
    /// Additional head entries, in insertion order
    pub head: Vec<HeadEntry>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "DoubleHelix - Unified infrastructure for the decentralized web".into(),
            lang: "en".into(),
            description: "Scale your app with smart infrastructure.".into(),
            head: Vec::new(),
        }
    }
}

/// A top-level mount container with the markup mounted into it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MountedContainer {
    /// Element id
    pub id: String,
    /// Classes added to the container element
    pub classes: Vec<String>,
    /// Inner HTML (already rendered, inserted verbatim)
    pub html: String,
}

/// Render a complete HTML document around already-mounted containers.
///
/// # Example
///
/// ```rust
/// use helix_sections::{render_document, MountedContainer, PageMeta};
///
/// let html = render_document(
///     &PageMeta::default(),
///     &[MountedContainer {
///         id: "hero-container".into(),
///         html: "<p>hi</p>".into(),
///         ..Default::default()
///     }],
/// );
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_document(meta: &PageMeta, containers: &[MountedContainer]) -> String {
    let doc = view! { <PageDocument meta=meta.clone() containers=containers.to_vec() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
