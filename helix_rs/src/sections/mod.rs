//! Landing page sections as lifecycle views.
//!
//! Markup comes from `helix-sections`; this module adds the typed props
//! round-trip and the hooks (scroll listener, form interception, nested
//! status card, background script).

mod background;
mod contact;
mod features;
mod header;

use std::marker::PhantomData;

use helix_sections::types::{
    ApiStatusProps, FooterProps, HeroProps, MobileSuiteProps, TestimonialsProps,
};
use helix_sections::{render_api_status, render_footer, render_hero, render_mobile_suite, render_testimonials};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::component::{Component, ComponentError, Props, View, props_as, to_props};

pub use background::{BACKGROUND_SCRIPT, BackgroundView};
pub use contact::{CONTACT_SUBMIT, ContactView};
pub use features::FeaturesView;
pub use header::{HeaderView, SCROLL_THRESHOLD, SCROLLED_CLASS};

/// Hook-less view: typed props in, markup out.
pub struct MarkupView<P> {
    kind: &'static str,
    render: fn(&P) -> String,
    _props: PhantomData<fn() -> P>,
}

impl<P> MarkupView<P> {
    pub const fn new(kind: &'static str, render: fn(&P) -> String) -> Self {
        Self {
            kind,
            render,
            _props: PhantomData,
        }
    }
}

impl<P> View for MarkupView<P>
where
    P: Serialize + DeserializeOwned + Default,
{
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn defaults(&self) -> Props {
        to_props(&P::default())
    }

    fn render(&self, props: &Props) -> Result<String, ComponentError> {
        let props: P = props_as(props)?;
        Ok((self.render)(&props))
    }
}

pub fn hero_view() -> MarkupView<HeroProps> {
    MarkupView::new("hero", render_hero)
}

pub fn mobile_suite_view() -> MarkupView<MobileSuiteProps> {
    MarkupView::new("mobileSuite", render_mobile_suite)
}

pub fn testimonials_view() -> MarkupView<TestimonialsProps> {
    MarkupView::new("testimonials", render_testimonials)
}

pub fn footer_view() -> MarkupView<FooterProps> {
    MarkupView::new("footer", render_footer)
}

pub fn api_status_view() -> MarkupView<ApiStatusProps> {
    MarkupView::new("apiStatus", render_api_status)
}

/// A page section: registry name, mount container and view factory.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub name: &'static str,
    pub container: &'static str,
    view: fn() -> Box<dyn View>,
}

impl SectionSpec {
    /// Fresh component with `overrides` merged over the view defaults.
    pub fn build(&self, overrides: Props) -> Component {
        Component::boxed(self.container, (self.view)(), overrides)
    }
}

/// Every section of the page, in mount order.
pub static SECTIONS: [SectionSpec; 8] = [
    SectionSpec {
        name: "background",
        container: "background-container",
        view: || Box::new(BackgroundView),
    },
    SectionSpec {
        name: "header",
        container: "header-container",
        view: || Box::new(HeaderView::default()),
    },
    SectionSpec {
        name: "hero",
        container: "hero-container",
        view: || Box::new(hero_view()),
    },
    SectionSpec {
        name: "features",
        container: "features-container",
        view: || Box::new(FeaturesView::default()),
    },
    SectionSpec {
        name: "mobileSuite",
        container: "mobile-suite-container",
        view: || Box::new(mobile_suite_view()),
    },
    SectionSpec {
        name: "testimonials",
        container: "testimonials-container",
        view: || Box::new(testimonials_view()),
    },
    SectionSpec {
        name: "contact",
        container: "contact-container",
        view: || Box::new(ContactView::default()),
    },
    SectionSpec {
        name: "footer",
        container: "footer-container",
        view: || Box::new(footer_view()),
    },
];

pub fn section(name: &str) -> Option<&'static SectionSpec> {
    SECTIONS.iter().find(|spec| spec.name == name)
}

/// Top-level containers of the page, in mount order.
pub fn containers() -> impl Iterator<Item = &'static str> {
    SECTIONS.iter().map(|spec| spec.container)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;

    #[test]
    fn every_section_renders_its_defaults() {
        for spec in &SECTIONS {
            let component = spec.build(Props::new());
            let html = component
                .render()
                .unwrap_or_else(|e| panic!("{} failed: {e}", spec.name));
            assert!(!html.is_empty(), "{} rendered nothing", spec.name);
        }
    }

    #[test]
    fn names_and_containers_are_unique() {
        let names: HashSet<_> = SECTIONS.iter().map(|s| s.name).collect();
        let containers: HashSet<_> = containers().collect();
        assert_eq!(names.len(), SECTIONS.len());
        assert_eq!(containers.len(), SECTIONS.len());
    }

    #[test]
    fn overrides_reach_the_markup() {
        let hero = section("hero").unwrap();
        let component = hero.build(to_props(&json!({ "cta_text": "Ship It" })));
        assert!(component.render().unwrap().contains("Ship It"));
    }

    #[test]
    fn ill_typed_override_fails_render() {
        let footer = section("footer").unwrap();
        let component = footer.build(to_props(&json!({ "link_columns": "nope" })));
        assert!(matches!(component.render(), Err(ComponentError::Props(_))));
    }

    #[test]
    fn unknown_keys_are_kept_but_ignored() {
        let footer = section("footer").unwrap();
        let component = footer.build(to_props(&json!({ "theme": "dark" })));
        assert_eq!(component.props()["theme"], json!("dark"));
        assert!(component.render().is_ok());
    }
}
