use helix_sections::render_features;
use helix_sections::types::FeaturesProps;

use super::api_status_view;
use crate::component::{Component, ComponentError, MountContext, Props, View, props_as, to_props};

/// Features grid. Mounts the API status card into its own slot.
#[derive(Default)]
pub struct FeaturesView {
    status_card: Option<Component>,
}

impl FeaturesView {
    fn release_card(&mut self, cx: &MountContext<'_>) -> Result<(), ComponentError> {
        match self.status_card.take() {
            Some(mut card) => card.unmount(cx.runtime),
            None => Ok(()),
        }
    }
}

impl View for FeaturesView {
    fn kind(&self) -> &'static str {
        "features"
    }

    fn defaults(&self) -> Props {
        to_props(&FeaturesProps::default())
    }

    fn render(&self, props: &Props) -> Result<String, ComponentError> {
        Ok(render_features(&props_as(props)?))
    }

    fn on_mount(&mut self, cx: &MountContext<'_>) -> anyhow::Result<()> {
        self.release_card(cx)?;

        let props: FeaturesProps = props_as(cx.props)?;
        let mut card = Component::with_props(
            props.status_slot,
            api_status_view(),
            to_props(&props.status),
        );
        card.mount(cx.runtime)?;
        self.status_card = Some(card);
        Ok(())
    }

    fn on_unmount(&mut self, cx: &MountContext<'_>) -> anyhow::Result<()> {
        self.release_card(cx)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::dom::{Document, StaticDocument};
    use crate::runtime::Runtime;

    #[test]
    fn status_card_lands_in_its_slot() {
        let doc = Arc::new(StaticDocument::with_containers(["features-container"]));
        let rt = Runtime::new(doc.clone());
        let mut features = Component::new("features-container", FeaturesView::default());

        features.mount(&rt).unwrap();

        assert_eq!(doc.writes(), vec!["features-container", "api-status-card"]);
        assert!(doc.inner_html("api-status-card").unwrap().contains("REST Gateway"));

        let page = doc.render(&Default::default());
        let slot = page.find("id=\"api-status-card\"").unwrap();
        let gateway = page.find("REST Gateway").unwrap();
        assert!(slot < gateway);
    }

    #[test]
    fn status_overrides_reach_the_card() {
        let doc = Arc::new(StaticDocument::with_containers(["features-container"]));
        let rt = Runtime::new(doc.clone());
        let mut features = Component::with_props(
            "features-container",
            FeaturesView::default(),
            to_props(&json!({
                "status": { "status_items": [
                    { "name": "Edge Relay", "region": "eu-west", "status": "active", "color": "emerald" }
                ] }
            })),
        );

        features.mount(&rt).unwrap();

        let card = doc.inner_html("api-status-card").unwrap();
        assert!(card.contains("Edge Relay"));
        assert!(!card.contains("REST Gateway"));
    }

    #[test]
    fn unmount_takes_the_card_down() {
        let doc = Arc::new(StaticDocument::with_containers(["features-container"]));
        let rt = Runtime::new(doc.clone());
        let mut features = Component::new("features-container", FeaturesView::default());
        features.mount(&rt).unwrap();

        features.unmount(&rt).unwrap();

        assert!(!doc.contains("api-status-card"));
        assert_eq!(doc.inner_html("features-container").as_deref(), Some(""));
    }
}
