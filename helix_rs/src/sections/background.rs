use helix_sections::types::BackgroundProps;
use helix_sections::{HeadEntry, render_background};

use crate::component::{ComponentError, MountContext, Props, View, props_as, to_props};

/// Registry name of the animated background script.
pub const BACKGROUND_SCRIPT: &str = "unicorn-studio";

const INIT_SCRIPT: &str = "window.addEventListener('load', function () { \
if (window.UnicornStudio && !window.UnicornStudio.isInitialized) { \
UnicornStudio.init(); window.UnicornStudio.isInitialized = true; } });";

/// Fixed animated background. Loads its script on first mount.
pub struct BackgroundView;

impl View for BackgroundView {
    fn kind(&self) -> &'static str {
        "background"
    }

    fn defaults(&self) -> Props {
        to_props(&BackgroundProps::default())
    }

    fn render(&self, props: &Props) -> Result<String, ComponentError> {
        Ok(render_background(&props_as(props)?))
    }

    fn on_mount(&mut self, cx: &MountContext<'_>) -> anyhow::Result<()> {
        let props: BackgroundProps = props_as(cx.props)?;
        if !props.enable_animation {
            return Ok(());
        }

        let document = cx.runtime.document.as_ref();
        if cx
            .runtime
            .scripts
            .ensure_loaded(document, BACKGROUND_SCRIPT, &props.script_src)
        {
            document.append_head(HeadEntry::InlineScript(INIT_SCRIPT.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::component::Component;
    use crate::dom::StaticDocument;
    use crate::runtime::Runtime;

    #[test]
    fn script_is_loaded_once_across_remounts() {
        let doc = Arc::new(StaticDocument::with_containers(["background-container"]));
        let rt = Runtime::new(doc.clone());
        let mut background = Component::new("background-container", BackgroundView);

        background.mount(&rt).unwrap();
        background.mount(&rt).unwrap();

        let head = doc.head_entries();
        assert_eq!(head.len(), 2);
        assert!(matches!(&head[0], HeadEntry::Script { src } if src.contains("unicornStudio")));
        assert!(rt.scripts.is_loaded(BACKGROUND_SCRIPT));
    }

    #[test]
    fn disabled_animation_loads_nothing() {
        let doc = Arc::new(StaticDocument::with_containers(["background-container"]));
        let rt = Runtime::new(doc.clone());
        let mut background = Component::with_props(
            "background-container",
            BackgroundView,
            to_props(&json!({ "enable_animation": false })),
        );

        background.mount(&rt).unwrap();

        assert!(doc.head_entries().is_empty());
        assert!(!rt.scripts.is_loaded(BACKGROUND_SCRIPT));
    }
}
