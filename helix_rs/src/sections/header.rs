use std::sync::Arc;

use helix_sections::types::HeaderProps;
use helix_sections::{NAV_ID, render_header};
use serde_json::Value;

use crate::component::{ComponentError, MountContext, Props, View, props_as, to_props};
use crate::dom::{ListenerId, WINDOW, listener};

/// Class the nav gets once the page is scrolled past [`SCROLL_THRESHOLD`].
pub const SCROLLED_CLASS: &str = "bg-black/80";

/// Vertical scroll offset (px) above which the nav turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Fixed navigation bar with a scroll-dependent backdrop.
#[derive(Default)]
pub struct HeaderView {
    scroll_listener: Option<ListenerId>,
}

impl HeaderView {
    fn detach(&mut self, cx: &MountContext<'_>) {
        if let Some(id) = self.scroll_listener.take() {
            cx.runtime.document.remove_event_listener(id);
        }
    }
}

impl View for HeaderView {
    fn kind(&self) -> &'static str {
        "header"
    }

    fn defaults(&self) -> Props {
        to_props(&HeaderProps::default())
    }

    fn render(&self, props: &Props) -> Result<String, ComponentError> {
        Ok(render_header(&props_as(props)?))
    }

    fn on_mount(&mut self, cx: &MountContext<'_>) -> anyhow::Result<()> {
        self.detach(cx);

        let document = Arc::downgrade(&cx.runtime.document);
        let id = cx.runtime.document.add_event_listener(
            WINDOW,
            "scroll",
            listener(move |event| {
                let Some(document) = document.upgrade() else {
                    return Ok(());
                };
                if !document.contains(NAV_ID) {
                    return Ok(());
                }
                let scroll_y = event.get("scrollY").and_then(Value::as_f64).unwrap_or(0.0);
                document.toggle_class(NAV_ID, SCROLLED_CLASS, scroll_y > SCROLL_THRESHOLD)?;
                Ok(())
            }),
        );
        self.scroll_listener = Some(id);
        Ok(())
    }

    fn on_unmount(&mut self, cx: &MountContext<'_>) -> anyhow::Result<()> {
        self.detach(cx);
        Ok(())
    }
}
