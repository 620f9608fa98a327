use helix_sections::render_contact;
use helix_sections::types::ContactProps;
use tracing::debug;

use crate::component::{ComponentError, MountContext, Props, View, props_as, to_props};
use crate::dom::{ListenerId, listener};

/// Bus event carrying the submitted form values.
pub const CONTACT_SUBMIT: &str = "contact:submit";

/// Contact section. Form submissions are turned into [`CONTACT_SUBMIT`]
/// events; nothing is sent anywhere.
#[derive(Default)]
pub struct ContactView {
    submit_listener: Option<ListenerId>,
}

impl ContactView {
    fn detach(&mut self, cx: &MountContext<'_>) {
        if let Some(id) = self.submit_listener.take() {
            cx.runtime.document.remove_event_listener(id);
        }
    }
}

impl View for ContactView {
    fn kind(&self) -> &'static str {
        "contact"
    }

    fn defaults(&self) -> Props {
        to_props(&ContactProps::default())
    }

    fn render(&self, props: &Props) -> Result<String, ComponentError> {
        Ok(render_contact(&props_as(props)?))
    }

    fn on_mount(&mut self, cx: &MountContext<'_>) -> anyhow::Result<()> {
        self.detach(cx);

        let props: ContactProps = props_as(cx.props)?;
        let bus = cx.runtime.bus.clone();
        let id = cx.runtime.document.add_event_listener(
            &props.form_id,
            "submit",
            listener(move |values| {
                let delivered = bus.publish(CONTACT_SUBMIT, values);
                debug!(delivered, "contact form submitted");
                Ok(())
            }),
        );
        self.submit_listener = Some(id);
        Ok(())
    }

    fn on_unmount(&mut self, cx: &MountContext<'_>) -> anyhow::Result<()> {
        self.detach(cx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::{Value, json};

    use super::*;
    use crate::bus::handler;
    use crate::component::Component;
    use crate::dom::StaticDocument;
    use crate::runtime::Runtime;

    #[test]
    fn submit_publishes_values_unchanged() {
        let doc = Arc::new(StaticDocument::with_containers(["contact-container"]));
        let rt = Runtime::new(doc.clone());
        let received: Arc<Mutex<Vec<Value>>> = Arc::default();
        let sink = received.clone();
        rt.bus.subscribe(
            CONTACT_SUBMIT,
            handler(move |data| {
                sink.lock().unwrap().push(data.clone());
                Ok(())
            }),
        );

        let mut contact = Component::new("contact-container", ContactView::default());
        contact.mount(&rt).unwrap();

        let values = json!({
            "name": "Grace",
            "email": "grace@example.com",
            "project": "",
            "message": "Need a quote"
        });
        assert_eq!(doc.dispatch("contact-form", "submit", &values), 1);
        assert_eq!(*received.lock().unwrap(), vec![values]);
    }

    #[test]
    fn custom_form_id_is_honoured() {
        let doc = Arc::new(StaticDocument::with_containers(["contact-container"]));
        let rt = Runtime::new(doc.clone());
        let mut contact = Component::with_props(
            "contact-container",
            ContactView::default(),
            to_props(&json!({ "form_id": "lead-form" })),
        );

        contact.mount(&rt).unwrap();

        assert_eq!(doc.listener_count("lead-form", "submit"), 1);
        assert_eq!(doc.listener_count("contact-form", "submit"), 0);
    }

    #[test]
    fn unmount_stops_publishing() {
        let doc = Arc::new(StaticDocument::with_containers(["contact-container"]));
        let rt = Runtime::new(doc.clone());
        let mut contact = Component::new("contact-container", ContactView::default());
        contact.mount(&rt).unwrap();

        contact.unmount(&rt).unwrap();

        assert_eq!(doc.dispatch("contact-form", "submit", &json!({})), 0);
    }
}
