//! Page orchestrator.

use helix_sections::HeadEntry;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::carousel::{CarouselError, InfiniteLogoCarousel};
use crate::component::Component;
use crate::config::LandingConfig;
use crate::loader::{BatchReport, ComponentLoader};
use crate::runtime::Runtime;
use crate::sections::SECTIONS;

/// Bus event published once the page is up. Payload: section names in
/// mount order.
pub const APP_READY: &str = "app:ready";

/// Owns the section components and the logo carousel of one page.
pub struct App {
    runtime: Runtime,
    config: LandingConfig,
    loader: ComponentLoader,
    carousel: Option<InfiniteLogoCarousel>,
    initialized: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("sections", &self.loader.names())
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl App {
    pub fn new(runtime: Runtime, config: LandingConfig) -> Self {
        Self {
            runtime,
            config,
            loader: ComponentLoader::new(),
            carousel: None,
            initialized: false,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Registered component by section name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.loader.get(name)
    }

    pub fn component_mut(&mut self, name: &str) -> Option<&mut Component> {
        self.loader.get_mut(name)
    }

    /// Section names in mount order.
    pub fn section_names(&self) -> &[String] {
        self.loader.names()
    }

    pub fn carousel(&self) -> Option<&InfiniteLogoCarousel> {
        self.carousel.as_ref()
    }

    /// Register and mount every section, wire icons, reveal and carousel,
    /// then publish [`APP_READY`]. A second call is a logged no-op.
    ///
    /// Must run inside a tokio runtime (the carousel measures on it). When the
    /// carousel cannot start, the mounted sections are torn down again and
    /// the app stays uninitialized, so a later `init` starts clean.
    pub fn init(&mut self) -> Result<BatchReport, CarouselError> {
        if self.initialized {
            warn!("app already initialized");
            return Ok(BatchReport::default());
        }

        self.register_sections();
        let report = self.loader.mount_all(&self.runtime);

        self.apply_integrations();

        let observed = self.runtime.reveal.observe_marked(self.runtime.document.as_ref());

        let mut carousel = InfiniteLogoCarousel::with_options(self.config.carousel.options());
        if let Err(e) = carousel.init(self.runtime.document.clone()) {
            error!("carousel failed to start, unmounting sections: {e}");
            self.loader.clear(&self.runtime);
            self.runtime.reveal.reset();
            return Err(e);
        }
        self.carousel = Some(carousel);

        self.initialized = true;
        info!(
            sections = report.succeeded.len(),
            failed = report.failed.len(),
            reveal_targets = observed,
            "app initialized"
        );

        let names: Vec<Value> = self
            .loader
            .names()
            .iter()
            .map(|name| Value::String(name.clone()))
            .collect();
        self.runtime.bus.publish(APP_READY, &Value::Array(names));
        Ok(report)
    }

    fn register_sections(&mut self) {
        for spec in &SECTIONS {
            let mut overrides = self.config.section_overrides(spec.name);
            if spec.name == "hero" && !overrides.contains_key("carousel_container") {
                overrides.insert(
                    "carousel_container".to_string(),
                    Value::String(self.config.carousel.container.clone()),
                );
            }
            self.loader.register(spec.name, spec.build(overrides));
        }

        for name in self.config.sections.keys() {
            if !SECTIONS.iter().any(|spec| spec.name == name) {
                warn!(section = %name, "overrides for unknown section ignored");
            }
        }
    }

    /// Append the enabled icon libraries and their initializers to the head.
    fn apply_integrations(&self) {
        let integrations = &self.config.integrations;
        let document = self.runtime.document.as_ref();
        let scripts = &self.runtime.scripts;

        if integrations.lucide && scripts.ensure_loaded(document, "lucide", &integrations.lucide_src)
        {
            document.append_head(HeadEntry::InlineScript(
                "window.addEventListener('load', function () { if (window.lucide) lucide.createIcons(); });"
                    .to_string(),
            ));
        }
        if integrations.iconify
            && scripts.ensure_loaded(document, "iconify", &integrations.iconify_src)
        {
            document.append_head(HeadEntry::InlineScript(
                "window.addEventListener('load', function () { if (window.Iconify) Iconify.scan(); });"
                    .to_string(),
            ));
        }
    }

    /// Tear down the carousel and every section.
    pub fn destroy(&mut self) -> BatchReport {
        if let Some(mut carousel) = self.carousel.take() {
            carousel.destroy();
        }
        let report = self.loader.clear(&self.runtime);
        self.runtime.reveal.reset();
        self.initialized = false;
        info!("app destroyed");
        report
    }
}
