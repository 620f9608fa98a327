//! Configuration file support.
//!
//! An optional `helix.toml` overrides section props, carousel and reveal
//! options, icon integrations and page metadata:
//!
//! ```toml
//! [site]
//! title = "Acme"
//!
//! [sections.header]
//! brand_name = "Acme"
//!
//! [carousel]
//! debounce_ms = 200
//! logos = [{ src = "a.png", alt = "Alpha", label = "Alpha" }]
//!
//! [integrations]
//! iconify = false
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use helix_sections::PageMeta;
use helix_sections::types::{LogoEntry, default_logos};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::carousel::{CarouselOptions, DEFAULT_CONTAINER, DEFAULT_DEBOUNCE};
use crate::component::Props;
use crate::reveal::RevealOptions;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "helix.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub site: SiteConfig,
    /// Props overrides per section name, merged shallowly over defaults
    pub sections: BTreeMap<String, Props>,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub integrations: IntegrationsConfig,
}

/// Document-level metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub lang: String,
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let meta = PageMeta::default();
        Self {
            title: meta.title,
            lang: meta.lang,
            description: meta.description,
        }
    }
}

impl SiteConfig {
    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            title: self.title.clone(),
            lang: self.lang.clone(),
            description: self.description.clone(),
            head: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Element id the carousel mounts into (rendered by the hero section)
    pub container: String,
    pub logos: Vec<LogoEntry>,
    pub debounce_ms: u64,
    /// Width (px) assumed for every logo item when pre-rendering
    pub item_width: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            logos: default_logos(),
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            item_width: 176.0,
        }
    }
}

impl CarouselConfig {
    pub fn options(&self) -> CarouselOptions {
        CarouselOptions {
            container_id: self.container.clone(),
            logos: self.logos.clone(),
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    #[serde(flatten)]
    pub options: RevealOptions,
    /// Reveal every marked element in pre-rendered output
    pub reveal_on_build: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            options: RevealOptions::default(),
            reveal_on_build: true,
        }
    }
}

/// Icon libraries initialized after mount
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    pub lucide: bool,
    pub lucide_src: String,
    pub iconify: bool,
    pub iconify_src: String,
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            lucide: true,
            lucide_src: "https://unpkg.com/lucide@latest/dist/umd/lucide.min.js".to_string(),
            iconify: true,
            iconify_src: "https://code.iconify.design/3/3.1.1/iconify.min.js".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse a config document.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a config file, failing on a missing or invalid file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Overrides for one section (empty when not configured).
    pub fn section_overrides(&self, name: &str) -> Props {
        self.sections.get(name).cloned().unwrap_or_default()
    }
}
