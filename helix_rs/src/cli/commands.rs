use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use super::{Cli, Command};
use crate::config::{CONFIG_FILE, LandingConfig};
use crate::prerender::prerender;
use crate::sections::{SECTIONS, section};

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build { config, out } => build(config.as_deref(), out.as_deref()).await,
        Command::Sections { config } => list_sections(config.as_deref()),
        Command::Check { config } => check(config.as_deref()),
    }
}

/// An explicit path must load; the implicit `helix.toml` is optional.
fn load_config(path: Option<&Path>) -> Result<LandingConfig> {
    match path {
        Some(path) => Ok(LandingConfig::read(path)?),
        None => Ok(LandingConfig::load_from_path(Path::new(CONFIG_FILE))),
    }
}

async fn build(config: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let page = prerender(&config).await.context("pre-rendering failed")?;

    if !page.report.is_clean() {
        warn!(failed = ?page.report.failed, "some sections were left empty");
    }

    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &page.html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                path = %path.display(),
                bytes = page.html.len(),
                scroll_distance = page.scroll_distance,
                "page written"
            );
        }
        None => println!("{}", page.html),
    }
    Ok(())
}

fn list_sections(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;

    for (index, spec) in SECTIONS.iter().enumerate() {
        let overrides = config.section_overrides(spec.name).len();
        if overrides > 0 {
            println!(
                "{:>2}. {:<14} #{}  ({overrides} override(s))",
                index + 1,
                spec.name,
                spec.container
            );
        } else {
            println!("{:>2}. {:<14} #{}", index + 1, spec.name, spec.container);
        }
    }
    println!(
        "    carousel       #{}  ({} logos)",
        config.carousel.container,
        config.carousel.logos.len()
    );
    Ok(())
}

fn check(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let mut failures = 0usize;

    for spec in &SECTIONS {
        let component = spec.build(config.section_overrides(spec.name));
        match component.render() {
            Ok(html) => println!("ok    {:<14} {} bytes", spec.name, html.len()),
            Err(e) => {
                failures += 1;
                println!("FAIL  {:<14} {e}", spec.name);
            }
        }
    }

    for name in config.sections.keys() {
        if section(name).is_none() {
            failures += 1;
            println!("FAIL  {name:<14} unknown section");
        }
    }

    if config.carousel.logos.is_empty() {
        println!("note  carousel has no logos and will not animate");
    }

    if failures > 0 {
        bail!("{failures} problem(s) found");
    }
    println!("all {} sections render", SECTIONS.len());
    Ok(())
}
