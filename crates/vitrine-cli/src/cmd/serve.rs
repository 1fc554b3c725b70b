use anyhow::Result;
use std::path::PathBuf;
use vitrine_context::site::SiteRoot;
use vitrine_context::theme::{demo_themes, validate};

pub async fn run(root: Option<PathBuf>) -> Result<()> {
    let site = match root {
        Some(dir) => SiteRoot::load(&dir)?,
        None => SiteRoot::load_cwd()?,
    };
    let themes = demo_themes();
    validate(&themes)?;

    eprintln!("  Vitrine demo server");
    eprintln!("  Serving {}", site.root.display());
    eprintln!();

    vitrine_serve::start(themes, site).await?;

    eprintln!();
    eprintln!("  Demo stopped.");
    Ok(())
}
