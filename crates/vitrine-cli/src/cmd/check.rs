use anyhow::{bail, Result};
use console::style;
use std::path::PathBuf;
use vitrine_context::site::SiteRoot;
use vitrine_context::theme::demo_themes;
use vitrine_serve::rewrite::DEFAULT_STYLESHEET_LINK;

/// Preflight the website directory so problems show up before a client demo,
/// not during one.
pub fn run(root: Option<PathBuf>) -> Result<()> {
    let site = match root {
        Some(dir) => SiteRoot::load(&dir)?,
        None => SiteRoot::load_cwd()?,
    };
    let html = site.read_index()?;

    println!("Checking {}", site.root.display());
    println!();

    if html.contains(DEFAULT_STYLESHEET_LINK) {
        println!(
            "  {}    index.html references the default stylesheet",
            style("ok").green().bold()
        );
    } else {
        // The rewrite is a documented no-op without the default link, so the
        // themed ports would all serve the same page.
        println!(
            "  {}  index.html does not contain `{}` - themed ports will serve the unmodified page",
            style("warn").yellow().bold(),
            DEFAULT_STYLESHEET_LINK
        );
    }

    let mut missing = 0;
    for theme in demo_themes() {
        let Some(css) = &theme.stylesheet else {
            println!(
                "  {}    {} (port {}) uses the default stylesheet",
                style("ok").green().bold(),
                theme.label,
                theme.port
            );
            continue;
        };
        if site.asset_path(css).is_file() {
            println!(
                "  {}    {} (port {}) -> {css}",
                style("ok").green().bold(),
                theme.label,
                theme.port
            );
        } else {
            println!(
                "  {}  {} (port {}): missing stylesheet {css}",
                style("fail").red().bold(),
                theme.label,
                theme.port
            );
            missing += 1;
        }
    }

    if missing > 0 {
        bail!("{missing} theme(s) point at missing stylesheets");
    }

    println!();
    println!(
        "  {} Site is ready to demo.",
        style("Done.").green().bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_dir(with_themes: bool) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("index.html"),
            format!("<html><head>{DEFAULT_STYLESHEET_LINK}</head></html>"),
        )
        .unwrap();
        if with_themes {
            fs::create_dir(dir.path().join("altstyles")).unwrap();
            fs::write(dir.path().join("altstyles/checkerboard-classic.css"), "").unwrap();
            fs::write(dir.path().join("altstyles/drive-in-50s.css"), "").unwrap();
        }
        dir
    }

    #[test]
    fn test_check_accepts_complete_site() {
        let dir = site_dir(true);
        run(Some(dir.path().to_path_buf())).expect("complete site should pass");
    }

    #[test]
    fn test_check_fails_on_missing_stylesheets() {
        let dir = site_dir(false);
        let err = run(Some(dir.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("missing"), "{err}");
    }

    #[test]
    fn test_check_fails_without_index() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(Some(dir.path().to_path_buf())).is_err());
    }
}
