use anyhow::{bail, Result};

/// One (port, label, stylesheet) configuration unit driving a single listener.
///
/// Immutable once constructed; each listener captures its own descriptor at
/// startup and never mutates it.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
    pub port: u16,
    pub label: String,
    /// Stylesheet path relative to the site root. `None` means the base
    /// document is served unmodified.
    pub stylesheet: Option<String>,
}

impl ThemeDescriptor {
    pub fn new(port: u16, label: &str, stylesheet: Option<&str>) -> Self {
        Self {
            port,
            label: label.into(),
            stylesheet: stylesheet.map(Into::into),
        }
    }
}

/// The fixed demo configuration: one listener per theme, in startup order.
pub fn demo_themes() -> Vec<ThemeDescriptor> {
    vec![
        ThemeDescriptor::new(8000, "Original Retro", None),
        ThemeDescriptor::new(
            8001,
            "Checkerboard Classic",
            Some("altstyles/checkerboard-classic.css"),
        ),
        ThemeDescriptor::new(8002, "Drive-In 50s", Some("altstyles/drive-in-50s.css")),
    ]
}

/// Reject malformed theme lists before any listener starts.
///
/// Duplicate ports would make two listeners race for the same bind; an empty
/// list would start nothing and then block forever.
pub fn validate(themes: &[ThemeDescriptor]) -> Result<()> {
    if themes.is_empty() {
        bail!("No themes configured");
    }
    let mut seen = std::collections::HashSet::new();
    for theme in themes {
        if !seen.insert(theme.port) {
            bail!(
                "Port {} is configured for more than one theme ('{}')",
                theme.port,
                theme.label
            );
        }
        if theme.label.is_empty() {
            bail!("Theme on port {} has an empty label", theme.port);
        }
    }
    Ok(())
}
