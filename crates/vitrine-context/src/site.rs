use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The document root shared read-only by every listener.
///
/// Threaded explicitly through the server instead of relying on the
/// process-wide current directory.
#[derive(Debug, Clone)]
pub struct SiteRoot {
    pub root: PathBuf,
}

impl SiteRoot {
    /// Load the site root from the given directory.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            bail!("'{}' is not a directory", dir.display());
        }
        let root = dir
            .canonicalize()
            .with_context(|| format!("Failed to resolve '{}'", dir.display()))?;
        if !root.join("index.html").is_file() {
            bail!(
                "No index.html found in '{}'. Point vitrine at the website directory.",
                root.display()
            );
        }
        Ok(Self { root })
    }

    /// Load the site root from the current working directory.
    pub fn load_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join("index.html")
    }

    /// Read the base document. The file can disappear between startup and a
    /// request, so this stays fallible.
    pub fn read_index(&self) -> Result<String> {
        fs::read_to_string(self.index_path())
            .with_context(|| format!("Failed to read {}", self.index_path().display()))
    }

    /// Resolve a root-relative asset path (e.g. a themed stylesheet).
    pub fn asset_path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_dir(index: Option<&str>) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        if let Some(content) = index {
            fs::write(dir.path().join("index.html"), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_site() {
        let dir = site_dir(Some("<html></html>"));
        let site = SiteRoot::load(dir.path()).unwrap();
        assert_eq!(site.read_index().unwrap(), "<html></html>");
    }

    #[test]
    fn test_load_rejects_missing_index() {
        let dir = site_dir(None);
        let err = SiteRoot::load(dir.path()).unwrap_err();
        assert!(
            err.to_string().contains("index.html"),
            "error should mention index.html: {err}"
        );
    }

    #[test]
    fn test_load_rejects_missing_directory() {
        let dir = site_dir(None);
        let missing = dir.path().join("nope");
        assert!(SiteRoot::load(&missing).is_err());
    }

    #[test]
    fn test_asset_path_joins_relative() {
        let dir = site_dir(Some(""));
        let site = SiteRoot::load(dir.path()).unwrap();
        let css = site.asset_path("altstyles/checkerboard-classic.css");
        assert!(css.ends_with("altstyles/checkerboard-classic.css"));
        assert!(css.starts_with(&site.root));
    }
}
