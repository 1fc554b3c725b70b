pub mod rewrite;
mod server;

use vitrine_context::site::SiteRoot;
use vitrine_context::theme::ThemeDescriptor;

/// Start one listener per theme and block until the interrupt signal.
pub async fn start(themes: Vec<ThemeDescriptor>, site: SiteRoot) -> anyhow::Result<()> {
    server::run_all(themes, site).await
}
