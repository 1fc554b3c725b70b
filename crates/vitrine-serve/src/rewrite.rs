/// The stylesheet link present in the unmodified base document, subject to
/// substitution.
pub const DEFAULT_STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="styles.css">"#;

/// Swap the default stylesheet link for a themed one.
///
/// Replaces the first occurrence only. The base document is expected to carry
/// the default link exactly once and verbatim; if it is absent this is
/// silently a no-op, which `vitrine check` warns about up front.
pub fn apply_theme(html: &str, stylesheet: &str) -> String {
    let themed = format!(r#"<link rel="stylesheet" href="{stylesheet}">"#);
    html.replacen(DEFAULT_STYLESHEET_LINK, &themed, 1)
}
