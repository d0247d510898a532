//! Server-rendered HTML screens
//!
//! Each screen parses its query string into a `Selection` (lenient: bad
//! values fall back to defaults) and renders links built from
//! `Selection::with`, so every control is a plain navigation.

pub mod activity;
pub mod dashboard;
pub mod gateway;

use explore_common::catalog::Tier;
use explore_common::Language;

/// Escape text for HTML element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Pick the English or Spanish UI string
pub fn tr(language: Language, en: &'static str, es: &'static str) -> &'static str {
    match language {
        Language::En => en,
        Language::Es => es,
    }
}

/// Tier colours as CSS custom properties for the `style` attribute
pub fn tier_style(tier: &Tier) -> String {
    format!(
        "--tier-primary: {}; --tier-accent: {};",
        escape(&tier.theme.primary),
        escape(&tier.theme.accent)
    )
}

/// Wrap a screen body in the shared document shell
pub fn layout(title: &str, language: Language, body_class: &str, body_style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/explore.css">
</head>
<body class="{body_class}" style="{body_style}">
{body}
</body>
</html>
"#,
        lang = language.code(),
        title = escape(title),
        body_class = body_class,
        body_style = body_style,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Riley's <b>Art</b> & \"Stand\""), "Riley&#39;s &lt;b&gt;Art&lt;/b&gt; &amp; &quot;Stand&quot;");
        assert_eq!(escape("El Jardín Secreto"), "El Jardín Secreto");
    }

    #[test]
    fn test_layout_sets_language() {
        let html = layout("Project Explore", Language::Es, "dashboard", "", "<main></main>");
        assert!(html.contains(r#"<html lang="es">"#));
        assert!(html.contains("<title>Project Explore</title>"));
        assert!(html.contains("/static/explore.css"));
    }
}
