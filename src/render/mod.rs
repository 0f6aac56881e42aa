//! Server-side HTML rendering.
//!
//! Components and pages are plain functions returning `String`. All text
//! that comes from the content store passes through [`escape_html`].

pub mod components;
pub mod pages;

pub use pages::{render_category, render_home, render_not_found, render_product, render_products};

use crate::config::SITE_NAME;
use crate::pages::PageMeta;

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap page content in the document shell with the site header and footer.
pub fn layout(meta: &PageMeta, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <meta name="description" content="{description}">
</head>
<body>
{header}
<main>
{body}
</main>
{footer}
</body>
</html>"#,
        title = escape_html(&meta.title),
        description = escape_html(&meta.description),
        header = site_header(),
        body = body,
        footer = site_footer(),
    )
}

fn site_header() -> String {
    format!(
        r#"<header class="site-header">
    <a href="/" class="logo"><span class="logo-icon">🛒</span> <span class="logo-text">{site}</span></a>
    <nav class="site-nav">
        <a href="/">Home</a>
        <a href="/products">Products</a>
    </nav>
    <details class="mobile-menu">
        <summary aria-label="Toggle menu">Menu</summary>
        <nav>
            <a href="/">Home</a>
            <a href="/products">Products</a>
        </nav>
    </details>
</header>"#,
        site = SITE_NAME
    )
}

fn site_footer() -> String {
    format!(
        r#"<footer class="site-footer">
    <p>&copy; {site}. Content powered by Cosmic.</p>
</footer>"#,
        site = SITE_NAME
    )
}

/// Render a product description: escaped text where `## ` lines become
/// headings, `**text**` becomes bold, leading `- ` becomes a bullet, and
/// remaining line breaks become `<br />`.
pub fn format_description(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut out = String::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = escape_html(raw);
        if let Some(heading) = line.strip_prefix("## ") {
            out.push_str(&format!("<h3>{}</h3>\n", bold(heading)));
            continue;
        }
        let line = match line.strip_prefix("- ") {
            Some(rest) => format!("• {}", rest),
            None => line,
        };
        out.push_str(&bold(&line));
        if i + 1 < lines.len() {
            out.push_str("<br />");
        }
        out.push('\n');
    }

    out
}

fn bold(line: &str) -> String {
    let parts: Vec<&str> = line.split("**").collect();
    let mut out = String::with_capacity(line.len());
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 0 {
            out.push_str(part);
        } else if i + 1 < parts.len() && !part.is_empty() {
            out.push_str("<strong>");
            out.push_str(part);
            out.push_str("</strong>");
        } else {
            // Unmatched or empty marker is kept as typed.
            out.push_str("**");
            out.push_str(part);
            if i + 1 < parts.len() {
                out.push_str("**");
            }
        }
    }
    out
}
