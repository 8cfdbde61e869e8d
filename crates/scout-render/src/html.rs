//! HTML fragment construction for server cards.
//!
//! Every catalog-supplied string passes through [`escape_html`] before it is
//! interpolated, whether it lands in element text or in an attribute value.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use scout_core::{CategoryInfo, Entry, ServerType};

/// Icon used when a category key has no metadata in the catalog.
const FALLBACK_CATEGORY_ICON: &str = "fas fa-folder";

/// Escape a string for safe insertion into HTML text or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render one display card for `entry`.
///
/// The card carries the escaped name and description, a category badge
/// (icon + display name, falling back to the raw key), a type badge, and
/// the entry's outbound links.
#[must_use]
pub fn server_card(entry: &Entry, categories: &BTreeMap<String, CategoryInfo>) -> String {
    let fallback;
    let category_info = match categories.get(&entry.category) {
        Some(info) => info,
        None => {
            fallback = CategoryInfo {
                name: entry.category.clone(),
                icon: FALLBACK_CATEGORY_ICON.to_string(),
            };
            &fallback
        }
    };
    let type_class = match entry.server_type {
        ServerType::Local => "badge-type-local",
        ServerType::Remote => "badge-type-remote",
    };

    format!(
        r#"<div class="server-card" data-category="{category}" data-type="{server_type}">
  <div class="server-header">
    <h3 class="server-title">{name}</h3>
    <div class="server-badges">
      <span class="badge badge-category"><i class="{category_icon}"></i> {category_name}</span>
      <span class="badge {type_class}">{server_type}</span>
    </div>
  </div>
  <p class="server-description">{description}</p>
  <div class="server-links">{links}</div>
</div>"#,
        category = escape_html(&entry.category),
        server_type = entry.server_type,
        name = escape_html(&entry.name),
        category_icon = escape_html(&category_info.icon),
        category_name = escape_html(&category_info.name),
        description = escape_html(&entry.description),
        links = server_links(entry),
    )
}

/// Render the outbound link list for an entry.
fn server_links(entry: &Entry) -> String {
    let mut out = String::new();

    if let Some(repository) = &entry.repository {
        // GitHub repositories get the brand icon.
        let icon = if repository.contains("github.com") {
            "fab fa-github"
        } else {
            "fas fa-external-link-alt"
        };
        push_link(&mut out, repository, icon, "Repository");
    }

    if let Some(links) = &entry.links {
        if let Some(documentation) = &links.documentation {
            push_link(&mut out, documentation, "fas fa-book", "Documentation");
        }
        if let Some(readme) = &links.readme {
            push_link(&mut out, readme, "fas fa-file-alt", "README");
        }
        if let Some(releases) = &links.releases {
            push_link(&mut out, releases, "fas fa-tags", "Releases");
        }
    }

    if let Some(endpoint) = &entry.endpoint {
        push_link(&mut out, endpoint, "fas fa-satellite-dish", "Endpoint");
    }

    out
}

fn push_link(out: &mut String, href: &str, icon: &str, label: &str) {
    let _ = write!(
        out,
        r#"<a href="{href}" target="_blank" class="server-link"><i class="{icon}"></i> {label}</a>"#,
        href = escape_html(href),
    );
}

/// Render the static error panel shown when the catalog fails to load.
#[must_use]
pub fn error_panel(message: &str) -> String {
    format!(
        r#"<div class="error-message"><i class="fas fa-exclamation-triangle"></i><p>{}</p></div>"#,
        escape_html(message)
    )
}
