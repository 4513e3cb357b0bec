//! Page-Link Window Generator
//!
//! Computes a bounded window of numbered page links around the current
//! page, with First/Previous and Next/Last descriptors at the edges. Once
//! the page total exceeds the window size the window keeps a constant
//! width and slides, rather than shrinking near the last page.

use serde::Serialize;

use crate::links::QueryParams;

// == Link Config ==
/// Recognized options for link generation, all with defaults matching the
/// stock rendering.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Total number of numbered links shown around the current page
    pub window_size: u64,
    /// Prefix for generated DOM ids
    pub id_prefix: String,
    /// CSS class for the First link
    pub first_class: String,
    /// Label text for the First link
    pub first_label: String,
    /// CSS class for the Previous link
    pub previous_class: String,
    /// Label text for the Previous link
    pub previous_label: String,
    /// CSS class for the Next link
    pub next_class: String,
    /// Label text for the Next link
    pub next_label: String,
    /// CSS class for the Last link
    pub last_class: String,
    /// Label text for the Last link
    pub last_label: String,
    /// Name of the page query parameter
    pub page_param: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            id_prefix: "paginator_page".to_string(),
            first_class: "first".to_string(),
            first_label: "First".to_string(),
            previous_class: "previous".to_string(),
            previous_label: "Previous".to_string(),
            next_class: "next".to_string(),
            next_label: "Next".to_string(),
            last_class: "last".to_string(),
            last_label: "Last".to_string(),
            page_param: "page".to_string(),
        }
    }
}

// == Page Link ==
/// One renderable link descriptor. Produced fresh per render, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Visible label: the page number, or the configured First/Prev/Next/Last text
    pub label: String,
    /// Target page number
    pub number: u64,
    /// CSS class tag; `"active"` on the current page, empty on other numbered links
    pub css_class: String,
    /// DOM id, derived from the configured prefix
    pub id: String,
    /// Encoded query string with the page parameter overwritten
    pub href: String,
}

// == Window Generator ==
/// Builds the ordered link list for `current_page` of `num_pages` total.
///
/// `query` supplies the other query-string parameters each link must
/// carry; a working copy is mutated per link and re-encoded, the caller's
/// value is untouched.
pub fn page_links(
    current_page: u64,
    num_pages: u64,
    query: &QueryParams,
    cfg: &LinkConfig,
) -> Vec<PageLink> {
    if num_pages == 0 {
        return Vec::new();
    }

    // Signed arithmetic: the re-clamp below can dip past zero before the
    // max(1) floor catches it
    let window = cfg.window_size as i64;
    let current = current_page as i64;
    let last = num_pages as i64;

    let half = window / 2;
    let mut domain_min = (current - half + 1).max(1);
    let domain_max = (domain_min + window).min(last + 1);
    // Slide the window near the end instead of letting it shrink
    domain_min = domain_min.min(last - window + 1).max(1);

    let mut query = query.clone();
    let mut links = Vec::new();

    if current > 1 {
        query.set(&cfg.page_param, 1);
        links.push(PageLink {
            label: cfg.first_label.clone(),
            number: 1,
            css_class: cfg.first_class.clone(),
            id: format!("{}_first", cfg.id_prefix),
            href: query.encode(),
        });

        query.set(&cfg.page_param, current - 1);
        links.push(PageLink {
            label: cfg.previous_label.clone(),
            number: (current - 1) as u64,
            css_class: cfg.previous_class.clone(),
            id: format!("{}_prev", cfg.id_prefix),
            href: query.encode(),
        });
    }

    for number in domain_min..domain_max {
        query.set(&cfg.page_param, number);
        links.push(PageLink {
            label: number.to_string(),
            number: number as u64,
            css_class: if number == current {
                "active".to_string()
            } else {
                String::new()
            },
            id: format!("{}_{}", cfg.id_prefix, number),
            href: query.encode(),
        });
    }

    if domain_max < last + 1 {
        query.set(&cfg.page_param, current + 1);
        links.push(PageLink {
            label: cfg.next_label.clone(),
            number: (current + 1) as u64,
            css_class: cfg.next_class.clone(),
            id: format!("{}_next", cfg.id_prefix),
            href: query.encode(),
        });

        query.set(&cfg.page_param, last);
        links.push(PageLink {
            label: cfg.last_label.clone(),
            number: num_pages,
            css_class: cfg.last_class.clone(),
            id: format!("{}_last", cfg.id_prefix),
            href: query.encode(),
        });
    }

    links
}
