// src/portal/patterns.rs
//! Precompiled patterns for scraping the portal's HTML.
//!
//! Compiled once on first use and shared read-only for the rest of the
//! process, including across batch worker threads.

use once_cell::sync::Lazy;
use regex::Regex;

/// The patterns that pull lease facts out of portal pages.
pub struct PortalPatterns {
    /// `leaseno=<digits>` in a wellbore search result link.
    pub lease_number: Regex,
    /// `district=<digits>` in a wellbore search result link.
    pub district: Regex,
    /// The lease detail link target in a wellbore search result.
    pub detail_link: Regex,
    /// The value cell following the "Well Type:" label on a lease detail page.
    pub well_type: Regex,
}

impl PortalPatterns {
    fn compile() -> Self {
        Self {
            lease_number: compile(r"(?i)leaseno=(\d+)"),
            district: compile(r"(?i)district=(\d+)"),
            detail_link: compile(r#"(?i)leaseDetailAction\.do[^"]+"#),
            well_type: compile(r"(?i)Well Type:\s+<[^>]+>\s+(\w+)"),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Failed to compile portal pattern - this is a bug in the code")
}

pub static PATTERNS: Lazy<PortalPatterns> = Lazy::new(PortalPatterns::compile);

/// Returns the first capture group of `pattern` in `text`.
pub fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}
