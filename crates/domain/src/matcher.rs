//! Pure hostname-against-site-config matching.
//!
//! Hostnames are expected pre-lowercased (URL parsers lowercase registrable
//! hosts); domain keys are normalized by construction.

use crate::settings::SiteConfig;

/// True when `hostname` is `domain` itself or any subdomain of it, after
/// stripping one leading `www.` from the hostname.
///
/// `matches("www.example.com", "example.com")` and
/// `matches("sub.example.com", "example.com")` hold;
/// `matches("notexample.com", "example.com")` does not.
pub fn matches(hostname: &str, domain: &str) -> bool {
    let host = hostname.strip_prefix("www.").unwrap_or(hostname);
    match host.strip_suffix(domain) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}

/// True iff some enabled entry in `sites` matches `hostname`.
/// Always false for an empty config.
pub fn is_enabled(hostname: &str, sites: &SiteConfig) -> bool {
    sites
        .iter()
        .any(|(domain, entry)| entry.enabled && matches(hostname, domain.as_str()))
}
