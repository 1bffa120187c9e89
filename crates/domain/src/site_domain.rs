use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A normalized site key: lowercase registrable hostname with no scheme,
/// no leading `www.` and no path.
///
/// Construction goes through [`SiteDomain::parse`], so every value of this
/// type upholds the normalization invariant. Keys read back from a persisted
/// document are re-validated on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteDomain(String);

impl SiteDomain {
    /// Normalize raw user input, then validate the result.
    ///
    /// Normalization: trim, lowercase, strip an `http://`/`https://` scheme,
    /// strip one leading `www.`, truncate at the first `/`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = Self::normalize(raw);
        if !Self::is_valid(&normalized) {
            return Err(DomainError::InvalidDomainName(raw.trim().to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn normalize(raw: &str) -> String {
        let mut s = raw.trim().to_ascii_lowercase();
        for scheme in ["https://", "http://"] {
            if let Some(rest) = s.strip_prefix(scheme) {
                s = rest.to_string();
                break;
            }
        }
        if let Some(rest) = s.strip_prefix("www.") {
            s = rest.to_string();
        }
        if let Some(idx) = s.find('/') {
            s.truncate(idx);
        }
        s
    }

    /// Labels of `[a-z0-9]` joined by single `.` or `-` separators, at least
    /// one dot, and an alphabetic final label of two or more characters.
    fn is_valid(domain: &str) -> bool {
        let mut prev_sep = true;
        for c in domain.chars() {
            match c {
                'a'..='z' | '0'..='9' => prev_sep = false,
                '.' | '-' => {
                    if prev_sep {
                        return false;
                    }
                    prev_sep = true;
                }
                _ => return false,
            }
        }
        // Also rejects the empty string and a trailing separator.
        if prev_sep {
            return false;
        }
        match domain.rsplit_once('.') {
            Some((_, tld)) => tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
            None => false,
        }
    }
}

impl fmt::Display for SiteDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SiteDomain {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SiteDomain {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SiteDomain> for String {
    fn from(domain: SiteDomain) -> Self {
        domain.0
    }
}
