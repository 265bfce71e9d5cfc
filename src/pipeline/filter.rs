/// Trailing marker that turns an inclusion entry into a prefix match.
pub const WILDCARD: char = '*';

#[derive(Debug, Clone, PartialEq, Eq)]
enum OriginPattern {
    Exact(String),
    Prefix(String),
}

impl OriginPattern {
    fn parse(entry: &str) -> Self {
        match entry.strip_suffix(WILDCARD) {
            Some(prefix) => OriginPattern::Prefix(prefix.to_string()),
            None => OriginPattern::Exact(entry.to_string()),
        }
    }

    fn matches(&self, origin: &str) -> bool {
        match self {
            OriginPattern::Exact(name) => origin == name,
            OriginPattern::Prefix(prefix) => origin.starts_with(prefix.as_str()),
        }
    }
}

/// Origin eligibility against the configured inclusion list.
/// An empty list means every well-formed origin is allowed.
#[derive(Debug, Clone, Default)]
pub struct PackageFilter {
    patterns: Vec<OriginPattern>,
}

impl PackageFilter {
    pub fn new(inclusion_list: Option<&[String]>) -> Self {
        let patterns = inclusion_list
            .unwrap_or_default()
            .iter()
            .map(|entry| OriginPattern::parse(entry))
            .collect();
        Self { patterns }
    }

    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        if is_malformed(origin) {
            return false;
        }
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(origin))
    }
}

/// Pure contract form, for callers that hold the raw list.
pub fn is_allowed(origin: &str, inclusion_list: Option<&[String]>) -> bool {
    PackageFilter::new(inclusion_list).is_allowed(origin)
}

fn is_malformed(origin: &str) -> bool {
    origin.is_empty() || origin.chars().any(|c| c.is_whitespace() || c.is_control())
}
