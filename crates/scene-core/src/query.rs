//! URL query string handling.

use std::fmt;
use url::form_urlencoded;

/// One-shot flag set by the message composer after a message is sent.
pub const SENT_BUBBLE_FLAG: &str = "sentBubble";

/// Ordered query parameters of the current page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces every value of `key` with a single `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, value.into()));
    }

    /// Removes every value of `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        before != self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether the one-shot "message just sent" flag is present.
    ///
    /// Only the literal value `true` counts.
    pub fn has_sent_bubble_flag(&self) -> bool {
        self.get(SENT_BUBBLE_FLAG) == Some("true")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        f.write_str(&encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_get() {
        let query = QueryParams::parse("?sentBubble=true&ref=share");
        assert_eq!(query.get("ref"), Some("share"));
        assert!(query.has_sent_bubble_flag());
    }

    #[test]
    fn test_flag_requires_true_value() {
        assert!(!QueryParams::parse("sentBubble=false").has_sent_bubble_flag());
        assert!(!QueryParams::parse("sentBubble").has_sent_bubble_flag());
        assert!(!QueryParams::parse("").has_sent_bubble_flag());
    }

    #[test]
    fn test_remove_keeps_other_params() {
        let mut query = QueryParams::parse("a=1&sentBubble=true&b=2");
        assert!(query.remove(SENT_BUBBLE_FLAG));
        assert_eq!(query.to_string(), "a=1&b=2");
        assert!(!query.remove(SENT_BUBBLE_FLAG));
    }

    #[test]
    fn test_set_encodes_values() {
        let mut query = QueryParams::new();
        query.set("id", "a b/c");
        assert_eq!(query.to_string(), "id=a+b%2Fc");
    }
}
