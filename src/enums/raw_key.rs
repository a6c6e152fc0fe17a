use std::fmt;
use serde::{Deserialize, Serialize};

/// Key of one raw aggregate entry: a numeric category code or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawKey {
    Code(i64),
    Text(String),
}

impl RawKey {
    /// Numeric view of the key. Map-shaped payloads only carry string keys,
    /// so `"3"` reads as code 3.
    pub fn as_code(&self) -> Option<i64> {
        match self {
            Self::Code(code) => Some(*code),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Key equivalence used for exclusion: codes compare numerically,
    /// everything else by exact text.
    pub fn same_key(&self, other: &RawKey) -> bool {
        match (self.as_code(), other.as_code()) {
            (Some(a), Some(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{}", code),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<i64> for RawKey {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for RawKey {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_matches_code() {
        assert!(RawKey::Code(0).same_key(&RawKey::from("0")));
        assert!(!RawKey::Code(0).same_key(&RawKey::from("zero")));
        assert!(RawKey::from("SQL").same_key(&RawKey::from("SQL")));
    }
}
