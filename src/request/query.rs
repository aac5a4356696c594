//! Ordered query-parameter mapping.
//!
//! # Responsibilities
//! - Hold decoded key/value pairs in parse order
//! - Resolve duplicate keys to the last value on lookup
//!
//! # Design Decisions
//! - Backed by a Vec, not a map: parse order is part of the contract
//!   and typical parameter counts make linear lookup cheap
//! - Decoding itself lives in the backends; this type only stores the
//!   already-decoded pairs

/// Decoded query parameters in parse order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Value for `key`; the last occurrence wins when duplicated.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate pairs in parse order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All pairs in parse order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a, const N: usize> PartialEq<[(&'a str, &'a str); N]> for QueryParams {
    fn eq(&self, other: &[(&'a str, &'a str); N]) -> bool {
        self.pairs.len() == N
            && self
                .pairs
                .iter()
                .zip(other.iter())
                .all(|((k, v), (ek, ev))| k == ek && v == ev)
    }
}
