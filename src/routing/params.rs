//! Named path parameters captured by a pattern.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::outcome::{ResolveError, ResolveResult};

/// Parameter name → raw segment value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Parse a parameter as a numeric identifier.
    pub fn id(&self, name: &str) -> ResolveResult<u64> {
        let raw = self
            .get(name)
            .ok_or_else(|| ResolveError::MissingParameter(name.to_string()))?;
        raw.parse().map_err(|_| ResolveError::InvalidParameter {
            name: name.to_string(),
            value: raw.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let params = RouteParams::new().with("issueId", 42).with("fileId", "abc");
        assert_eq!(params.id("issueId").unwrap(), 42);

        match params.id("fileId") {
            Err(ResolveError::InvalidParameter { name, value }) => {
                assert_eq!(name, "fileId");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(matches!(
            params.id("commentId"),
            Err(ResolveError::MissingParameter(_))
        ));
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let params: RouteParams = [("issueId", "7"), ("itemId", "9")].into_iter().collect();
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({ "issueId": "7", "itemId": "9" }));
    }
}
