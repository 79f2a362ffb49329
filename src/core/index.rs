// src/core/index.rs
//
// Word → occurrence count mapping, as produced by the indexing service.
// The client never edits one; a new response replaces the old index whole.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::ClientError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordIndex {
    counts: HashMap<String, u64>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a response body. Must be a JSON object whose values are all
    /// non-negative integers; anything else is rejected, never stored.
    pub fn from_json(body: &str) -> Result<Self, ClientError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ClientError::Malformed(format!("not JSON ({e})")))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ClientError::Malformed(format!(
                    "expected an object of word counts, got {}",
                    json_kind(&other)
                )));
            }
        };

        let mut counts = HashMap::with_capacity(map.len());
        for (word, v) in map {
            let Some(n) = v.as_u64() else {
                return Err(ClientError::Malformed(format!(
                    "count for '{word}' is not a non-negative integer: {v}"
                )));
            };
            counts.insert(word, n);
        }
        Ok(Self { counts })
    }

    /// Exact, case-sensitive. Unknown words count 0.
    #[inline]
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent words, highest first; ties alphabetical.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut words: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(w, c)| (w.as_str(), *c))
            .collect();
        words.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(n);
        words
    }
}

impl FromIterator<(String, u64)> for WordIndex {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self { counts: iter.into_iter().collect() }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
