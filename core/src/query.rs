//! Flat key/value query map and the encoding rules shared by every endpoint.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::{ApiError, ValidationError};

/// Query parameters for one request.
///
/// Keys are kept sorted so the encoded query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: BTreeMap<String, String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    pub fn parse(encoded: &str) -> Self {
        let pairs = url::form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.pairs.insert(key.to_string(), value.into());
        self
    }

    /// Set an integer as its decimal string.
    pub fn set_int<I: itoa::Integer>(&mut self, key: &str, value: I) -> &mut Self {
        let mut buf = itoa::Buffer::new();
        self.set(key, buf.format(value))
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.set(key, if value { "true" } else { "false" })
    }

    /// Set an integer only when it is present.
    pub fn set_opt_int<I: itoa::Integer>(&mut self, key: &str, value: Option<I>) -> &mut Self {
        if let Some(value) = value {
            self.set_int(key, value);
        }
        self
    }

    /// Set a value by its `Display` form only when it is present.
    pub fn set_opt<T: fmt::Display>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value.to_string());
        }
        self
    }

    /// Join `values` with commas under a single key. Nothing is set for an
    /// empty slice.
    pub fn set_list<T: fmt::Display>(&mut self, key: &str, values: &[T]) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.set(key, joined)
    }

    /// Serialize `value` as a JSON string under a single key.
    pub fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<&mut Self, ApiError> {
        let json = serde_json::to_string(value).map_err(ApiError::Serialization)?;
        Ok(self.set(key, json))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Reject a list longer than `max` entries.
pub fn check_len(key: &'static str, len: usize, max: usize) -> Result<(), ValidationError> {
    if len > max {
        return Err(ValidationError::TooMany { key, len, max });
    }
    Ok(())
}

/// Reject an empty list for a parameter the service requires.
pub fn check_non_empty(key: &'static str, len: usize) -> Result<(), ValidationError> {
    if len == 0 {
        return Err(ValidationError::Empty { key });
    }
    Ok(())
}
