//! Enumerated query values and their wire strings.
//!
//! # Design
//! `OutputFormat` parses strictly: the format picks the decoder, so an
//! unknown name is an error rather than a silent fallback. `Language` and
//! `Relationship` only shape the server's answer and fall back to the
//! documented default (`english`, `all`) for values they do not recognise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ApiError;

/// Serialization requested from the server, and used to parse its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
    /// Valve's KeyValues format. Accepted by the server, not decoded here.
    Vdf,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
            OutputFormat::Vdf => "vdf",
        }
    }

    /// Whether responses in this format can be decoded.
    pub fn is_supported(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Xml)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            "vdf" => Ok(OutputFormat::Vdf),
            other => Err(ApiError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for OutputFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Language for localized strings (`l` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Brazilian,
    Polish,
    Russian,
    Ukrainian,
    Turkish,
    Japanese,
    Koreana,
    SimplifiedChinese,
    TraditionalChinese,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Brazilian => "brazilian",
            Language::Polish => "polish",
            Language::Russian => "russian",
            Language::Ukrainian => "ukrainian",
            Language::Turkish => "turkish",
            Language::Japanese => "japanese",
            Language::Koreana => "koreana",
            Language::SimplifiedChinese => "schinese",
            Language::TraditionalChinese => "tchinese",
        }
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        match code {
            "german" => Language::German,
            "french" => Language::French,
            "spanish" => Language::Spanish,
            "italian" => Language::Italian,
            "portuguese" => Language::Portuguese,
            "brazilian" => Language::Brazilian,
            "polish" => Language::Polish,
            "russian" => Language::Russian,
            "ukrainian" => Language::Ukrainian,
            "turkish" => Language::Turkish,
            "japanese" => Language::Japanese,
            "koreana" => Language::Koreana,
            "schinese" => Language::SimplifiedChinese,
            "tchinese" => Language::TraditionalChinese,
            _ => Language::English,
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Language::from(code.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Friend list relationship filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Relationship {
    #[default]
    All,
    Friend,
}

impl Relationship {
    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::All => "all",
            Relationship::Friend => "friend",
        }
    }
}

impl From<&str> for Relationship {
    fn from(value: &str) -> Self {
        match value {
            "friend" => Relationship::Friend,
            _ => Relationship::All,
        }
    }
}

impl From<String> for Relationship {
    fn from(value: String) -> Self {
        Relationship::from(value.as_str())
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
