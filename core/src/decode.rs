//! Response decoding and envelope unwrapping.
//!
//! # Design
//! Format branching lives here and nowhere else. Most Steam payloads are
//! nested one level under a wrapper field in JSON (`{"response": {...}}`),
//! while the XML document's root element already is the payload. Each
//! endpoint declares both shapes in an [`EnvelopeShape`]; the two are never
//! inferred from one another.
//!
//! Lists differ between the formats as well: JSON uses arrays, XML a parent
//! element holding repeated children with an endpoint-specific name.
//! [`nested_list`] accepts both so one model type serves either format.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{ApiError, DecodeError};
use crate::format::OutputFormat;

/// Where the payload sits inside a response document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    /// The payload is the value of this field of the document root.
    Field(&'static str),
    /// The document root is the payload.
    Root,
}

/// Per-format wrapper description for one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeShape {
    pub json: Wrapper,
    pub xml: Wrapper,
}

impl EnvelopeShape {
    pub const fn new(json: Wrapper, xml: Wrapper) -> Self {
        Self { json, xml }
    }

    /// Wrapper for `format`, or `UnsupportedFormat` if the format has no
    /// decoding rule.
    pub fn wrapper(&self, format: OutputFormat) -> Result<Wrapper, ApiError> {
        match format {
            OutputFormat::Json => Ok(self.json),
            OutputFormat::Xml => Ok(self.xml),
            OutputFormat::Vdf => Err(ApiError::UnsupportedFormat(format.to_string())),
        }
    }
}

/// A payload together with the name of the field it was found under.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    field: &'static str,
    payload: T,
}

impl<T> Envelope<T> {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn into_inner(self) -> T {
        self.payload
    }
}

/// Deserializes `{field: T, ..}` into an `Envelope<T>`, skipping any other
/// fields of the wrapper.
struct EnvelopeSeed<T> {
    field: &'static str,
    marker: PhantomData<T>,
}

impl<T> EnvelopeSeed<T> {
    fn new(field: &'static str) -> Self {
        Self {
            field,
            marker: PhantomData,
        }
    }
}

impl<'de, T: Deserialize<'de>> DeserializeSeed<'de> for EnvelopeSeed<T> {
    type Value = Envelope<T>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for EnvelopeSeed<T> {
    type Value = Envelope<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a document wrapping its payload in `{}`", self.field)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut payload = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == self.field {
                if payload.is_some() {
                    return Err(de::Error::duplicate_field(self.field));
                }
                payload = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        let payload = payload.ok_or_else(|| de::Error::missing_field(self.field))?;
        Ok(Envelope {
            field: self.field,
            payload,
        })
    }
}

/// Decode `body` as `format` straight into `T`.
pub fn decode<T: DeserializeOwned>(format: OutputFormat, body: &str) -> Result<T, ApiError> {
    decode_seed(format, body, PhantomData::<T>)
}

/// Decode `body` as `format`, strip the wrapper `shape` declares for that
/// format, and return the payload.
pub fn decode_enveloped<T: DeserializeOwned>(
    format: OutputFormat,
    body: &str,
    shape: &EnvelopeShape,
) -> Result<T, ApiError> {
    let wrapper = shape.wrapper(format)?;
    tracing::trace!(%format, ?wrapper, len = body.len(), "decoding response body");
    match wrapper {
        Wrapper::Root => decode(format, body),
        Wrapper::Field(field) => {
            decode_seed(format, body, EnvelopeSeed::<T>::new(field)).map(Envelope::into_inner)
        }
    }
}

fn decode_seed<'de, S: DeserializeSeed<'de>>(
    format: OutputFormat,
    body: &'de str,
    seed: S,
) -> Result<S::Value, ApiError> {
    match format {
        OutputFormat::Json => {
            let mut de = serde_json::Deserializer::from_str(body);
            let value = seed
                .deserialize(&mut de)
                .map_err(|e| decode_error(format, e))?;
            de.end().map_err(|e| decode_error(format, e))?;
            Ok(value)
        }
        OutputFormat::Xml => {
            let mut de = quick_xml::de::Deserializer::from_str(body);
            seed.deserialize(&mut de)
                .map_err(|e| decode_error(format, e))
        }
        OutputFormat::Vdf => Err(ApiError::UnsupportedFormat(format.to_string())),
    }
}

fn decode_error(format: OutputFormat, source: impl Into<DecodeError>) -> ApiError {
    ApiError::Decode {
        format,
        source: source.into(),
    }
}

/// Deserialize a list that is a JSON array or an XML parent element whose
/// children are all named `item`. Other children are ignored.
pub fn nested_list<'de, D, T>(deserializer: D, item: &'static str) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct ListVisitor<T> {
        item: &'static str,
        marker: PhantomData<T>,
    }

    impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a sequence or a list of <{}> elements", self.item)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut items = Vec::new();
            while let Some(item) = seq.next_element()? {
                items.push(item);
            }
            Ok(items)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut items = Vec::new();
            while let Some(key) = map.next_key::<String>()? {
                if key == self.item {
                    items.extend(map.next_value::<Vec<T>>()?);
                } else {
                    map.next_value::<IgnoredAny>()?;
                }
            }
            Ok(items)
        }
    }

    deserializer.deserialize_struct(
        "List",
        &[],
        ListVisitor {
            item,
            marker: PhantomData,
        },
    )
}
