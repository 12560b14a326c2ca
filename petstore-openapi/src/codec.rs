//! JSON and XML encoding of the generated models.
//!
//! Wire names live on the models' serde attributes, so both formats go through
//! the same derive and stay in sync.

use quick_xml::events::{BytesCData, Event};
use quick_xml::{Reader, SeError, Writer};
use serde::de::DeserializeOwned;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    /// Value of the `Content-Type` header a client sends along a payload
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Xml => "application/xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Xml => f.write_str("xml"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown format {0:?}, expected \"json\" or \"xml\"")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}

#[derive(Error, Debug)]
pub enum DecodingError {
    #[error("DecodingError: invalid json payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("DecodingError: invalid xml payload: {0}")]
    Xml(#[from] quick_xml::DeError),
}

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("EncodingError: cannot produce json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("EncodingError: cannot produce xml: {0}")]
    Xml(#[from] quick_xml::SeError),
}

/// Serialize `value` in the requested wire format
///
/// ```
/// # use petstore_openapi::codec::{encode, Format};
/// # use petstore_openapi::models::TypeHolderExample;
/// let record = TypeHolderExample::new("hi".into(), 0.5, 7, false, vec![]);
///
/// assert_eq!(
///     encode(&record, Format::Json).unwrap(),
///     r#"{"string_item":"hi","number_item":0.5,"integer_item":7,"bool_item":false,"array_item":[]}"#
/// );
/// ```
pub fn encode<T: Serialize>(value: &T, format: Format) -> Result<String, EncodingError> {
    let payload = match format {
        Format::Json => serde_json::to_string(value)?,
        Format::Xml => keep_padding(&quick_xml::se::to_string(value)?)?,
    };
    log::debug!("encoded {} payload ({} bytes)", format, payload.len());
    Ok(payload)
}

pub fn decode<T: DeserializeOwned>(payload: &str, format: Format) -> Result<T, DecodingError> {
    log::debug!("decoding {} payload ({} bytes)", format, payload.len());
    match format {
        Format::Json => Ok(serde_json::from_str(payload)?),
        Format::Xml => Ok(quick_xml::de::from_str(payload)?),
    }
}

fn is_xml_space(b: &u8) -> bool {
    matches!(*b, b' ' | b'\t' | b'\r' | b'\n')
}

/// The xml deserializer trims text content but reads CDATA verbatim, so any
/// text starting or ending with whitespace is rewritten as CDATA sections.
fn keep_padding(xml: &str) -> Result<String, SeError> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));

    loop {
        match reader
            .read_event()
            .map_err(|e| SeError::Custom(e.to_string()))?
        {
            Event::Eof => break,
            Event::Text(text)
                if text.first().map_or(false, is_xml_space)
                    || text.last().map_or(false, is_xml_space) =>
            {
                let content = text
                    .unescape()
                    .map_err(|e| SeError::Custom(e.to_string()))?;
                // a "]]>" in the content splits it over several sections
                for cdata in BytesCData::escaped(&content) {
                    writer.write_event(Event::CData(cdata))?;
                }
            }
            event => writer.write_event(event)?,
        }
    }

    String::from_utf8(writer.into_inner()).map_err(|e| e.utf8_error().into())
}

/// Refuse NaN and infinities: json would silently turn them into `null`
pub fn finite_f32<S>(x: &f32, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !x.is_finite() {
        return Err(S::Error::custom(format!("{} is not a finite number", x)));
    }
    s.serialize_f32(*x)
}
