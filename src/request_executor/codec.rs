use std::fmt::{self, Display};

use serde::{Serialize, de::DeserializeOwned};

use crate::http_client::error::BoxError;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_XML: &str = "application/xml";

/// Serialization strategies the executor knows how to speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Json,
    Xml,
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML: {0}")]
    Xml(#[source] BoxError),
}

impl Codec {
    /// Exact match on the request content type; empty means JSON.
    pub fn for_request(content_type: &str) -> Option<Codec> {
        match content_type {
            APPLICATION_JSON | "" => Some(Codec::Json),
            APPLICATION_XML => Some(Codec::Xml),
            _ => None,
        }
    }

    /// Substring match on the effective response content type, so parameters
    /// such as `; charset=utf-8` are tolerated. Empty means JSON.
    pub fn for_response(content_type: &str) -> Option<Codec> {
        if content_type.is_empty() || content_type.contains(APPLICATION_JSON) {
            Some(Codec::Json)
        } else if content_type.contains(APPLICATION_XML) {
            Some(Codec::Xml)
        } else {
            None
        }
    }

    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>, CodecError> {
        match self {
            Codec::Json => Ok(serde_json::to_vec(value)?),
            Codec::Xml => quick_xml::se::to_string(value)
                .map(String::into_bytes)
                .map_err(|e| CodecError::Xml(Box::new(e))),
        }
    }

    /// Like `encode`, but XML output is wrapped in `root` instead of the
    /// type's own name. Needed for maps, which carry no name of their own.
    pub fn encode_with_xml_root<T: Serialize + ?Sized>(
        self,
        value: &T,
        root: &str,
    ) -> Result<Vec<u8>, CodecError> {
        match self {
            Codec::Json => self.encode(value),
            Codec::Xml => quick_xml::se::to_string_with_root(root, value)
                .map(String::into_bytes)
                .map_err(|e| CodecError::Xml(Box::new(e))),
        }
    }

    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, CodecError> {
        match self {
            Codec::Json => Ok(serde_json::from_slice(bytes)?),
            Codec::Xml => quick_xml::de::from_reader(bytes).map_err(|e| CodecError::Xml(Box::new(e))),
        }
    }
}

impl Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Codec::Json => "JSON",
            Codec::Xml => "XML",
        };
        write!(f, "{}", s)
    }
}

/// A caller-owned value the response body is decoded into.
///
/// Implemented for every `DeserializeOwned` type. The target is only
/// overwritten when decoding succeeds.
pub trait ResponseTarget {
    fn decode_from(&mut self, codec: Codec, bytes: &[u8]) -> Result<(), CodecError>;
}

impl<T: DeserializeOwned> ResponseTarget for T {
    fn decode_from(&mut self, codec: Codec, bytes: &[u8]) -> Result<(), CodecError> {
        *self = codec.decode(bytes)?;
        Ok(())
    }
}
