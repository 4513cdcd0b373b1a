use std::{collections::HashMap, fmt, time::Duration};

use bytes::Bytes;
use serde::Serialize;

use crate::request_executor::codec::{Codec, CodecError};

/// Declarative description of one outgoing call.
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// HTTP method; empty means `GET`.
    pub method: String,
    pub url: String,
    /// Custom headers, applied after the computed content type. `header`
    /// stores names lower-cased; entries inserted directly whose names differ
    /// only in case are applied in byte order of the name.
    pub headers: HashMap<String, String>,
    pub body: Option<RequestBody>,
    /// Empty means "infer": JSON for structured bodies, no header sent.
    pub content_type: String,
    pub basic_auth: Option<BasicAuth>,
    /// Per-call deadline forwarded to the transport.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Header names are case-insensitive; the last value set for a name wins.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Request payload. Raw and text bodies are sent verbatim; structured bodies
/// are encoded with the codec selected from the content type.
#[derive(Debug)]
pub enum RequestBody {
    Raw(Bytes),
    Text(String),
    Structured(StructuredBody),
}

impl RequestBody {
    pub fn structured<T>(value: T) -> Self
    where
        T: Serialize + Send + 'static,
    {
        RequestBody::Structured(StructuredBody::new(value))
    }

    /// Structured body whose XML form is wrapped in `root`.
    pub fn structured_with_xml_root<T>(value: T, root: impl Into<String>) -> Self
    where
        T: Serialize + Send + 'static,
    {
        RequestBody::Structured(StructuredBody::with_xml_root(value, root))
    }
}

impl From<Bytes> for RequestBody {
    fn from(bytes: Bytes) -> Self {
        RequestBody::Raw(bytes)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        RequestBody::Raw(Bytes::from(bytes))
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

type Encoder = Box<dyn FnOnce(Codec) -> Result<Vec<u8>, CodecError> + Send>;

/// Any serializable value, erased behind a one-shot encoder.
pub struct StructuredBody {
    encoder: Encoder,
}

impl StructuredBody {
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + Send + 'static,
    {
        Self {
            encoder: Box::new(move |codec| codec.encode(&value)),
        }
    }

    pub fn with_xml_root<T>(value: T, root: impl Into<String>) -> Self
    where
        T: Serialize + Send + 'static,
    {
        let root = root.into();
        Self {
            encoder: Box::new(move |codec| codec.encode_with_xml_root(&value, &root)),
        }
    }

    pub fn encode(self, codec: Codec) -> Result<Vec<u8>, CodecError> {
        (self.encoder)(codec)
    }
}

impl fmt::Debug for StructuredBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StructuredBody(..)")
    }
}
