use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

use bytes::Bytes;
use http::HeaderMap;

use crate::request_executor::codec::APPLICATION_JSON;

pub const MOCK_RESPONSE_BODY: &str = r#"{"mock":"success"}"#;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Bytes,
    pub headers: ResponseHeaders,
}

impl ApiResponse {
    /// Canned response returned in mock mode.
    pub fn mock() -> Self {
        Self {
            status: 200,
            body: Bytes::from_static(MOCK_RESPONSE_BODY.as_bytes()),
            headers: ResponseHeaders::from([(
                "content-type".to_string(),
                APPLICATION_JSON.to_string(),
            )]),
        }
    }
}

/// Response headers keyed by lower-cased name, every value kept in arrival
/// order. `get` gives the first value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseHeaders(pub HashMap<String, Vec<String>>);

impl ResponseHeaders {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        self.0
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Deref for ResponseHeaders {
    type Target = HashMap<String, Vec<String>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ResponseHeaders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for ResponseHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        let mut headers = ResponseHeaders::default();
        for (k, v) in arr {
            headers.entry(k.to_ascii_lowercase()).or_default().push(v);
        }
        headers
    }
}

impl From<&HeaderMap> for ResponseHeaders {
    fn from(header_map: &HeaderMap) -> Self {
        let mut headers = ResponseHeaders::default();
        for (k, v) in header_map.iter() {
            headers
                .entry(k.to_string())
                .or_default()
                .push(String::from_utf8_lossy(v.as_bytes()).into_owned());
        }
        headers
    }
}
