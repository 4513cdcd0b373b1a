use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::Url;

/// A fully validated outgoing request, ready for the transport.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    /// Per-call deadline; the client-wide timeout applies when `None`.
    pub timeout: Option<Duration>,
}
