use http::{
    HeaderMap, HeaderName,
    header::{AUTHORIZATION, COOKIE, PROXY_AUTHORIZATION, SET_COOKIE},
};
use tracing::info;

use crate::http_client::{request::Request, response::Response};

pub const REDACTED: &str = "[REDACTED]";

const SENSITIVE_HEADERS: [HeaderName; 4] = [AUTHORIZATION, PROXY_AUTHORIZATION, COOKIE, SET_COOKIE];

/// Receives the debug trace of each call. Only invoked when debug mode is on.
#[cfg_attr(test, mockall::automock)]
pub trait TraceSink: Send + Sync {
    fn on_request(&self, request: &Request);
    fn on_response(&self, response: &Response);
}

/// Emits the trace as `tracing` events with credentials redacted.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn on_request(&self, request: &Request) {
        info!(
            method = %request.method,
            url = %request.url,
            headers = ?redacted_headers(&request.headers),
            body = %request
                .body
                .as_ref()
                .map(|b| String::from_utf8_lossy(b).into_owned())
                .unwrap_or_default(),
            "HTTP request"
        );
    }

    fn on_response(&self, response: &Response) {
        info!(
            status = response.status,
            headers = ?redacted_headers(&response.headers),
            body = %String::from_utf8_lossy(&response.body),
            "HTTP response"
        );
    }
}

pub fn redacted_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(k, v)| {
            let value = if SENSITIVE_HEADERS.contains(k) || v.is_sensitive() {
                REDACTED.to_string()
            } else {
                String::from_utf8_lossy(v.as_bytes()).into_owned()
            };
            (k.to_string(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use http::{HeaderMap, HeaderValue};

    use crate::request_executor::trace_sink::{REDACTED, redacted_headers};

    #[test]
    fn redacts_credentials_and_keeps_other_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        headers.insert("cookie", HeaderValue::from_static("session=1"));
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let mut secret = HeaderValue::from_static("token");
        secret.set_sensitive(true);
        headers.insert("x-api-key", secret);

        let redacted = redacted_headers(&headers);

        let value_of = |name: &str| {
            redacted
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(value_of("authorization"), Some(REDACTED));
        assert_eq!(value_of("cookie"), Some(REDACTED));
        assert_eq!(value_of("x-api-key"), Some(REDACTED));
        assert_eq!(value_of("content-type"), Some("application/json"));
    }
}
