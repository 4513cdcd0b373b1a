use std::sync::Arc;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use bytes::Bytes;
use http::{
    HeaderMap, HeaderName, HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use reqwest::Url;
use tracing::debug;

use crate::{
    config::ExecutorConfig,
    http_client::{
        error::Error as HttpClientError, http_client::HttpClient, request::Request,
        reqwest_http_client::ReqwestHttpClient,
    },
    request_executor::{
        api_response::ApiResponse,
        codec::{Codec, ResponseTarget},
        error::Error,
        http_request::HttpRequest,
        request_options::{BasicAuth, RequestBody, RequestOptions},
        trace_sink::{TraceSink, TracingSink},
    },
};

/// Builds, sends and decodes one HTTP call per `execute`.
///
/// Holds no per-call state, so a shared instance can serve concurrent callers.
#[derive(Clone)]
pub struct RequestExecutor {
    http_client: Arc<dyn HttpClient>,
    trace_sink: Arc<dyn TraceSink>,
    config: ExecutorConfig,
}

impl RequestExecutor {
    pub fn new(http_client: Arc<dyn HttpClient>, config: ExecutorConfig) -> Self {
        Self {
            http_client,
            trace_sink: Arc::new(TracingSink),
            config,
        }
    }

    /// Executor backed by a reqwest client using `config.timeout`.
    pub fn from_config(config: ExecutorConfig) -> Result<Self, Error> {
        let http_client = ReqwestHttpClient::with_timeout(config.timeout)?;
        Ok(Self::new(Arc::new(http_client), config))
    }

    pub fn with_trace_sink(mut self, trace_sink: Arc<dyn TraceSink>) -> Self {
        self.trace_sink = trace_sink;
        self
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }
}

#[async_trait]
impl HttpRequest for RequestExecutor {
    async fn execute<'a>(
        &self,
        options: RequestOptions,
        target: Option<&'a mut (dyn ResponseTarget + Send)>,
    ) -> Result<ApiResponse, Error> {
        if self.config.mock_mode {
            debug!("Mock mode enabled, skipping {} {}", options.method, options.url);
            return Ok(ApiResponse::mock());
        }

        let RequestOptions {
            method,
            url,
            headers,
            body,
            content_type,
            basic_auth,
            timeout,
        } = options;

        let body = body
            .map(|body| prepare_body(body, &content_type))
            .transpose()?;

        let mut request = build_request(&method, &url, body)?;
        request.headers = build_headers(&content_type, &headers, basic_auth.as_ref())?;
        request.timeout = timeout;

        if self.config.debug {
            self.trace_sink.on_request(&request);
        }

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|err| match err {
                HttpClientError::BodyRead(source) => Error::ResponseRead(source),
                other => Error::Transport(other),
            })?;

        if self.config.debug {
            self.trace_sink.on_response(&response);
        }

        let api_response = ApiResponse {
            status: response.status,
            headers: (&response.headers).into(),
            body: response.body,
        };

        if let Some(target) = target {
            let effective_content_type = if content_type.is_empty() {
                api_response.headers.get(CONTENT_TYPE.as_str()).unwrap_or_default()
            } else {
                content_type.as_str()
            };
            decode_into(effective_content_type, &api_response.body, target)?;
        }

        Ok(api_response)
    }
}

fn prepare_body(body: RequestBody, content_type: &str) -> Result<Bytes, Error> {
    match body {
        RequestBody::Raw(bytes) => Ok(bytes),
        RequestBody::Text(text) => Ok(Bytes::from(text)),
        RequestBody::Structured(structured) => {
            let codec = Codec::for_request(content_type)
                .ok_or_else(|| Error::UnsupportedContentType(content_type.to_string()))?;
            structured
                .encode(codec)
                .map(Bytes::from)
                .map_err(Error::Serialization)
        }
    }
}

fn build_request(method: &str, url: &str, body: Option<Bytes>) -> Result<Request, Error> {
    let method = if method.is_empty() {
        Method::GET
    } else {
        Method::from_bytes(method.as_bytes())
            .map_err(|e| Error::RequestConstruction(Box::new(e)))?
    };

    let url = Url::parse(url).map_err(|e| Error::RequestConstruction(Box::new(e)))?;

    Ok(Request {
        method,
        url,
        headers: HeaderMap::new(),
        body,
        timeout: None,
    })
}

/// Content type first, then custom headers, then basic auth; the last write
/// for a name wins.
fn build_headers(
    content_type: &str,
    custom_headers: &std::collections::HashMap<String, String>,
    basic_auth: Option<&BasicAuth>,
) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    if !content_type.is_empty() {
        headers.insert(CONTENT_TYPE, header_value(content_type)?);
    }

    let mut custom_headers: Vec<_> = custom_headers.iter().collect();
    custom_headers.sort();

    for (name, value) in custom_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::RequestConstruction(Box::new(e)))?;
        headers.insert(name, header_value(value)?);
    }

    if let Some(auth) = basic_auth {
        let credentials = STANDARD.encode(format!("{}:{}", auth.username, auth.password));
        let mut value = header_value(&format!("Basic {}", credentials))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|e| Error::RequestConstruction(Box::new(e)))
}

fn decode_into(
    content_type: &str,
    body: &[u8],
    target: &mut (dyn ResponseTarget + Send),
) -> Result<(), Error> {
    match Codec::for_response(content_type) {
        Some(codec) => target
            .decode_from(codec, body)
            .map_err(|source| Error::ResponseDecode { codec, source }),
        None => target
            .decode_from(Codec::Json, body)
            .map_err(|source| Error::UnsupportedResponseFormat {
                content_type: content_type.to_string(),
                source,
            }),
    }
}
