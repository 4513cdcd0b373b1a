use std::time::Duration;

use async_trait::async_trait;

use crate::http_client::{
    error::{Error, HttpClientErrorChecker, classify},
    http_client::HttpClient,
    request::Request,
    response::Response,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::from)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        let mut request_builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            request_builder = request_builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            request_builder = request_builder.timeout(timeout);
        }

        let reqwest_response = request_builder.send().await.map_err(Error::from)?;

        let status = reqwest_response.status().as_u16();
        let headers = reqwest_response.headers().clone();

        let body = reqwest_response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(Box::new(e))
            } else {
                Error::BodyRead(Box::new(e))
            }
        })?;

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = classify(&err);
        Error::from_kind(kind, Box::new(err))
    }
}
