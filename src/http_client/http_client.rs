use async_trait::async_trait;

use crate::http_client::{error::Error, request::Request, response::Response};

/// Transport collaborator: sends one request and reads the whole response body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, Error>;
}
