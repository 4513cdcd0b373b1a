use async_trait::async_trait;

use crate::request_executor::{
    api_response::ApiResponse, codec::ResponseTarget, error::Error,
    request_options::RequestOptions,
};

/// Entry point callers depend on, so the whole executor can be swapped out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpRequest: Send + Sync {
    /// Runs the call described by `options`.
    ///
    /// When `target` is given the body is also decoded into it; decoding
    /// failures fail the whole call. The raw response is returned either way.
    async fn execute<'a>(
        &self,
        options: RequestOptions,
        target: Option<&'a mut (dyn ResponseTarget + Send)>,
    ) -> Result<ApiResponse, Error>;
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::request_executor::{
        api_response::{ApiResponse, ResponseHeaders},
        error::Error,
        http_request::{HttpRequest, MockHttpRequest},
        request_options::RequestOptions,
    };

    async fn fetch_text(client: &dyn HttpRequest, url: &str) -> Result<String, Error> {
        let response = client.execute(RequestOptions::new("GET", url), None).await?;
        Ok(String::from_utf8_lossy(&response.body).into_owned())
    }

    #[tokio::test]
    async fn should_let_callers_substitute_the_executor() {
        let mut http_request = MockHttpRequest::new();
        http_request
            .expect_execute()
            .withf(|options, target| {
                options.method == "GET" && options.url == "http://localhost/motd" && target.is_none()
            })
            .times(1)
            .returning(|_, _| {
                Ok(ApiResponse {
                    status: 200,
                    body: Bytes::from("hello"),
                    headers: ResponseHeaders::default(),
                })
            });

        let text = fetch_text(&http_request, "http://localhost/motd").await.unwrap();

        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn should_propagate_errors_from_a_substituted_executor() {
        let mut http_request = MockHttpRequest::new();
        http_request
            .expect_execute()
            .returning(|_, _| Err(Error::UnsupportedContentType("text/csv".to_string())));

        let error = fetch_text(&http_request, "http://localhost/").await.unwrap_err();

        assert!(matches!(error, Error::UnsupportedContentType(_)));
    }
}
