pub mod config;
pub mod http_client;
pub mod request_executor;

pub use config::ExecutorConfig;
pub use request_executor::{
    api_response::{ApiResponse, ResponseHeaders},
    codec::{Codec, CodecError, ResponseTarget},
    error::Error,
    http_request::HttpRequest,
    request_executor::RequestExecutor,
    request_options::{BasicAuth, RequestBody, RequestOptions},
    trace_sink::{TraceSink, TracingSink},
};
