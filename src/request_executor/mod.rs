pub mod api_response;
pub mod codec;
pub mod error;
pub mod http_request;
#[allow(clippy::module_inception)]
pub mod request_executor;
pub mod request_options;
pub mod trace_sink;
