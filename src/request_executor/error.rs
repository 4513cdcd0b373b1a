use crate::http_client::{self, error::BoxError};
use crate::request_executor::codec::{Codec, CodecError};

/// Every way a call can fail. No variant carries a partial response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported Content-Type: {0}")]
    UnsupportedContentType(String),

    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] CodecError),

    #[error("Failed to build request: {0}")]
    RequestConstruction(#[source] BoxError),

    #[error(transparent)]
    Transport(#[from] http_client::error::Error),

    #[error("Failed to read response body: {0}")]
    ResponseRead(#[source] BoxError),

    #[error("Failed to decode {codec} response: {source}")]
    ResponseDecode {
        codec: Codec,
        #[source]
        source: CodecError,
    },

    #[error("Unsupported Content-Type ({content_type}) and failed JSON fallback: {source}")]
    UnsupportedResponseFormat {
        content_type: String,
        #[source]
        source: CodecError,
    },
}

impl Error {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(err) if err.is_timeout())
    }
}
