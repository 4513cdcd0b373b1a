pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Transport failures. The original cause is kept as the `source` so callers
/// can downcast it (e.g. to `reqwest::Error`).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Timeout: {0}")]
    Timeout(#[source] BoxError),

    #[error("Network error: {0}")]
    Network(#[source] BoxError),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[source] BoxError),

    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] BoxError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    Network,
    InvalidRequest,
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
}

pub fn classify<T: HttpClientErrorChecker + ?Sized>(err: &T) -> ErrorKind {
    if err.is_timeout() {
        ErrorKind::Timeout
    } else if err.is_connect() || err.is_request() {
        ErrorKind::Network
    } else {
        ErrorKind::InvalidRequest
    }
}

impl Error {
    pub fn from_kind(kind: ErrorKind, source: BoxError) -> Self {
        match kind {
            ErrorKind::Timeout => Error::Timeout(source),
            ErrorKind::Network => Error::Network(source),
            ErrorKind::InvalidRequest => Error::InvalidRequest(source),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}
