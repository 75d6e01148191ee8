#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn is_body(&self) -> bool;
    fn error_string(&self) -> String;
}

impl Error {
    pub fn classify<T: HttpClientErrorChecker + ?Sized>(err: &T) -> Self {
        if err.is_timeout() {
            Error::Timeout(err.error_string())
        } else if err.is_connect() {
            Error::Connect(err.error_string())
        } else if err.is_request() || err.is_body() {
            Error::Network(err.error_string())
        } else {
            Error::InvalidRequest(err.error_string())
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}
