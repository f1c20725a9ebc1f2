use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    ///
    /// Refresh token rejected or access revoked.
    /// Renewal can never succeed with the stored credentials
    ///
    #[error("credentials rejected: {0}")]
    Unauthorized(String),

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("watch request failed with status {0}")]
    WatchRequest(StatusCode),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid watch response: {0}")]
    InvalidResponse(&'static str),
}

impl Error {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }
}
