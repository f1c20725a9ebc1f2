use crate::{dto::input, error::Error};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RenewalService: Send + Sync {
    ///
    /// Renew the watch referenced by the request and persist
    /// the new expiry and history handle.
    ///
    /// A duplicate request whose result would move the expiry backwards
    /// is discarded and reported as success.
    ///
    /// ### Errors
    /// - [Error::WatchNotExist] when the watch was deleted or deactivated
    ///   after the scan. No API call is made
    /// - [Error::CredentialsNotExist] when the owning user has no stored
    ///   OAuth credentials. No API call is made
    /// - [Error::Gmail] when the renewal call fails
    /// - [Error::Database] when lookup or persisting fails
    ///
    async fn renew(&self, request: input::RenewalRequest) -> Result<(), Error>;
}
