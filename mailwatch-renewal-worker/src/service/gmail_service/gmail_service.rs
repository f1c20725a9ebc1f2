use super::{dto::WatchRenewal, error::Error};
use crate::repository::Credentials;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GmailService: Send + Sync {
    ///
    /// Renew the Gmail watch of the mailbox the credentials belong to.
    ///
    /// ### Returns
    /// [WatchRenewal] with the new expiry and history handle
    ///
    /// ### Errors
    /// - [Error::Unauthorized] when the refresh token is rejected
    ///   or Gmail denies access. Permanent, retry cannot help
    /// - other variants for transient transport and server failures
    ///
    async fn renew_watch(&self, credentials: &Credentials) -> Result<WatchRenewal, Error>;
}
