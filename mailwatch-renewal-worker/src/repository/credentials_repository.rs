use super::{dto::Credentials, error::Error};
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialsRepository: Send + Sync {
    ///
    /// Finds OAuth2 credentials of the user
    ///
    async fn find(&self, user_id: Uuid) -> Result<Option<Credentials>, Error>;
}
