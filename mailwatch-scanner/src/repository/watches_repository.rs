use super::{dto::ExpiringWatch, error::Error};
use axum::async_trait;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WatchesRepository: Send + Sync {
    ///
    /// Finds all active watches with expiry at or before `expires_before`,
    /// soonest expiry first
    ///
    async fn find_expiring(
        &self,
        expires_before: OffsetDateTime,
    ) -> Result<Vec<ExpiringWatch>, Error>;
}
