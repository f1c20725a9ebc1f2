use super::{dto::Watch, error::Error};
use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WatchesRepository: Send + Sync {
    ///
    /// Finds an active watch by id
    ///
    async fn find_active(&self, id: Uuid) -> Result<Option<Watch>, Error>;

    ///
    /// Persists the result of a successful renewal.
    ///
    /// The update only applies when `expires_at` moves forward, so a
    /// duplicate renewal finishing late can never overwrite a newer one.
    ///
    /// ### Errors
    /// - [Error::NoRowUpdated] when
    ///     - watch does not exist or is not active
    ///     - a renewal with a later expiry was already persisted
    ///
    async fn update_renewal(
        &self,
        id: Uuid,
        history_id: &str,
        expires_at: OffsetDateTime,
        renewed_at: OffsetDateTime,
    ) -> Result<(), Error>;
}
