use crate::repository::ExpiringWatch;
use axum::async_trait;
use time::OffsetDateTime;

///
/// Service used to hand expiring watches over to the renewal worker
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RenewalsProducerService: Send + Sync {
    ///
    /// Publish a renewal request for a single watch.
    ///
    /// ### Errors
    /// Returns an error when the message could not be handed to the broker.
    /// The watch stays eligible and is re-selected on the next scan
    ///
    async fn publish_renewal_request(
        &self,
        watch: &ExpiringWatch,
        enqueued_at: OffsetDateTime,
    ) -> anyhow::Result<()>;
}
