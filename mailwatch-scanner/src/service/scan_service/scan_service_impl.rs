use super::{ScanService, ScanServiceConfig};
use crate::{
    dto::output,
    error::Error,
    repository::WatchesRepository,
    service::renewals_producer_service::RenewalsProducerService,
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct ScanServiceImpl {
    config: ScanServiceConfig,
    watches_repository: Arc<dyn WatchesRepository>,
    renewals_producer_service: Arc<dyn RenewalsProducerService>,
}

impl ScanServiceImpl {
    pub fn new(
        config: ScanServiceConfig,
        watches_repository: Arc<dyn WatchesRepository>,
        renewals_producer_service: Arc<dyn RenewalsProducerService>,
    ) -> Self {
        Self {
            config,
            watches_repository,
            renewals_producer_service,
        }
    }
}

#[async_trait]
impl ScanService for ScanServiceImpl {
    async fn scan(&self) -> Result<output::ScanSummary, Error> {
        tracing::info!("scanning for expiring watches");

        let now = OffsetDateTime::now_utc();
        let threshold = now + self.config.expiry_lookahead;

        let watches = self.watches_repository.find_expiring(threshold).await?;
        let watches_due = watches.len();
        if watches_due == 0 {
            tracing::info!("no expiring watches found");
            return Ok(output::ScanSummary {
                watches_due: 0,
                published: 0,
            });
        }

        let mut published = 0;
        for watch in &watches {
            match self
                .renewals_producer_service
                .publish_renewal_request(watch, now)
                .await
            {
                Ok(()) => {
                    tracing::info!(
                        watch_id = %watch.id,
                        user_id = %watch.user_id,
                        expires_at = %watch.expires_at,
                        "published renewal request"
                    );
                    published += 1;
                }
                Err(err) => {
                    // Watch stays eligible, next scan picks it up again
                    tracing::warn!(
                        watch_id = %watch.id,
                        %err,
                        "failed to publish renewal request, skipping"
                    );
                }
            }
        }

        tracing::info!(watches_due, published, "scan finished");

        Ok(output::ScanSummary {
            watches_due,
            published,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        repository::{ExpiringWatch, MockWatchesRepository},
        service::renewals_producer_service::MockRenewalsProducerService,
    };
    use anyhow::anyhow;
    use mockall::predicate;
    use std::time::Duration;
    use uuid::Uuid;

    fn expiring_watch(expires_in: Duration) -> ExpiringWatch {
        ExpiringWatch {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            expires_at: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn scan_publishes_one_request_per_expiring_watch() {
        let config = ScanServiceConfig {
            expiry_lookahead: Duration::from_secs(2 * 60 * 60),
        };
        let watches = vec![
            expiring_watch(Duration::from_secs(30 * 60)),
            expiring_watch(Duration::from_secs(90 * 60)),
        ];
        let mut watches_repository = MockWatchesRepository::new();
        watches_repository
            .expect_find_expiring()
            .return_once(move |_| Ok(watches));
        let mut renewals_producer_service = MockRenewalsProducerService::new();
        renewals_producer_service
            .expect_publish_renewal_request()
            .times(2)
            .returning(|_, _| Ok(()));
        let service = ScanServiceImpl::new(
            config,
            Arc::new(watches_repository),
            Arc::new(renewals_producer_service),
        );

        let summary = service.scan().await.unwrap();

        assert_eq!(summary.watches_due, 2);
        assert_eq!(summary.published, 2);
    }

    #[tokio::test]
    async fn scan_threshold_is_now_plus_lookahead() {
        let lookahead = Duration::from_secs(2 * 60 * 60);
        let config = ScanServiceConfig {
            expiry_lookahead: lookahead,
        };
        let mut watches_repository = MockWatchesRepository::new();
        watches_repository
            .expect_find_expiring()
            .with(predicate::function(move |threshold: &OffsetDateTime| {
                let expected = OffsetDateTime::now_utc() + lookahead;
                (expected - *threshold).abs() < time::Duration::seconds(5)
            }))
            .return_once(|_| Ok(vec![]));
        let renewals_producer_service = MockRenewalsProducerService::new();
        let service = ScanServiceImpl::new(
            config,
            Arc::new(watches_repository),
            Arc::new(renewals_producer_service),
        );

        service.scan().await.unwrap();
    }

    #[tokio::test]
    async fn scan_no_expiring_watches_publishes_nothing() {
        let config = ScanServiceConfig {
            expiry_lookahead: Duration::from_secs(2 * 60 * 60),
        };
        let mut watches_repository = MockWatchesRepository::new();
        watches_repository
            .expect_find_expiring()
            .return_once(|_| Ok(vec![]));
        let mut renewals_producer_service = MockRenewalsProducerService::new();
        renewals_producer_service
            .expect_publish_renewal_request()
            .never();
        let service = ScanServiceImpl::new(
            config,
            Arc::new(watches_repository),
            Arc::new(renewals_producer_service),
        );

        let summary = service.scan().await.unwrap();

        assert_eq!(summary.watches_due, 0);
        assert_eq!(summary.published, 0);
    }

    #[tokio::test]
    async fn scan_publish_failure_skips_watch() {
        let config = ScanServiceConfig {
            expiry_lookahead: Duration::from_secs(2 * 60 * 60),
        };
        let watches = vec![
            expiring_watch(Duration::from_secs(30 * 60)),
            expiring_watch(Duration::from_secs(90 * 60)),
        ];
        let failing_watch_id = watches[0].id;
        let mut watches_repository = MockWatchesRepository::new();
        watches_repository
            .expect_find_expiring()
            .return_once(move |_| Ok(watches));
        let mut renewals_producer_service = MockRenewalsProducerService::new();
        renewals_producer_service
            .expect_publish_renewal_request()
            .times(2)
            .returning(move |watch, _| {
                if watch.id == failing_watch_id {
                    Err(anyhow!("broker unavailable"))
                } else {
                    Ok(())
                }
            });
        let service = ScanServiceImpl::new(
            config,
            Arc::new(watches_repository),
            Arc::new(renewals_producer_service),
        );

        let summary = service.scan().await.unwrap();

        assert_eq!(summary.watches_due, 2);
        assert_eq!(summary.published, 1);
    }

    #[tokio::test]
    async fn scan_database_error() {
        let config = ScanServiceConfig {
            expiry_lookahead: Duration::from_secs(2 * 60 * 60),
        };
        let mut watches_repository = MockWatchesRepository::new();
        watches_repository
            .expect_find_expiring()
            .return_once(|_| Err(crate::repository::Error::Postgres(sqlx::Error::PoolClosed)));
        let mut renewals_producer_service = MockRenewalsProducerService::new();
        renewals_producer_service
            .expect_publish_renewal_request()
            .never();
        let service = ScanServiceImpl::new(
            config,
            Arc::new(watches_repository),
            Arc::new(renewals_producer_service),
        );

        let scan_result = service.scan().await;

        assert!(matches!(scan_result, Err(Error::Database(_))));
    }
}
