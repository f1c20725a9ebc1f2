use super::RenewalService;
use crate::{
    dto::input,
    error::Error,
    repository::{self, CredentialsRepository, WatchesRepository},
    service::gmail_service::GmailService,
};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct RenewalServiceImpl {
    watches_repository: Arc<dyn WatchesRepository>,
    credentials_repository: Arc<dyn CredentialsRepository>,
    gmail_service: Arc<dyn GmailService>,
}

impl RenewalServiceImpl {
    pub fn new(
        watches_repository: Arc<dyn WatchesRepository>,
        credentials_repository: Arc<dyn CredentialsRepository>,
        gmail_service: Arc<dyn GmailService>,
    ) -> Self {
        Self {
            watches_repository,
            credentials_repository,
            gmail_service,
        }
    }
}

#[async_trait]
impl RenewalService for RenewalServiceImpl {
    async fn renew(&self, request: input::RenewalRequest) -> Result<(), Error> {
        tracing::info!(
            watch_id = %request.watch_id,
            user_id = %request.user_id,
            "renewing watch"
        );

        let watch = self
            .watches_repository
            .find_active(request.watch_id)
            .await?
            .ok_or(Error::WatchNotExist)?;

        let credentials = self
            .credentials_repository
            .find(watch.user_id)
            .await?
            .ok_or(Error::CredentialsNotExist)?;

        let renewal = self.gmail_service.renew_watch(&credentials).await?;

        let renewed_at = OffsetDateTime::now_utc();
        match self
            .watches_repository
            .update_renewal(watch.id, &renewal.history_id, renewal.expires_at, renewed_at)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    watch_id = %watch.id,
                    expires_at = %renewal.expires_at,
                    "watch renewed"
                );
                Ok(())
            }
            Err(repository::Error::NoRowUpdated) => {
                // Duplicate request, a renewal with a later expiry
                // already landed
                tracing::info!(watch_id = %watch.id, "stale renewal discarded");
                Ok(())
            }
            Err(err) => Err(Error::Database(err)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        repository::{
            Credentials, MockCredentialsRepository, MockWatchesRepository, Watch,
        },
        service::gmail_service::{self, MockGmailService, WatchRenewal},
    };
    use mockall::predicate;
    use std::time::Duration;
    use uuid::Uuid;

    fn renewal_request(watch_id: Uuid, user_id: Uuid) -> input::RenewalRequest {
        input::RenewalRequest {
            watch_id,
            user_id,
            email: "user@example.com".to_string(),
            enqueued_at: OffsetDateTime::now_utc(),
        }
    }

    fn watch(id: Uuid, user_id: Uuid) -> Watch {
        Watch {
            id,
            user_id,
            email: "user@example.com".to_string(),
            history_id: Some("100".to_string()),
            expires_at: OffsetDateTime::now_utc() + Duration::from_secs(30 * 60),
            is_active: true,
        }
    }

    fn credentials(user_id: Uuid) -> Credentials {
        Credentials {
            user_id,
            access_token: "access token".to_string(),
            refresh_token: "refresh token".to_string(),
        }
    }

    #[tokio::test]
    async fn renew_persists_new_expiry() {
        let watch_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let new_expires_at = OffsetDateTime::now_utc() + Duration::from_secs(7 * 24 * 60 * 60);
        let mut watches_repository = MockWatchesRepository::new();
        watches_repository
            .expect_find_active()
            .with(predicate::eq(watch_id))
            .return_once(move |id| Ok(Some(watch(id, user_id))));
        watches_repository
            .expect_update_renewal()
            .withf(move |id, history_id, expires_at, _| {
                *id == watch_id && history_id == "200" && *expires_at == new_expires_at
            })
            .return_once(|_, _, _, _| Ok(()));
        let mut credentials_repository = MockCredentialsRepository::new();
        credentials_repository
            .expect_find()
            .with(predicate::eq(user_id))
            .return_once(move |user_id| Ok(Some(credentials(user_id))));
        let mut gmail_service = MockGmailService::new();
        gmail_service.expect_renew_watch().return_once(move |_| {
            Ok(WatchRenewal {
                history_id: "200".to_string(),
                expires_at: new_expires_at,
            })
        });
        let service = RenewalServiceImpl::new(
            Arc::new(watches_repository),
            Arc::new(credentials_repository),
            Arc::new(gmail_service),
        );

        let renew_result = service.renew(renewal_request(watch_id, user_id)).await;

        assert!(renew_result.is_ok());
    }

    #[tokio::test]
    async fn renew_watch_not_exist() {
        let mut watches_repository = MockWatchesRepository::new();
        watches_repository
            .expect_find_active()
            .return_once(|_| Ok(None));
        watches_repository.expect_update_renewal().never();
        let mut credentials_repository = MockCredentialsRepository::new();
        credentials_repository.expect_find().never();
        let mut gmail_service = MockGmailService::new();
        gmail_service.expect_renew_watch().never();
        let service = RenewalServiceImpl::new(
            Arc::new(watches_repository),
            Arc::new(credentials_repository),
            Arc::new(gmail_service),
        );

        let renew_result = service
            .renew(renewal_request(Uuid::new_v4(), Uuid::new_v4()))
            .await;

        assert!(matches!(renew_result, Err(Error::WatchNotExist)));
    }

    #[tokio::test]
    async fn renew_credentials_not_exist() {
        let watch_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let mut watches_repository = MockWatchesRepository::new();
        watches_repository
            .expect_find_active()
            .return_once(move |id| Ok(Some(watch(id, user_id))));
        watches_repository.expect_update_renewal().never();
        let mut credentials_repository = MockCredentialsRepository::new();
        credentials_repository.expect_find().return_once(|_| Ok(None));
        let mut gmail_service = MockGmailService::new();
        gmail_service.expect_renew_watch().never();
        let service = RenewalServiceImpl::new(
            Arc::new(watches_repository),
            Arc::new(credentials_repository),
            Arc::new(gmail_service),
        );

        let renew_result = service.renew(renewal_request(watch_id, user_id)).await;

        assert!(matches!(renew_result, Err(Error::CredentialsNotExist)));
    }

    #[tokio::test]
    async fn renew_gmail_error_no_database_write() {
        let watch_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let mut watches_repository = MockWatchesRepository::new();
        watches_repository
            .expect_find_active()
            .return_once(move |id| Ok(Some(watch(id, user_id))));
        watches_repository.expect_update_renewal().never();
        let mut credentials_repository = MockCredentialsRepository::new();
        credentials_repository
            .expect_find()
            .return_once(move |user_id| Ok(Some(credentials(user_id))));
        let mut gmail_service = MockGmailService::new();
        gmail_service.expect_renew_watch().return_once(|_| {
            Err(gmail_service::Error::Unauthorized(
                "invalid_grant".to_string(),
            ))
        });
        let service = RenewalServiceImpl::new(
            Arc::new(watches_repository),
            Arc::new(credentials_repository),
            Arc::new(gmail_service),
        );

        let renew_result = service.renew(renewal_request(watch_id, user_id)).await;

        assert!(matches!(renew_result, Err(Error::Gmail(_))));
    }

    #[tokio::test]
    async fn renew_stale_result_discarded() {
        let watch_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let mut watches_repository = MockWatchesRepository::new();
        watches_repository
            .expect_find_active()
            .return_once(move |id| Ok(Some(watch(id, user_id))));
        watches_repository
            .expect_update_renewal()
            .return_once(|_, _, _, _| Err(repository::Error::NoRowUpdated));
        let mut credentials_repository = MockCredentialsRepository::new();
        credentials_repository
            .expect_find()
            .return_once(move |user_id| Ok(Some(credentials(user_id))));
        let mut gmail_service = MockGmailService::new();
        gmail_service.expect_renew_watch().return_once(|_| {
            Ok(WatchRenewal {
                history_id: "200".to_string(),
                expires_at: OffsetDateTime::now_utc(),
            })
        });
        let service = RenewalServiceImpl::new(
            Arc::new(watches_repository),
            Arc::new(credentials_repository),
            Arc::new(gmail_service),
        );

        let renew_result = service.renew(renewal_request(watch_id, user_id)).await;

        assert!(renew_result.is_ok());
    }
}
