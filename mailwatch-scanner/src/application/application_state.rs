use super::ApplicationEnv;
use crate::{
    repository::WatchesRepositoryImpl,
    service::{
        renewals_producer_service::{
            RabbitmqRenewalsProducerService, RenewalsProducerServiceConfig,
        },
        scan_scheduler::{ScanScheduler, ScanSchedulerConfig},
        scan_service::{ScanService, ScanServiceConfig, ScanServiceImpl},
    },
};
use amqprs::connection::OpenConnectionArguments;
use axum::extract::FromRef;
use rabbitmq_client::{RabbitmqConnection, RabbitmqConnectionConfig};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use tokio::{sync::Notify, task::JoinHandle};

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub scan_service: Arc<dyn ScanService>,
}

pub struct ApplicationStateToClose {
    pub db_pool: PgPool,
    pub rabbitmq_connection: RabbitmqConnection,
    pub renewals_producer_service: Arc<RabbitmqRenewalsProducerService>,
    pub scan_scheduler_handle: JoinHandle<()>,
    pub scan_scheduler_close_notify: Arc<Notify>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&env.db_connection_string)
        .await?;

    tracing::info!("creating repositories");
    let watches_repository = WatchesRepositoryImpl::new(db_pool.clone());
    let watches_repository = Arc::new(watches_repository);

    tracing::info!("connecting to rabbitmq");
    let config = RabbitmqConnectionConfig {
        retry_interval: env.rabbitmq_retry_interval,
    };
    let open_connection_args =
        OpenConnectionArguments::try_from(env.rabbitmq_connection_string.as_str())?;
    let rabbitmq_connection = RabbitmqConnection::new(config, open_connection_args).await?;

    tracing::info!("creating services");
    let config = RenewalsProducerServiceConfig {
        exchange: env.rabbitmq_renewals_exchange_name.clone(),
    };
    let renewals_producer_service =
        RabbitmqRenewalsProducerService::new(config, rabbitmq_connection.clone()).await?;
    let renewals_producer_service = Arc::new(renewals_producer_service);

    let config = ScanServiceConfig {
        expiry_lookahead: env.expiry_lookahead,
    };
    let scan_service = ScanServiceImpl::new(
        config,
        watches_repository,
        renewals_producer_service.clone(),
    );
    let scan_service: Arc<dyn ScanService> = Arc::new(scan_service);

    tracing::info!("starting scan scheduler");
    let config = ScanSchedulerConfig {
        scan_interval: env.scan_interval,
    };
    let scan_scheduler = ScanScheduler::new(config, scan_service.clone());
    let scan_scheduler_close_notify = Arc::new(Notify::new());
    let scan_scheduler_handle =
        tokio::spawn(scan_scheduler.run(Arc::clone(&scan_scheduler_close_notify)));

    Ok((
        ApplicationState { scan_service },
        ApplicationStateToClose {
            db_pool,
            rabbitmq_connection,
            renewals_producer_service,
            scan_scheduler_handle,
            scan_scheduler_close_notify,
        },
    ))
}
