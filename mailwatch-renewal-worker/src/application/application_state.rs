use super::ApplicationEnv;
use crate::{
    repository::{CredentialsRepositoryImpl, WatchesRepositoryImpl},
    service::{
        gmail_service::{GmailServiceConfig, GmailServiceImpl},
        renewal_service::RenewalServiceImpl,
        renewals_consumer_service::{RenewalsConsumerService, RenewalsConsumerServiceConfig},
    },
};
use amqprs::connection::OpenConnectionArguments;
use rabbitmq_client::{RabbitmqConnection, RabbitmqConnectionConfig};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

pub struct ApplicationStateToClose {
    pub db_pool: PgPool,
    pub rabbitmq_connection: RabbitmqConnection,
    pub renewals_consumer_service: RenewalsConsumerService,
}

pub async fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationStateToClose> {
    tracing::info!("connecting to database");
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&env.db_connection_string)
        .await?;

    tracing::info!("creating repositories");
    let watches_repository = WatchesRepositoryImpl::new(db_pool.clone());
    let watches_repository = Arc::new(watches_repository);
    let credentials_repository = CredentialsRepositoryImpl::new(db_pool.clone());
    let credentials_repository = Arc::new(credentials_repository);

    tracing::info!("connecting to rabbitmq");
    let config = RabbitmqConnectionConfig {
        retry_interval: env.rabbitmq_retry_interval,
    };
    let open_connection_args =
        OpenConnectionArguments::try_from(env.rabbitmq_connection_string.as_str())?;
    let rabbitmq_connection = RabbitmqConnection::new(config, open_connection_args).await?;

    tracing::info!("creating services");
    let config = GmailServiceConfig {
        client_id: env.google_client_id.clone(),
        client_secret: env.google_client_secret.clone(),
        pubsub_topic: env.gmail_pubsub_topic.clone(),
    };
    let gmail_service = GmailServiceImpl::new(config)?;
    let gmail_service = Arc::new(gmail_service);

    let renewal_service = RenewalServiceImpl::new(
        watches_repository,
        credentials_repository,
        gmail_service,
    );
    let renewal_service = Arc::new(renewal_service);

    let config = RenewalsConsumerServiceConfig {
        exchange: env.rabbitmq_renewals_exchange_name.clone(),
        queue: env.rabbitmq_renewals_queue_name.clone(),
        dead_letter_exchange: env.rabbitmq_dead_letter_exchange_name.clone(),
        dead_letter_queue: env.rabbitmq_dead_letter_queue_name.clone(),
    };
    let renewals_consumer_service =
        RenewalsConsumerService::new(config, rabbitmq_connection.clone(), renewal_service).await?;

    Ok(ApplicationStateToClose {
        db_pool,
        rabbitmq_connection,
        renewals_consumer_service,
    })
}
