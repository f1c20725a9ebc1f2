use super::{RenewalsProducerService, RenewalsProducerServiceConfig};
use crate::{dto::output, repository::ExpiringWatch};
use amqprs::{
    channel::{ExchangeDeclareArguments, ExchangeType},
    BasicProperties,
};
use axum::async_trait;
use rabbitmq_client::{RabbitmqConnection, RabbitmqProducer};
use time::OffsetDateTime;

pub struct RabbitmqRenewalsProducerService {
    producer: RabbitmqProducer,
}

impl RabbitmqRenewalsProducerService {
    pub async fn new(
        config: RenewalsProducerServiceConfig,
        rabbitmq_connection: RabbitmqConnection,
    ) -> anyhow::Result<Self> {
        let exchange_declare_args =
            ExchangeDeclareArguments::of_type(&config.exchange, ExchangeType::Direct)
                .durable(true)
                .finish();
        let producer = RabbitmqProducer::new(rabbitmq_connection, exchange_declare_args).await?;

        Ok(Self { producer })
    }

    pub async fn close(self) {
        self.producer.close().await;
    }
}

#[async_trait]
impl RenewalsProducerService for RabbitmqRenewalsProducerService {
    async fn publish_renewal_request(
        &self,
        watch: &ExpiringWatch,
        enqueued_at: OffsetDateTime,
    ) -> anyhow::Result<()> {
        let message = output::RenewalRequest {
            watch_id: watch.id,
            user_id: watch.user_id,
            email: watch.email.clone(),
            enqueued_at,
        };
        let encoded_message = serde_json::to_vec(&message)?;

        let basic_properties = BasicProperties::default()
            .with_content_type("application/json")
            .with_persistence(true)
            .finish();
        self.producer
            .send(String::new(), basic_properties, encoded_message)
            .await?;

        Ok(())
    }
}
