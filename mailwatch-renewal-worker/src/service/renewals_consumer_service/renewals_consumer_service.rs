use super::RenewalsConsumerServiceConfig;
use crate::{
    dto::input,
    error::{Error, Recovery},
    service::renewal_service::RenewalService,
};
use amqprs::{
    channel::{
        BasicAckArguments, BasicConsumeArguments, BasicNackArguments, Channel,
        ExchangeDeclareArguments, ExchangeType, QueueBindArguments, QueueDeclareArguments,
    },
    consumer::AsyncConsumer,
    BasicProperties, Deliver, FieldTable, FieldValue,
};
use anyhow::anyhow;
use async_trait::async_trait;
use rabbitmq_client::{RabbitmqConnection, RabbitmqConsumer};
use std::sync::Arc;

pub struct RenewalsConsumerService {
    rabbitmq_consumer: RabbitmqConsumer,
}

impl RenewalsConsumerService {
    pub async fn new(
        config: RenewalsConsumerServiceConfig,
        rabbitmq_connection: RabbitmqConnection,
        renewal_service: Arc<dyn RenewalService>,
    ) -> anyhow::Result<Self> {
        declare_dead_letter_topology(&config, &rabbitmq_connection).await?;

        let mut queue_arguments = FieldTable::new();
        queue_arguments.insert(
            "x-dead-letter-exchange"
                .try_into()
                .map_err(|err| anyhow!("invalid field name: {err}"))?,
            FieldValue::S(
                config
                    .dead_letter_exchange
                    .clone()
                    .try_into()
                    .map_err(|err| anyhow!("invalid field value: {err}"))?,
            ),
        );

        let exchange_declare_args =
            ExchangeDeclareArguments::of_type(&config.exchange, ExchangeType::Direct)
                .durable(true)
                .finish();
        let queue_declare_args = QueueDeclareArguments::new(&config.queue)
            .durable(true)
            .arguments(queue_arguments)
            .finish();
        let queue_bind_args = QueueBindArguments::new(&config.queue, &config.exchange, "");
        let basic_consume_args = BasicConsumeArguments::new(&config.queue, "")
            .manual_ack(true)
            .finish();
        let consumer = Consumer { renewal_service };
        let rabbitmq_consumer = RabbitmqConsumer::new(
            rabbitmq_connection,
            exchange_declare_args,
            queue_declare_args,
            vec![queue_bind_args],
            basic_consume_args,
            consumer,
        )
        .await?;

        Ok(Self { rabbitmq_consumer })
    }

    pub async fn close(self) {
        self.rabbitmq_consumer.close().await;
    }
}

///
/// Declares the exchange and queue that keep messages which exhausted
/// their retries, so they are retained for inspection instead of dropped
///
async fn declare_dead_letter_topology(
    config: &RenewalsConsumerServiceConfig,
    rabbitmq_connection: &RabbitmqConnection,
) -> anyhow::Result<()> {
    let channel = rabbitmq_connection.connection().open_channel(None).await?;

    let exchange_declare_args =
        ExchangeDeclareArguments::of_type(&config.dead_letter_exchange, ExchangeType::Direct)
            .durable(true)
            .finish();
    channel.exchange_declare(exchange_declare_args).await?;

    let queue_declare_args = QueueDeclareArguments::new(&config.dead_letter_queue)
        .durable(true)
        .finish();
    channel.queue_declare(queue_declare_args).await?;

    let queue_bind_args = QueueBindArguments::new(
        &config.dead_letter_queue,
        &config.dead_letter_exchange,
        "",
    );
    channel.queue_bind(queue_bind_args).await?;

    channel.close().await?;

    Ok(())
}

struct Consumer {
    renewal_service: Arc<dyn RenewalService>,
}

impl Consumer {
    async fn try_consume(&self, content: Vec<u8>) -> Result<(), Error> {
        let request = serde_json::from_slice::<input::RenewalRequest>(&content)?;

        self.renewal_service.renew(request).await
    }
}

#[async_trait]
impl AsyncConsumer for Consumer {
    #[tracing::instrument(
        name = "Renewals Consumer",
        skip_all,
        fields(
            delivery_tag = deliver.delivery_tag(),
        )
    )]
    async fn consume(
        &mut self,
        channel: &Channel,
        deliver: Deliver,
        _basic_properties: BasicProperties,
        content: Vec<u8>,
    ) {
        tracing::info!("processing renewal request");

        let redelivered = deliver.redelivered();
        match self.try_consume(content).await {
            Ok(()) => {
                send_ack(channel, &deliver).await;
            }
            Err(err) => match err.recovery() {
                Recovery::Drop => {
                    tracing::warn!(%err, "dropping renewal request");
                    send_ack(channel, &deliver).await;
                }
                Recovery::Retry if !redelivered => {
                    tracing::warn!(%err, "requeueing renewal request");
                    send_nack(channel, &deliver, true).await;
                }
                // Second transient failure or permanent error,
                // route to the dead letter exchange
                Recovery::Retry | Recovery::DeadLetter => {
                    tracing::error!(%err, "dead lettering renewal request");
                    send_nack(channel, &deliver, false).await;
                }
            },
        }

        tracing::info!("renewal request processed");
    }
}

async fn send_ack(channel: &Channel, deliver: &Deliver) {
    tracing::trace!("sending ack");
    let args = BasicAckArguments::new(deliver.delivery_tag(), false);
    if let Err(err) = channel.basic_ack(args).await {
        tracing::warn!(%err, "failed to ack message");
    }
    tracing::trace!("ack sent");
}

async fn send_nack(channel: &Channel, deliver: &Deliver, requeue: bool) {
    tracing::trace!("sending nack");
    let args = BasicNackArguments::new(deliver.delivery_tag(), false, requeue);
    if let Err(err) = channel.basic_nack(args).await {
        tracing::warn!(%err, "failed to nack message");
    }
    tracing::trace!("nack sent");
}
