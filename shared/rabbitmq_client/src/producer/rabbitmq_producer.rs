use super::rabbitmq_producer_channel_callback::RabbitmqProducerChannelCallback;
use crate::connection::RabbitmqConnection;
use amqprs::{
    channel::{BasicPublishArguments, Channel, ExchangeDeclareArguments},
    BasicProperties,
};

///
/// Publishes messages to a single exchange over a dedicated channel.
///
pub struct RabbitmqProducer {
    channel: Channel,
    exchange: String,
}

impl RabbitmqProducer {
    #[tracing::instrument(
        name = "RabbitMQ Producer",
        target = "rabbitmq_client::producer",
        skip_all
    )]
    pub async fn new(
        rabbitmq_connection: RabbitmqConnection,
        mut exchange_declare_args: ExchangeDeclareArguments,
    ) -> anyhow::Result<Self> {
        tracing::info!("starting producer");

        tracing::info!("opening channel");
        let channel = rabbitmq_connection.connection().open_channel(None).await?;

        tracing::info!("registering channel callback");
        let channel_callback = RabbitmqProducerChannelCallback;
        channel.register_callback(channel_callback).await?;

        tracing::info!("declaring exchange");
        exchange_declare_args.no_wait = false;
        let exchange = exchange_declare_args.exchange.clone();
        channel.exchange_declare(exchange_declare_args).await?;

        tracing::info!("producer started");

        Ok(Self { channel, exchange })
    }

    ///
    /// Publish a single message to the producer's exchange.
    ///
    /// ### Errors
    /// Returns an error when the message could not be written to the
    /// broker connection. Caller decides whether to retry or skip.
    ///
    pub async fn send(
        &self,
        routing_key: String,
        basic_properties: BasicProperties,
        content: Vec<u8>,
    ) -> Result<(), amqprs::error::Error> {
        let args = BasicPublishArguments::new(&self.exchange, &routing_key);
        self.channel
            .basic_publish(basic_properties, content, args)
            .await
    }

    #[tracing::instrument(
        name = "RabbitMQ Producer",
        target = "rabbitmq_client::producer",
        skip_all
    )]
    pub async fn close(self) {
        tracing::info!("closing producer");

        tracing::info!("closing channel");
        if let Err(err) = self.channel.close().await {
            tracing::warn!(%err, "closing channel failed");
        }

        tracing::info!("producer closed");
    }
}
