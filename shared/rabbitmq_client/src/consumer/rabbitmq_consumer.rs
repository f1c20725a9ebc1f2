use super::rabbitmq_consumer_channel_callback::RabbitmqConsumerChannelCallback;
use crate::connection::RabbitmqConnection;
use amqprs::{
    channel::{
        BasicConsumeArguments, Channel, ExchangeDeclareArguments, QueueBindArguments,
        QueueDeclareArguments,
    },
    consumer::AsyncConsumer,
};

///
/// Consumes messages from a single queue over a dedicated channel.
///
/// Declares the exchange, the queue and its bindings before consuming,
/// so the topology exists regardless of which service starts first.
///
pub struct RabbitmqConsumer {
    channel: Channel,
}

impl RabbitmqConsumer {
    #[tracing::instrument(
        name = "RabbitMQ Consumer",
        target = "rabbitmq_client::consumer",
        skip_all
    )]
    pub async fn new<Consumer>(
        rabbitmq_connection: RabbitmqConnection,
        mut exchange_declare_args: ExchangeDeclareArguments,
        mut queue_declare_args: QueueDeclareArguments,
        mut queue_bind_args: Vec<QueueBindArguments>,
        mut basic_consume_args: BasicConsumeArguments,
        consumer: Consumer,
    ) -> anyhow::Result<Self>
    where
        Consumer: AsyncConsumer + Send + 'static,
    {
        tracing::info!("starting consumer");

        tracing::info!("opening channel");
        let channel = rabbitmq_connection.connection().open_channel(None).await?;

        tracing::info!("registering channel callback");
        let channel_callback = RabbitmqConsumerChannelCallback;
        channel.register_callback(channel_callback).await?;

        tracing::info!("declaring exchange");
        exchange_declare_args.no_wait = false;
        channel.exchange_declare(exchange_declare_args).await?;

        tracing::info!("declaring queue");
        queue_declare_args.no_wait(false);
        channel.queue_declare(queue_declare_args).await?;

        tracing::info!("binding queue");
        for mut queue_bind_args in queue_bind_args.drain(..) {
            queue_bind_args.no_wait = false;
            channel.queue_bind(queue_bind_args).await?;
        }

        tracing::info!("consuming");
        basic_consume_args.no_wait = false;
        channel.basic_consume(consumer, basic_consume_args).await?;

        tracing::info!("consumer started");

        Ok(Self { channel })
    }

    #[tracing::instrument(
        name = "RabbitMQ Consumer",
        target = "rabbitmq_client::consumer",
        skip_all
    )]
    pub async fn close(self) {
        tracing::info!("closing consumer");

        tracing::info!("closing channel");
        if let Err(err) = self.channel.close().await {
            tracing::warn!(%err, "closing channel failed");
        }

        tracing::info!("consumer closed");
    }
}
