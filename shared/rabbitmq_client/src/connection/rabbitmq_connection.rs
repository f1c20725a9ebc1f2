use super::{
    dto::RabbitmqConnectionConfig, rabbitmq_connection_callback::RabbitmqConnectionCallback,
};
use crate::retry::retry;
use amqprs::connection::{Connection, OpenConnectionArguments};

///
/// RabbitMQ connection shared by producers and consumers of a single process.
///
/// Connection is opened once at startup (retrying until the broker accepts).
/// There is no in-process recovery: when the connection is lost
/// [Self::listen_network_io_failure] resolves and the process is expected
/// to shut down and let its supervisor restart it.
///
#[derive(Clone)]
pub struct RabbitmqConnection {
    connection: Connection,
}

impl RabbitmqConnection {
    #[tracing::instrument(
        name = "RabbitMQ Connection",
        target = "rabbitmq_client::connection",
        skip_all
    )]
    pub async fn new(
        config: RabbitmqConnectionConfig,
        open_connection_args: OpenConnectionArguments,
    ) -> anyhow::Result<Self> {
        tracing::info!("opening connection");
        let connection = retry(
            config.retry_interval,
            |attempt| tracing::info!(attempt, "connecting to broker"),
            |attempt, err| tracing::warn!(attempt, %err, "connecting to broker failed"),
            || Connection::open(&open_connection_args),
        )
        .await;

        tracing::info!("registering callback");
        let callback = RabbitmqConnectionCallback;
        connection.register_callback(callback).await?;

        tracing::info!("connection opened");

        Ok(Self { connection })
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    ///
    /// Resolves when the underlying connection fails.
    ///
    pub async fn listen_network_io_failure(&self) {
        self.connection.listen_network_io_failure().await;
    }

    #[tracing::instrument(
        name = "RabbitMQ Connection",
        target = "rabbitmq_client::connection",
        skip_all
    )]
    pub async fn close(self) {
        tracing::info!("closing connection");
        match self.connection.close().await {
            Ok(()) => tracing::info!("connection closed"),
            Err(err) => tracing::warn!(%err, "closing connection failed"),
        }
    }
}
