use anyhow::anyhow;
use std::time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub db_connection_string: String,

    pub rabbitmq_connection_string: String,
    pub rabbitmq_renewals_exchange_name: String,
    pub rabbitmq_renewals_queue_name: String,
    pub rabbitmq_dead_letter_exchange_name: String,
    pub rabbitmq_dead_letter_queue_name: String,
    pub rabbitmq_retry_interval: Duration,

    pub google_client_id: String,
    pub google_client_secret: String,
    /// Cloud Pub/Sub topic Gmail pushes notifications to.
    /// Without it watches are renewed for expiry monitoring only
    pub gmail_pubsub_topic: Option<String>,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("MAILWATCH_RENEWAL_WORKER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("MAILWATCH_RENEWAL_WORKER_LOG_FILENAME")?;
        let db_connection_string = Self::env_var("MAILWATCH_RENEWAL_WORKER_DB_CONNECTION_STRING")?;
        let rabbitmq_connection_string =
            Self::env_var("MAILWATCH_RENEWAL_WORKER_RABBITMQ_CONNECTION_STRING")?;
        let rabbitmq_renewals_exchange_name =
            Self::env_var("MAILWATCH_RENEWAL_WORKER_RABBITMQ_RENEWALS_EXCHANGE_NAME")?;
        let rabbitmq_renewals_queue_name =
            Self::env_var("MAILWATCH_RENEWAL_WORKER_RABBITMQ_RENEWALS_QUEUE_NAME")?;
        let rabbitmq_dead_letter_exchange_name =
            Self::env_var("MAILWATCH_RENEWAL_WORKER_RABBITMQ_DEAD_LETTER_EXCHANGE_NAME")?;
        let rabbitmq_dead_letter_queue_name =
            Self::env_var("MAILWATCH_RENEWAL_WORKER_RABBITMQ_DEAD_LETTER_QUEUE_NAME")?;
        let rabbitmq_retry_interval =
            Self::env_var("MAILWATCH_RENEWAL_WORKER_RABBITMQ_RETRY_INTERVAL")?.parse()?;
        let rabbitmq_retry_interval = Duration::from_secs(rabbitmq_retry_interval);
        let google_client_id = Self::env_var("MAILWATCH_RENEWAL_WORKER_GOOGLE_CLIENT_ID")?;
        let google_client_secret = Self::env_var("MAILWATCH_RENEWAL_WORKER_GOOGLE_CLIENT_SECRET")?;
        let gmail_pubsub_topic = std::env::var("MAILWATCH_RENEWAL_WORKER_GMAIL_PUBSUB_TOPIC").ok();

        Ok(Self {
            log_directory,
            log_filename,
            db_connection_string,
            rabbitmq_connection_string,
            rabbitmq_renewals_exchange_name,
            rabbitmq_renewals_queue_name,
            rabbitmq_dead_letter_exchange_name,
            rabbitmq_dead_letter_queue_name,
            rabbitmq_retry_interval,
            google_client_id,
            google_client_secret,
            gmail_pubsub_topic,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
