use anyhow::anyhow;
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,

    pub rabbitmq_connection_string: String,
    pub rabbitmq_renewals_exchange_name: String,
    pub rabbitmq_retry_interval: Duration,

    /// How often the scheduler runs a scan
    pub scan_interval: Duration,
    /// Watches expiring within this horizon are selected for renewal.
    /// Should exceed the worst case end to end latency of the renewal worker
    pub expiry_lookahead: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("MAILWATCH_SCANNER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("MAILWATCH_SCANNER_LOG_FILENAME")?;
        let bind_address = Self::env_var("MAILWATCH_SCANNER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("MAILWATCH_SCANNER_DB_CONNECTION_STRING")?;
        let rabbitmq_connection_string =
            Self::env_var("MAILWATCH_SCANNER_RABBITMQ_CONNECTION_STRING")?;
        let rabbitmq_renewals_exchange_name =
            Self::env_var("MAILWATCH_SCANNER_RABBITMQ_RENEWALS_EXCHANGE_NAME")?;
        let rabbitmq_retry_interval =
            Self::env_var("MAILWATCH_SCANNER_RABBITMQ_RETRY_INTERVAL")?.parse()?;
        let rabbitmq_retry_interval = Duration::from_secs(rabbitmq_retry_interval);
        let scan_interval = Self::env_var("MAILWATCH_SCANNER_SCAN_INTERVAL")?.parse()?;
        let scan_interval = Duration::from_secs(scan_interval);
        let expiry_lookahead = Self::env_var("MAILWATCH_SCANNER_EXPIRY_LOOKAHEAD")?.parse()?;
        let expiry_lookahead = Duration::from_secs(expiry_lookahead);
        if expiry_lookahead.is_zero() {
            return Err(anyhow!(
                "MAILWATCH_SCANNER_EXPIRY_LOOKAHEAD need to be positive"
            ));
        }

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            rabbitmq_connection_string,
            rabbitmq_renewals_exchange_name,
            rabbitmq_retry_interval,
            scan_interval,
            expiry_lookahead,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
