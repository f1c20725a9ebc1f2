use std::time::Duration;

#[derive(Clone)]
pub struct RabbitmqConnectionConfig {
    /// Interval between attempts to open the connection at startup
    pub retry_interval: Duration,
}
