use std::time::Duration;

pub struct ScanServiceConfig {
    /// Watches expiring within this horizon are due for renewal
    pub expiry_lookahead: Duration,
}
