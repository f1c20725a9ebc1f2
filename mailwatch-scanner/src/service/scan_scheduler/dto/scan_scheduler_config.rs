use std::time::Duration;

pub struct ScanSchedulerConfig {
    pub scan_interval: Duration,
}
