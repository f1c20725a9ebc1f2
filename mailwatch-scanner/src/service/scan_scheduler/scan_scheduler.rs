use super::ScanSchedulerConfig;
use crate::service::scan_service::ScanService;
use std::sync::Arc;
use tokio::{
    sync::Notify,
    time::{interval, Interval, MissedTickBehavior},
};

///
/// Periodic trigger of the scan service.
/// Replaces an external cron scheduler with an in-process interval task.
///
pub struct ScanScheduler {
    scan_service: Arc<dyn ScanService>,

    interval: Interval,
}

impl ScanScheduler {
    pub fn new(config: ScanSchedulerConfig, scan_service: Arc<dyn ScanService>) -> Self {
        let mut interval = interval(config.scan_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            scan_service,
            interval,
        }
    }

    #[tracing::instrument(name = "Scan Scheduler", skip_all)]
    pub async fn run(mut self, close_notify: Arc<Notify>) {
        tokio::select! {
            biased;

            // Wait for signal to close
            _ = close_notify.notified() => {},

            // Run scans periodically
            _ = async { loop {
                self.interval.tick().await;

                match self.scan_service.scan().await {
                    Ok(summary) => tracing::info!(
                        watches_due = summary.watches_due,
                        published = summary.published,
                        "scheduled scan finished"
                    ),
                    // Scan is retried on the next tick, nothing to clean up
                    Err(err) => tracing::warn!(%err, "scheduled scan failed"),
                }
            }} => {}
        }
    }
}
