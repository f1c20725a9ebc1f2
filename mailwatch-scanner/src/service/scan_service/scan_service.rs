use crate::{dto::output, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScanService: Send + Sync {
    ///
    /// Select all active watches expiring within the lookahead horizon
    /// and publish one renewal request per watch.
    ///
    /// Publish failures of individual messages are skipped, the affected
    /// watches are naturally re-selected on the next scan.
    ///
    /// ### Returns
    /// [output::ScanSummary] with selected and published counts
    ///
    /// ### Errors
    /// - [Error::Database] when selecting expiring watches fails.
    ///   Nothing is published in that case
    ///
    async fn scan(&self) -> Result<output::ScanSummary, Error>;
}
