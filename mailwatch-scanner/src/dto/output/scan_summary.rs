use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ScanSummary {
    /// Watches whose expiry fell within the lookahead horizon
    pub watches_due: usize,
    /// Renewal requests published; smaller than `watches_due`
    /// when individual publishes failed and were skipped
    pub published: usize,
}
