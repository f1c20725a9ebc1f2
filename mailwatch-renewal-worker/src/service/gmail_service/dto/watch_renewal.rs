use time::OffsetDateTime;

///
/// Result of a successful `users.watch` call
///
#[derive(Debug, Clone)]
pub struct WatchRenewal {
    /// Opaque mailbox history handle returned by Gmail
    pub history_id: String,
    pub expires_at: OffsetDateTime,
}
