pub struct GmailServiceConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Cloud Pub/Sub topic passed to the watch request when present
    pub pubsub_topic: Option<String>,
}
