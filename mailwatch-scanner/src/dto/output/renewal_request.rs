use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Queue message instructing the renewal worker to renew one watch.
/// Carries identifiers only, the worker looks the watch up on its own.
///
#[derive(Debug, Serialize)]
pub struct RenewalRequest {
    pub watch_id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub enqueued_at: OffsetDateTime,
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn serialize_wire_format() {
        let request = RenewalRequest {
            watch_id: "6cd0ad82-6f8f-4920-9a4c-e4f1a1b4b4f7".parse().unwrap(),
            user_id: "2b8a3001-84b4-4e56-8d94-8d78b29f63b9".parse().unwrap(),
            email: "user@example.com".to_string(),
            enqueued_at: datetime!(2026-08-30 12:00:00 UTC),
        };

        let encoded = serde_json::to_value(&request).unwrap();

        assert_eq!(
            encoded,
            serde_json::json!({
                "watch_id": "6cd0ad82-6f8f-4920-9a4c-e4f1a1b4b4f7",
                "user_id": "2b8a3001-84b4-4e56-8d94-8d78b29f63b9",
                "email": "user@example.com",
                "enqueued_at": "2026-08-30T12:00:00Z",
            })
        );
    }
}
