use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Queue message published by the scanner for one expiring watch
///
#[derive(Debug, Deserialize)]
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

    #[test]
    fn deserialize_scanner_payload() {
        let payload = r#"{
            "watch_id": "6cd0ad82-6f8f-4920-9a4c-e4f1a1b4b4f7",
            "user_id": "2b8a3001-84b4-4e56-8d94-8d78b29f63b9",
            "email": "user@example.com",
            "enqueued_at": "2026-08-30T12:00:00Z"
        }"#;

        let request = serde_json::from_str::<RenewalRequest>(payload).unwrap();

        assert_eq!(
            request.watch_id,
            "6cd0ad82-6f8f-4920-9a4c-e4f1a1b4b4f7".parse::<Uuid>().unwrap()
        );
        assert_eq!(
            request.user_id,
            "2b8a3001-84b4-4e56-8d94-8d78b29f63b9".parse::<Uuid>().unwrap()
        );
        assert_eq!(request.email, "user@example.com");
        assert_eq!(request.enqueued_at.unix_timestamp(), 1788091200);
    }

    #[test]
    fn deserialize_missing_field() {
        let payload = r#"{ "watch_id": "6cd0ad82-6f8f-4920-9a4c-e4f1a1b4b4f7" }"#;

        let parse_result = serde_json::from_str::<RenewalRequest>(payload);

        assert!(parse_result.is_err());
    }
}
