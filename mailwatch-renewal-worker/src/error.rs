use crate::{repository, service::gmail_service};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("watch not exist")]
    WatchNotExist,

    #[error("credentials not exist")]
    CredentialsNotExist,

    #[error("malformed renewal request: {0}")]
    MalformedMessage(#[from] serde_json::Error),

    #[error("gmail error: {0}")]
    Gmail(#[from] gmail_service::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

///
/// What the consumer should do with the message that caused an error
///
#[derive(Debug, PartialEq, Eq)]
pub enum Recovery {
    /// Retrying cannot help, acknowledge and drop
    Drop,
    /// Transient failure, let the broker redeliver
    Retry,
    /// Permanent failure, route to the dead letter exchange
    DeadLetter,
}

impl Error {
    pub fn recovery(&self) -> Recovery {
        match self {
            // The watch was deleted or deactivated after the scan
            Error::WatchNotExist => Recovery::Drop,
            // Poison message, redelivery would fail the same way
            Error::MalformedMessage(_) => Recovery::DeadLetter,
            // Credentials are provisioned externally, keep the message
            // for inspection instead of retrying indefinitely
            Error::CredentialsNotExist => Recovery::DeadLetter,
            Error::Gmail(err) if err.is_permanent() => Recovery::DeadLetter,
            Error::Gmail(_) => Recovery::Retry,
            Error::Database(_) => Recovery::Retry,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::input;

    fn malformed_message_error() -> Error {
        let parse_error = serde_json::from_str::<input::RenewalRequest>("{}").unwrap_err();
        Error::MalformedMessage(parse_error)
    }

    #[test]
    fn watch_not_exist_is_dropped() {
        assert_eq!(Error::WatchNotExist.recovery(), Recovery::Drop);
    }

    #[test]
    fn malformed_message_is_dead_lettered() {
        assert_eq!(malformed_message_error().recovery(), Recovery::DeadLetter);
    }

    #[test]
    fn missing_credentials_are_dead_lettered() {
        assert_eq!(Error::CredentialsNotExist.recovery(), Recovery::DeadLetter);
    }

    #[test]
    fn rejected_credentials_are_dead_lettered() {
        let error = Error::Gmail(gmail_service::Error::Unauthorized(
            "invalid_grant".to_string(),
        ));

        assert_eq!(error.recovery(), Recovery::DeadLetter);
    }

    #[test]
    fn gmail_server_error_is_retried() {
        let error = Error::Gmail(gmail_service::Error::WatchRequest(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
        ));

        assert_eq!(error.recovery(), Recovery::Retry);
    }

    #[test]
    fn database_error_is_retried() {
        let error = Error::Database(repository::Error::Postgres(sqlx::Error::PoolClosed));

        assert_eq!(error.recovery(), Recovery::Retry);
    }
}
