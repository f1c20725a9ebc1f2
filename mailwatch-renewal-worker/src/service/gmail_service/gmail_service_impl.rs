use super::{dto::WatchRenewal, error::Error, GmailService, GmailServiceConfig};
use crate::repository::Credentials;
use async_trait::async_trait;
use oauth2::{
    basic::{BasicClient, BasicErrorResponseType},
    reqwest::async_http_client,
    AuthUrl, ClientId, ClientSecret, RefreshToken, RequestTokenError, TokenResponse, TokenUrl,
};
use serde::Deserialize;
use time::OffsetDateTime;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GMAIL_WATCH_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me/watch";

pub struct GmailServiceImpl {
    oauth_client: BasicClient,
    http_client: reqwest::Client,
    pubsub_topic: Option<String>,
}

/// `users.watch` response; `expiration` is epoch milliseconds as a string
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WatchResponse {
    history_id: String,
    expiration: String,
}

impl GmailServiceImpl {
    pub fn new(config: GmailServiceConfig) -> anyhow::Result<Self> {
        let oauth_client = BasicClient::new(
            ClientId::new(config.client_id),
            Some(ClientSecret::new(config.client_secret)),
            AuthUrl::new(GOOGLE_AUTH_URL.to_string())?,
            Some(TokenUrl::new(GOOGLE_TOKEN_URL.to_string())?),
        );
        let http_client = reqwest::Client::new();

        Ok(Self {
            oauth_client,
            http_client,
            pubsub_topic: config.pubsub_topic,
        })
    }

    async fn fetch_access_token(&self, refresh_token: &str) -> Result<String, Error> {
        let token = self
            .oauth_client
            .exchange_refresh_token(&RefreshToken::new(refresh_token.to_string()))
            .request_async(async_http_client)
            .await
            .map_err(|err| match &err {
                RequestTokenError::ServerResponse(response)
                    if *response.error() == BasicErrorResponseType::InvalidGrant =>
                {
                    Error::Unauthorized(response.to_string())
                }
                _ => Error::TokenExchange(err.to_string()),
            })?;

        Ok(token.access_token().secret().clone())
    }

    fn watch_request_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "labelIds": ["INBOX"],
            "labelFilterAction": "include",
        });
        if let Some(topic) = &self.pubsub_topic {
            body["topicName"] = serde_json::Value::String(topic.clone());
        }

        body
    }
}

#[async_trait]
impl GmailService for GmailServiceImpl {
    async fn renew_watch(&self, credentials: &Credentials) -> Result<WatchRenewal, Error> {
        tracing::debug!("exchanging refresh token");
        let access_token = self.fetch_access_token(&credentials.refresh_token).await?;

        tracing::debug!("calling users.watch");
        let response = self
            .http_client
            .post(GMAIL_WATCH_URL)
            .bearer_auth(access_token)
            .json(&self.watch_request_body())
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Unauthorized(format!("gmail api returned {status}")));
        }
        if !status.is_success() {
            return Err(Error::WatchRequest(status));
        }

        let watch_response = response.json::<WatchResponse>().await?;

        let expiration_ms = watch_response
            .expiration
            .parse::<i64>()
            .map_err(|_| Error::InvalidResponse("expiration is not an integer"))?;
        let expires_at = OffsetDateTime::from_unix_timestamp_nanos(expiration_ms as i128 * 1_000_000)
            .map_err(|_| Error::InvalidResponse("expiration out of range"))?;

        Ok(WatchRenewal {
            history_id: watch_response.history_id,
            expires_at,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn service(pubsub_topic: Option<String>) -> GmailServiceImpl {
        let config = GmailServiceConfig {
            client_id: "client id".to_string(),
            client_secret: "client secret".to_string(),
            pubsub_topic,
        };
        GmailServiceImpl::new(config).unwrap()
    }

    #[test]
    fn watch_request_body_with_topic() {
        let topic = "projects/my-project/topics/mail-events";
        let service = service(Some(topic.to_string()));

        let body = service.watch_request_body();

        assert_eq!(
            body,
            serde_json::json!({
                "labelIds": ["INBOX"],
                "labelFilterAction": "include",
                "topicName": topic,
            })
        );
    }

    #[test]
    fn watch_request_body_without_topic() {
        let service = service(None);

        let body = service.watch_request_body();

        assert_eq!(
            body,
            serde_json::json!({
                "labelIds": ["INBOX"],
                "labelFilterAction": "include",
            })
        );
    }

    #[test]
    fn watch_response_expiration_to_offset_date_time() {
        let payload = r#"{ "historyId": "1234567", "expiration": "1788091200000" }"#;

        let response = serde_json::from_str::<WatchResponse>(payload).unwrap();
        let expiration_ms = response.expiration.parse::<i64>().unwrap();
        let expires_at =
            OffsetDateTime::from_unix_timestamp_nanos(expiration_ms as i128 * 1_000_000).unwrap();

        assert_eq!(response.history_id, "1234567");
        assert_eq!(expires_at.unix_timestamp(), 1788091200);
    }
}
