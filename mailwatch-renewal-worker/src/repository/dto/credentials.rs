use sqlx::FromRow;
use uuid::Uuid;

///
/// OAuth2 tokens of one user, provisioned by the application
/// that established the watch
///
#[derive(Debug, Clone, FromRow)]
pub struct Credentials {
    pub user_id: Uuid,
    pub access_token: String,
    pub refresh_token: String,
}
