use super::{dto::Credentials, error::Error, CredentialsRepository};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CredentialsRepositoryImpl {
    pool: PgPool,
}

impl CredentialsRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialsRepository for CredentialsRepositoryImpl {
    async fn find(&self, user_id: Uuid) -> Result<Option<Credentials>, Error> {
        let credentials = sqlx::query_as::<_, Credentials>(
            "SELECT user_id, access_token, refresh_token \
             FROM gmail_credentials \
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }
}
