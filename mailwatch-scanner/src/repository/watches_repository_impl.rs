use super::{dto::ExpiringWatch, error::Error, WatchesRepository};
use axum::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;

pub struct WatchesRepositoryImpl {
    pool: PgPool,
}

impl WatchesRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WatchesRepository for WatchesRepositoryImpl {
    async fn find_expiring(
        &self,
        expires_before: OffsetDateTime,
    ) -> Result<Vec<ExpiringWatch>, Error> {
        let watches = sqlx::query_as::<_, ExpiringWatch>(
            "SELECT id, user_id, email, expires_at \
             FROM gmail_watches \
             WHERE is_active AND expires_at <= $1 \
             ORDER BY expires_at ASC",
        )
        .bind(expires_before)
        .fetch_all(&self.pool)
        .await?;

        Ok(watches)
    }
}
