use super::{dto::Watch, error::Error, WatchesRepository};
use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

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
    async fn find_active(&self, id: Uuid) -> Result<Option<Watch>, Error> {
        let watch = sqlx::query_as::<_, Watch>(
            "SELECT id, user_id, email, history_id, expires_at, is_active \
             FROM gmail_watches \
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(watch)
    }

    async fn update_renewal(
        &self,
        id: Uuid,
        history_id: &str,
        expires_at: OffsetDateTime,
        renewed_at: OffsetDateTime,
    ) -> Result<(), Error> {
        let result = sqlx::query(
            "UPDATE gmail_watches \
             SET history_id = $2, expires_at = $3, renewed_at = $4 \
             WHERE id = $1 AND is_active AND expires_at < $3",
        )
        .bind(id)
        .bind(history_id)
        .bind(expires_at)
        .bind(renewed_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NoRowUpdated);
        }

        Ok(())
    }
}
