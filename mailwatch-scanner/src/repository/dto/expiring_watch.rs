use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct ExpiringWatch {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub expires_at: OffsetDateTime,
}
