use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Watch {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub history_id: Option<String>,
    pub expires_at: OffsetDateTime,
    pub is_active: bool,
}
