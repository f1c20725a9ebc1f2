#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("postgres error: {0}")]
    Postgres(#[from] sqlx::Error),
}
