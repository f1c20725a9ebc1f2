#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no row updated")]
    NoRowUpdated,

    #[error("postgres error: {0}")]
    Postgres(#[from] sqlx::Error),
}
