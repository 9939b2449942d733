use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] nr_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] nr_db::DbError),

    #[error("Store error: {0}")]
    Store(#[from] nr_core::StoreError),

    #[error("Service setup error: {0}")]
    Service(#[from] nr_auth::ServiceError),

    #[error("Seed error: {message}")]
    Seed { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
