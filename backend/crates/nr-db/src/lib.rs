pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::nurse_repository::NurseRepository;
