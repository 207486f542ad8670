pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, BackendKind};
pub use error::QuerySumError;
pub type Result<T> = std::result::Result<T, QuerySumError>;
