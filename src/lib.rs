pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod api;
pub mod parser;
pub mod database;
pub mod analyzer;
pub mod server;

pub use config::Config;
pub use error::AppError;
pub use models::*;
pub use analyzer::WordClassifier;
