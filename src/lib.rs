pub mod config;
pub mod dashboard;
pub mod error;
pub mod manager;
pub mod storage;
pub mod upload;

mod types;

pub use error::{AppError, Result, StorageError, ValidationError};
pub use types::*;
