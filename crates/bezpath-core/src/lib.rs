pub mod config;
pub mod error;
pub mod traits;

pub use config::PathConfig;
pub use error::{PathError, Result};
