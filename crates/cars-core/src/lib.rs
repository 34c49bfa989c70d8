pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use config::TransformConfig;
pub use error::{Result, TransformError};
pub use pipeline::{process, TransformSummary};
