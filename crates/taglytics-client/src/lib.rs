pub mod error;
pub mod http;

pub use error::{Error, Result};
pub use http::AnalysisClient;
