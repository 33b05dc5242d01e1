pub mod db;
pub mod error;

pub use db::QueryStore;
pub use error::{Error, Result};
