// Engine module - query draft construction logic
// This layer sits between the tag catalog (types) and persistence/execution

pub mod draft;
pub mod error;

pub use draft::QueryDraft;
pub use error::{Error, Result};
