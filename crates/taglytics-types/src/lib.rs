pub mod project;
pub mod query;
pub mod wire;

pub use project::*;
pub use query::*;
pub use wire::*;
