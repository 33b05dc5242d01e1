pub mod dispatcher;
pub mod error;
pub mod ops;
pub mod view;

pub use dispatcher::{Dispatcher, ResultTab, RunToken};
pub use error::{Error, Result};
pub use view::{PercentageRow, TabView};
