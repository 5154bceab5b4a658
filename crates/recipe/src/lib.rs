mod catalog;
mod error;
mod types;

pub use catalog::*;
pub use error::*;
pub use types::*;
