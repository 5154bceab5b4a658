mod outcome;
pub mod sampler;
mod selector;

pub use outcome::*;
pub use selector::*;
