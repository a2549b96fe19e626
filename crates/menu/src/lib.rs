mod catalog;
mod plan;

pub use catalog::*;
pub use plan::*;
