mod error;
mod order;
mod pricing;
mod repository;

pub use error::*;
pub use order::*;
pub use pricing::*;
pub use repository::*;
