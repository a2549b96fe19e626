mod calendar;
mod date;
mod delivery;
mod eligibility;
mod error;
mod payment;

pub use calendar::*;
pub use date::*;
pub use delivery::*;
pub use eligibility::*;
pub use error::*;
pub use payment::*;
