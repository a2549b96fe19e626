mod menu;
mod order;
mod schedule;

pub use menu::*;
pub use order::*;
pub use schedule::*;

use serde::Serialize;
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO `YYYY-MM-DD` date argument.
pub fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| format!("invalid date `{value}`: {e}"))
}

/// Today's civil date in UTC. Only the command layer reads the clock.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
