use time::{Date, Duration, Weekday};

/// Returns `date` shifted by `days` calendar days (negative moves backwards).
///
/// Saturates at the bounds of [`Date`] instead of panicking.
pub fn add_days(date: Date, days: i64) -> Date {
    date.saturating_add(Duration::days(days))
}

/// Shifts `date` by `days`, or `None` when the result leaves the range of [`Date`].
pub fn checked_add_days(date: Date, days: i64) -> Option<Date> {
    date.checked_add(Duration::days(days))
}

/// Day of week as an index where Sunday is 0 and Saturday is 6
pub fn weekday_index(date: Date) -> u8 {
    date.weekday().number_days_from_sunday()
}

pub fn same_day(a: Date, b: Date) -> bool {
    a == b
}

/// Returns the Monday of the week containing `date`.
///
/// Weeks run Monday to Sunday, so a Sunday maps back six days.
pub fn monday_of(date: Date) -> Date {
    let days_since_monday = match date.weekday() {
        Weekday::Monday => 0,
        Weekday::Tuesday => 1,
        Weekday::Wednesday => 2,
        Weekday::Thursday => 3,
        Weekday::Friday => 4,
        Weekday::Saturday => 5,
        Weekday::Sunday => 6,
    };

    add_days(date, -days_since_monday)
}
