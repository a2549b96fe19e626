use time::Date;

use crate::{add_days, monday_of};

pub const DEFAULT_CALENDAR_WEEKS: u32 = 6;

/// A Monday to Sunday week inside a [`CalendarWindow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: Date,
}

impl Week {
    pub fn days(&self) -> [Date; 7] {
        std::array::from_fn(|i| add_days(self.start, i as i64))
    }
}

/// Monday-anchored span of whole weeks used to lay out a date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    pub start: Date,
    pub weeks: u32,
}

impl CalendarWindow {
    /// Six weeks from the Monday of `today`, stretched so that
    /// `last_delivery_date` is visible when it falls later.
    pub fn new(today: Date, last_delivery_date: Option<Date>) -> Self {
        Self::with_min_weeks(today, last_delivery_date, DEFAULT_CALENDAR_WEEKS)
    }

    pub fn with_min_weeks(today: Date, last_delivery_date: Option<Date>, min_weeks: u32) -> Self {
        let start = monday_of(today);
        let mut weeks = min_weeks.max(1);

        if let Some(last) = last_delivery_date {
            let last_visible = add_days(start, i64::from(weeks) * 7 - 1);

            if last > last_visible {
                let day_count = (monday_of(last) - start).whole_days().unsigned_abs();
                // Both ends are Mondays; the extra week is the one holding `last`.
                weeks = day_count.div_ceil(7) as u32 + 1;

                tracing::debug!(
                    %today,
                    %last,
                    weeks,
                    "calendar window extended to last delivery"
                );
            }
        }

        Self { start, weeks }
    }

    pub fn end(&self) -> Date {
        add_days(self.start, self.len() as i64 - 1)
    }

    pub fn len(&self) -> usize {
        self.weeks as usize * 7
    }

    pub fn is_empty(&self) -> bool {
        self.weeks == 0
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end()
    }

    pub fn dates(&self) -> Vec<Date> {
        (0..self.len() as i64)
            .map(|offset| add_days(self.start, offset))
            .collect()
    }

    pub fn week_rows(&self) -> Vec<Week> {
        (0..i64::from(self.weeks))
            .map(|i| {
                Week {
                    start: add_days(self.start, i * 7),
                }
            })
            .collect()
    }
}

/// Dates of the calendar window for `today` and an optional last delivery.
pub fn build_calendar_window(today: Date, last_delivery_date: Option<Date>) -> Vec<Date> {
    CalendarWindow::new(today, last_delivery_date).dates()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Weekday;
    use time::macros::date;

    #[test]
    fn test_default_window_from_wednesday() {
        let dates = build_calendar_window(date!(2025-01-22), None);

        assert_eq!(dates.len(), 42);
        assert_eq!(dates[0], date!(2025-01-20));
        assert_eq!(dates[41], date!(2025-03-02));
    }

    #[test]
    fn test_default_window_from_sunday() {
        let window = CalendarWindow::new(date!(2025-01-26), None);

        assert_eq!(window.start, date!(2025-01-20));
        assert_eq!(window.weeks, 6);
        assert!(window.contains(date!(2025-01-26)));
    }

    #[test]
    fn test_last_delivery_inside_default_span() {
        // Day 41 of the span is the last date still covered
        let window = CalendarWindow::new(date!(2025-01-22), Some(date!(2025-03-02)));

        assert_eq!(window.weeks, 6);
    }

    #[test]
    fn test_extends_to_last_delivery() {
        // Monday 2025-03-03 is exactly six weeks after 2025-01-20
        let window = CalendarWindow::new(date!(2025-01-22), Some(date!(2025-03-03)));

        assert_eq!(window.weeks, 7);
        assert_eq!(window.end(), date!(2025-03-09));

        let window = CalendarWindow::new(date!(2025-01-22), Some(date!(2025-03-16)));

        assert_eq!(window.weeks, 8);
        assert!(window.contains(date!(2025-03-16)));
    }

    #[test]
    fn test_last_delivery_before_today_keeps_default() {
        let window = CalendarWindow::new(date!(2025-01-22), Some(date!(2025-01-01)));

        assert_eq!(window.weeks, 6);
    }

    #[test]
    fn test_week_rows_are_monday_to_sunday() {
        let window = CalendarWindow::new(date!(2025-12-03), None);
        let rows = window.week_rows();

        assert_eq!(rows.len(), 6);
        for row in &rows {
            assert_eq!(row.start.weekday(), Weekday::Monday);
            assert_eq!(row.days()[6].weekday(), Weekday::Sunday);
        }
        assert_eq!(rows[0].start, date!(2025-12-01));
    }

    #[test]
    fn test_min_weeks() {
        let window = CalendarWindow::with_min_weeks(date!(2025-12-03), None, 2);

        assert_eq!(window.dates().len(), 14);
        assert!(!window.is_empty());
    }
}
