use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, Weekday};

use crate::{Result, ValidationError, add_days, checked_add_days};

/// How often a subscription is delivered
#[derive(
    EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
)]
pub enum Frequency {
    /// Three deliveries a week on a fixed weekday triplet
    #[default]
    #[strum(to_string = "three-week", serialize = "주3회")]
    ThreeWeek,
    /// Every day except Sunday
    #[strum(to_string = "daily", serialize = "매일배송")]
    Daily,
}

impl Frequency {
    /// Parses a frequency label, reporting unknown labels as a validation error.
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value.trim())
            .map_err(|_| ValidationError::InvalidFrequency(value.to_owned()))
    }
}

/// Subscription length
#[derive(EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Period {
    #[strum(to_string = "1w", serialize = "1주")]
    OneWeek,
    #[strum(to_string = "2w", serialize = "2주")]
    TwoWeeks,
    #[strum(to_string = "4w", serialize = "4주")]
    FourWeeks,
}

impl Period {
    pub fn weeks(self) -> u32 {
        match self {
            Period::OneWeek => 1,
            Period::TwoWeeks => 2,
            Period::FourWeeks => 4,
        }
    }

    pub fn days(self) -> i64 {
        i64::from(self.weeks()) * 7
    }
}

impl TryFrom<u32> for Period {
    type Error = ValidationError;

    fn try_from(weeks: u32) -> Result<Self> {
        match weeks {
            1 => Ok(Period::OneWeek),
            2 => Ok(Period::TwoWeeks),
            4 => Ok(Period::FourWeeks),
            other => Err(ValidationError::InvalidWeeks(other)),
        }
    }
}

/// Weekday triplet used by [`Frequency::ThreeWeek`] schedules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryDays {
    MonWedFri,
    TueThuSat,
}

impl DeliveryDays {
    /// Picks the triplet containing `first`. Sunday belongs to neither.
    pub fn for_start(first: Weekday) -> Option<Self> {
        match first {
            Weekday::Monday | Weekday::Wednesday | Weekday::Friday => Some(Self::MonWedFri),
            Weekday::Tuesday | Weekday::Thursday | Weekday::Saturday => Some(Self::TueThuSat),
            Weekday::Sunday => None,
        }
    }

    pub fn weekdays(self) -> [Weekday; 3] {
        match self {
            Self::MonWedFri => [Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
            Self::TueThuSat => [Weekday::Tuesday, Weekday::Thursday, Weekday::Saturday],
        }
    }

    pub fn contains(self, weekday: Weekday) -> bool {
        self.weekdays().contains(&weekday)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryScheduleEntry {
    pub sequence: u32,
    pub delivery_date: Date,
    /// Always the day before `delivery_date`
    pub production_date: Date,
}

impl DeliveryScheduleEntry {
    pub fn new(sequence: u32, delivery_date: Date) -> Self {
        Self {
            sequence,
            delivery_date,
            production_date: add_days(delivery_date, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub start_date: Date,
    pub period: Period,
    pub frequency: Frequency,
}

impl SubscriptionRequest {
    pub fn new(start_date: Date, weeks: u32, frequency: Frequency) -> Result<Self> {
        Ok(Self {
            start_date,
            period: Period::try_from(weeks)?,
            frequency,
        })
    }

    /// Builds the ordered delivery schedule.
    ///
    /// Three-week schedules scan forward from the start date and keep the
    /// days that fall on the start date's weekday triplet until `weeks * 3`
    /// deliveries are collected. Daily schedules cover `weeks * 7` days and
    /// skip Sundays.
    ///
    /// Fails without emitting anything when the production day before the
    /// start or the last day of the period does not exist.
    pub fn delivery_schedule(&self) -> Result<Vec<DeliveryScheduleEntry>> {
        let dates = match self.frequency {
            Frequency::ThreeWeek => {
                let first = self.start_date.weekday();
                let days = DeliveryDays::for_start(first)
                    .ok_or(ValidationError::InvalidStartWeekday(first))?;
                self.check_range()?;
                let target = self.period.weeks() as usize * 3;

                // Any seven consecutive days hold each weekday of the triplet
                // exactly once, so the period always yields the target count.
                let mut dates = self.scan(|date| days.contains(date.weekday()));
                dates.truncate(target);
                dates
            }
            Frequency::Daily => {
                self.check_range()?;
                self.scan(|date| date.weekday() != Weekday::Sunday)
            }
        };

        let entries = dates
            .into_iter()
            .zip(1..)
            .map(|(date, sequence)| DeliveryScheduleEntry::new(sequence, date))
            .collect::<Vec<_>>();

        tracing::debug!(
            start_date = %self.start_date,
            period = %self.period,
            frequency = %self.frequency,
            deliveries = entries.len(),
            "delivery schedule generated"
        );

        Ok(entries)
    }

    fn check_range(&self) -> Result<()> {
        let before = checked_add_days(self.start_date, -1);
        let last = checked_add_days(self.start_date, self.period.days() - 1);

        match (before, last) {
            (Some(_), Some(_)) => Ok(()),
            _ => Err(ValidationError::OutOfRange(self.start_date)),
        }
    }

    // Callers check the range first, so no offset saturates.
    fn scan(&self, keep: impl Fn(&Date) -> bool) -> Vec<Date> {
        (0..self.period.days())
            .map(|offset| add_days(self.start_date, offset))
            .filter(keep)
            .collect()
    }
}

/// Generates the delivery schedule for a subscription.
pub fn generate_delivery_schedule(
    start_date: Date,
    weeks: u32,
    frequency: Frequency,
) -> Result<Vec<DeliveryScheduleEntry>> {
    SubscriptionRequest::new(start_date, weeks, frequency)?.delivery_schedule()
}

/// Last delivery date of a schedule, the anchor for payment attempts
pub fn last_delivery_date(entries: &[DeliveryScheduleEntry]) -> Option<Date> {
    entries.last().map(|entry| entry.delivery_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn dates(entries: &[DeliveryScheduleEntry]) -> Vec<Date> {
        entries.iter().map(|e| e.delivery_date).collect()
    }

    #[test]
    fn test_three_week_monday_one_week() {
        let entries = generate_delivery_schedule(date!(2025-12-01), 1, Frequency::ThreeWeek)
            .expect("valid request");

        assert_eq!(
            entries,
            vec![
                DeliveryScheduleEntry {
                    sequence: 1,
                    delivery_date: date!(2025-12-01),
                    production_date: date!(2025-11-30),
                },
                DeliveryScheduleEntry {
                    sequence: 2,
                    delivery_date: date!(2025-12-03),
                    production_date: date!(2025-12-02),
                },
                DeliveryScheduleEntry {
                    sequence: 3,
                    delivery_date: date!(2025-12-05),
                    production_date: date!(2025-12-04),
                },
            ]
        );
    }

    #[test]
    fn test_three_week_tuesday_two_weeks() {
        let entries = generate_delivery_schedule(date!(2025-12-02), 2, Frequency::ThreeWeek)
            .expect("valid request");

        assert_eq!(
            dates(&entries),
            vec![
                date!(2025-12-02),
                date!(2025-12-04),
                date!(2025-12-06),
                date!(2025-12-09),
                date!(2025-12-11),
                date!(2025-12-13),
            ]
        );
        assert_eq!(
            entries.iter().map(|e| e.sequence).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_three_week_friday_wraps_into_next_week() {
        let entries = generate_delivery_schedule(date!(2025-12-05), 1, Frequency::ThreeWeek)
            .expect("valid request");

        assert_eq!(
            dates(&entries),
            vec![date!(2025-12-05), date!(2025-12-08), date!(2025-12-10)]
        );
    }

    #[test]
    fn test_three_week_saturday_uses_tue_thu_sat() {
        let entries = generate_delivery_schedule(date!(2025-12-06), 1, Frequency::ThreeWeek)
            .expect("valid request");

        assert_eq!(
            dates(&entries),
            vec![date!(2025-12-06), date!(2025-12-09), date!(2025-12-11)]
        );
    }

    #[test]
    fn test_three_week_rejects_sunday_start() {
        let result = generate_delivery_schedule(date!(2025-11-30), 1, Frequency::ThreeWeek);

        assert_eq!(
            result,
            Err(ValidationError::InvalidStartWeekday(Weekday::Sunday))
        );
    }

    #[test]
    fn test_daily_allows_sunday_start_but_skips_it() {
        let entries = generate_delivery_schedule(date!(2025-11-30), 1, Frequency::Daily)
            .expect("valid request");

        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].delivery_date, date!(2025-12-01));
    }

    #[test]
    fn test_daily_monday_one_week() {
        let entries = generate_delivery_schedule(date!(2025-12-01), 1, Frequency::Daily)
            .expect("valid request");

        assert_eq!(
            dates(&entries),
            vec![
                date!(2025-12-01),
                date!(2025-12-02),
                date!(2025-12-03),
                date!(2025-12-04),
                date!(2025-12-05),
                date!(2025-12-06),
            ]
        );
    }

    #[test]
    fn test_invalid_weeks() {
        for weeks in [0, 3, 5, 8] {
            assert_eq!(
                generate_delivery_schedule(date!(2025-12-01), weeks, Frequency::Daily),
                Err(ValidationError::InvalidWeeks(weeks))
            );
        }
    }

    #[test]
    fn test_invalid_weeks_checked_before_weekday() {
        assert_eq!(
            generate_delivery_schedule(date!(2025-11-30), 3, Frequency::ThreeWeek),
            Err(ValidationError::InvalidWeeks(3))
        );
    }

    #[test]
    fn test_rejects_schedules_past_the_date_range() {
        // 9999-12-29 is a Wednesday; its week runs past Date::MAX
        assert_eq!(
            generate_delivery_schedule(date!(9999-12-29), 1, Frequency::ThreeWeek),
            Err(ValidationError::OutOfRange(date!(9999-12-29)))
        );
        assert_eq!(
            generate_delivery_schedule(Date::MAX, 1, Frequency::Daily),
            Err(ValidationError::OutOfRange(Date::MAX))
        );
        // No production day exists before Date::MIN
        assert_eq!(
            generate_delivery_schedule(Date::MIN, 1, Frequency::Daily),
            Err(ValidationError::OutOfRange(Date::MIN))
        );
    }

    #[test]
    fn test_last_full_week_before_date_range_end() {
        // Monday 9999-12-20 through Sunday 9999-12-26 still leaves room
        let entries = generate_delivery_schedule(date!(9999-12-20), 1, Frequency::ThreeWeek)
            .expect("valid request");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].delivery_date, date!(9999-12-24));
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!(Frequency::parse("three-week"), Ok(Frequency::ThreeWeek));
        assert_eq!(Frequency::parse("주3회"), Ok(Frequency::ThreeWeek));
        assert_eq!(Frequency::parse("daily"), Ok(Frequency::Daily));
        assert_eq!(Frequency::parse("매일배송"), Ok(Frequency::Daily));
        assert_eq!(
            Frequency::parse("weekly"),
            Err(ValidationError::InvalidFrequency("weekly".to_owned()))
        );
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(Period::OneWeek.to_string(), "1w");
        assert_eq!("4주".parse::<Period>().ok(), Some(Period::FourWeeks));
        assert_eq!(Period::try_from(2), Ok(Period::TwoWeeks));
    }

    #[test]
    fn test_last_delivery_date() {
        let entries = generate_delivery_schedule(date!(2025-12-01), 1, Frequency::ThreeWeek)
            .expect("valid request");

        assert_eq!(last_delivery_date(&entries), Some(date!(2025-12-05)));
        assert_eq!(last_delivery_date(&[]), None);
    }
}
