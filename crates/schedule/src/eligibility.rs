use time::{Date, Weekday};

use crate::add_days;

pub const DEFAULT_MIN_LEAD_DAYS: u16 = 2;
pub const DEFAULT_MAX_LEAD_DAYS: u16 = 21;

/// Why a candidate first-delivery date cannot be chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Ineligibility {
    #[error("no deliveries on Sunday")]
    Sunday,

    #[error("first delivery must be on or after {earliest}")]
    TooSoon { earliest: Date },

    #[error("first delivery must be on or before {latest}")]
    TooLate { latest: Date },
}

/// Rolling window of selectable first-delivery dates, in days after today.
///
/// The lower bound leaves lead time for production and logistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityWindow {
    pub min_lead_days: u16,
    pub max_lead_days: u16,
}

impl Default for EligibilityWindow {
    fn default() -> Self {
        Self {
            min_lead_days: DEFAULT_MIN_LEAD_DAYS,
            max_lead_days: DEFAULT_MAX_LEAD_DAYS,
        }
    }
}

impl EligibilityWindow {
    pub fn earliest(&self, today: Date) -> Date {
        add_days(today, i64::from(self.min_lead_days))
    }

    pub fn latest(&self, today: Date) -> Date {
        add_days(today, i64::from(self.max_lead_days))
    }

    pub fn check(&self, candidate: Date, today: Date) -> Result<(), Ineligibility> {
        if candidate.weekday() == Weekday::Sunday {
            return Err(Ineligibility::Sunday);
        }

        let earliest = self.earliest(today);
        if candidate < earliest {
            return Err(Ineligibility::TooSoon { earliest });
        }

        let latest = self.latest(today);
        if candidate > latest {
            return Err(Ineligibility::TooLate { latest });
        }

        Ok(())
    }

    pub fn is_selectable(&self, candidate: Date, today: Date) -> bool {
        self.check(candidate, today).is_ok()
    }

    /// Every selectable date in the window, in ascending order
    pub fn selectable_dates(&self, today: Date) -> Vec<Date> {
        (i64::from(self.min_lead_days)..=i64::from(self.max_lead_days))
            .map(|offset| add_days(today, offset))
            .filter(|date| self.is_selectable(*date, today))
            .collect()
    }
}

/// Whether `candidate` may be picked as the first delivery date, using the
/// default window of two to twenty-one days after `today`.
pub fn is_start_date_selectable(candidate: Date, today: Date) -> bool {
    EligibilityWindow::default().is_selectable(candidate, today)
}
