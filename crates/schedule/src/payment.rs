use time::Date;

use crate::{DeliveryScheduleEntry, add_days, last_delivery_date};

/// Days before the last delivery on which payment is attempted, in order.
pub const PAYMENT_ATTEMPT_DAYS_BEFORE: [u8; 4] = [7, 6, 5, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentAttempt {
    pub days_before: u8,
    pub attempt_date: Date,
}

/// Payment attempts at D-7, D-6, D-5 and D-4 of the last delivery date
pub fn generate_payment_attempts(last_delivery_date: Date) -> [PaymentAttempt; 4] {
    PAYMENT_ATTEMPT_DAYS_BEFORE.map(|days_before| PaymentAttempt {
        days_before,
        attempt_date: add_days(last_delivery_date, -i64::from(days_before)),
    })
}

pub fn payment_attempts_for(entries: &[DeliveryScheduleEntry]) -> Option<[PaymentAttempt; 4]> {
    last_delivery_date(entries).map(generate_payment_attempts)
}
