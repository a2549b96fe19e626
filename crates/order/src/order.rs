use omnyom_schedule::{
    DeliveryScheduleEntry, EligibilityWindow, Frequency, PaymentAttempt, Period,
    SubscriptionRequest, last_delivery_date, payment_attempts_for,
};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, OffsetDateTime};
use ulid::Ulid;

use crate::{OrderError, Result};

#[derive(
    EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOrder {
    pub first_delivery_date: Date,
    pub weeks: u32,
    pub frequency: Frequency,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub first_delivery_date: Date,
    pub status: OrderStatus,
    pub period: Period,
    pub frequency: Frequency,
    pub delivery_count: usize,
    pub deliveries: Vec<DeliveryScheduleEntry>,
    pub payment_attempts: Vec<PaymentAttempt>,
    pub created_at: OffsetDateTime,
}

impl Order {
    /// Builds an active order from a customer's selection.
    ///
    /// The first delivery date must be inside `window` relative to `today`.
    pub fn place(
        input: &PlaceOrder,
        today: Date,
        created_at: OffsetDateTime,
        window: &EligibilityWindow,
    ) -> Result<Self> {
        let request =
            SubscriptionRequest::new(input.first_delivery_date, input.weeks, input.frequency)?;

        window
            .check(request.start_date, today)
            .map_err(OrderError::StartDate)?;

        let deliveries = request.delivery_schedule()?;
        let payment_attempts = payment_attempts_for(&deliveries)
            .map(Vec::from)
            .unwrap_or_default();

        let order = Self {
            id: Ulid::new().to_string(),
            first_delivery_date: request.start_date,
            status: OrderStatus::Active,
            period: request.period,
            frequency: request.frequency,
            delivery_count: deliveries.len(),
            deliveries,
            payment_attempts,
            created_at,
        };

        tracing::info!(
            order_id = %order.id,
            first_delivery_date = %order.first_delivery_date,
            period = %order.period,
            frequency = %order.frequency,
            deliveries = order.delivery_count,
            "order placed"
        );

        Ok(order)
    }

    pub fn last_delivery_date(&self) -> Option<Date> {
        last_delivery_date(&self.deliveries)
    }
}
