//! JSON views of scheduling values. Dates render as ISO `YYYY-MM-DD`.

use omnyom_menu::MonthlyMealPlan;
use omnyom_order::{Order, Quote};
use omnyom_schedule::{CalendarWindow, DeliveryScheduleEntry, PaymentAttempt};
use serde::Serialize;
use time::Date;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryView {
    pub sequence: u32,
    pub delivery_date: String,
    pub production_date: String,
}

impl From<&DeliveryScheduleEntry> for DeliveryView {
    fn from(entry: &DeliveryScheduleEntry) -> Self {
        Self {
            sequence: entry.sequence,
            delivery_date: entry.delivery_date.to_string(),
            production_date: entry.production_date.to_string(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAttemptView {
    pub days_before: u8,
    pub attempt_date: String,
}

impl From<&PaymentAttempt> for PaymentAttemptView {
    fn from(attempt: &PaymentAttempt) -> Self {
        Self {
            days_before: attempt.days_before,
            attempt_date: attempt.attempt_date.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub start_date: String,
    pub weeks: u32,
    pub frequency: String,
    pub deliveries: Vec<DeliveryView>,
    pub payment_attempts: Vec<PaymentAttemptView>,
}

impl ScheduleView {
    pub fn new(
        start_date: Date,
        weeks: u32,
        frequency: &str,
        deliveries: &[DeliveryScheduleEntry],
        payment_attempts: &[PaymentAttempt],
    ) -> Self {
        Self {
            start_date: start_date.to_string(),
            weeks,
            frequency: frequency.to_owned(),
            deliveries: deliveries.iter().map(DeliveryView::from).collect(),
            payment_attempts: payment_attempts.iter().map(PaymentAttemptView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub start: String,
    pub end: String,
    pub weeks: Vec<Vec<String>>,
}

impl From<&CalendarWindow> for CalendarView {
    fn from(window: &CalendarWindow) -> Self {
        Self {
            start: window.start.to_string(),
            end: window.end().to_string(),
            weeks: window
                .week_rows()
                .iter()
                .map(|week| week.days().iter().map(Date::to_string).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EligibilityView {
    pub date: String,
    pub today: String,
    pub selectable: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteView {
    pub period: String,
    pub weeks: u32,
    pub price: u64,
    pub daily_price: u64,
}

impl From<&Quote> for QuoteView {
    fn from(quote: &Quote) -> Self {
        Self {
            period: quote.period.to_string(),
            weeks: quote.period.weeks(),
            price: quote.price,
            daily_price: quote.daily_price,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: String,
    pub first_delivery_date: String,
    pub status: String,
    pub frequency: String,
    pub delivery_count: usize,
    pub deliveries: Vec<DeliveryView>,
    pub payment_attempts: Vec<PaymentAttemptView>,
    pub created_at: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            first_delivery_date: order.first_delivery_date.to_string(),
            status: order.status.to_string(),
            frequency: order.frequency.to_string(),
            delivery_count: order.delivery_count,
            deliveries: order.deliveries.iter().map(DeliveryView::from).collect(),
            payment_attempts: order
                .payment_attempts
                .iter()
                .map(PaymentAttemptView::from)
                .collect(),
            created_at: order.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DailyMealView {
    pub date: String,
    pub menus: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanView {
    pub year: i32,
    pub month: u8,
    pub stage_id: String,
    pub days: Vec<DailyMealView>,
}

impl From<&MonthlyMealPlan> for MealPlanView {
    fn from(plan: &MonthlyMealPlan) -> Self {
        Self {
            year: plan.year,
            month: plan.month as u8,
            stage_id: plan.stage.label().to_owned(),
            days: plan
                .days
                .iter()
                .map(|day| DailyMealView {
                    date: day.date.to_string(),
                    menus: day.menus.iter().map(|m| (*m).to_owned()).collect(),
                })
                .collect(),
        }
    }
}
