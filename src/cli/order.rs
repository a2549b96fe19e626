use omnyom_order::{InMemoryOrderRepository, Order, OrderRepository, PlaceOrder};
use omnyom_schedule::{Frequency, Period};
use strum::VariantArray;
use time::{Date, OffsetDateTime};

use crate::config::Config;
use crate::view::{OrderView, QuoteView};

use super::print_json;

/// Quotes for one period, or for every period when `weeks` is `None`.
pub fn quotes(config: &Config, weeks: Option<u32>) -> anyhow::Result<Vec<QuoteView>> {
    let prices = config.pricing.table();
    let periods = match weeks {
        Some(weeks) => vec![Period::try_from(weeks)?],
        None => Period::VARIANTS.to_vec(),
    };

    Ok(periods
        .into_iter()
        .map(|period| QuoteView::from(&prices.quote(period)))
        .collect())
}

pub fn quote(config: &Config, weeks: Option<u32>, json: bool) -> anyhow::Result<()> {
    let quotes = quotes(config, weeks)?;

    if json {
        return print_json(&quotes);
    }

    for quote in quotes {
        println!(
            "{:>2} week(s)  {:>8} won  ({} won/day)",
            quote.weeks, quote.price, quote.daily_price
        );
    }

    Ok(())
}

/// Places an order into `repository` and returns it as read back from storage.
pub fn place(
    config: &Config,
    repository: &dyn OrderRepository,
    input: PlaceOrder,
    today: Date,
) -> anyhow::Result<Order> {
    let order = Order::place(
        &input,
        today,
        OffsetDateTime::now_utc(),
        &config.eligibility.window(),
    )?;
    let id = order.id.clone();
    repository.create(order)?;

    repository
        .find_by_id(&id)?
        .ok_or_else(|| anyhow::anyhow!("order {id} missing after create"))
}

pub fn place_order(
    config: &Config,
    start: Date,
    weeks: u32,
    frequency: &str,
    today: Date,
    json: bool,
) -> anyhow::Result<()> {
    let repository = InMemoryOrderRepository::new();
    let input = PlaceOrder {
        first_delivery_date: start,
        weeks,
        frequency: Frequency::parse(frequency)?,
    };

    let stored = place(config, &repository, input, today)?;
    let view = OrderView::from(&stored);

    if json {
        return print_json(&view);
    }

    let quote = config.pricing.table().quote(stored.period);
    println!("order {} ({})", view.id, view.status);
    println!(
        "  first delivery {}  {}  {} deliveries  {} won",
        view.first_delivery_date, view.frequency, view.delivery_count, quote.price
    );
    for delivery in &view.deliveries {
        println!(
            "  #{:<3} {}  (production {})",
            delivery.sequence, delivery.delivery_date, delivery.production_date
        );
    }
    for attempt in &view.payment_attempts {
        println!("  payment D-{}  {}", attempt.days_before, attempt.attempt_date);
    }

    Ok(())
}
