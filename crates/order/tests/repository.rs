use std::sync::Arc;

use omnyom_order::{
    InMemoryOrderRepository, Order, OrderError, OrderRepository, PlaceOrder, PriceTable,
};
use omnyom_schedule::{EligibilityWindow, Frequency, Period};
use time::Date;
use time::macros::{date, datetime};

const TODAY: Date = date!(2025-11-26);

fn place(first_delivery_date: Date, weeks: u32, frequency: Frequency) -> Order {
    Order::place(
        &PlaceOrder {
            first_delivery_date,
            weeks,
            frequency,
        },
        TODAY,
        datetime!(2025-11-26 09:30:00 UTC),
        &EligibilityWindow::default(),
    )
    .expect("order placed")
}

#[test]
fn test_create_and_find() -> anyhow::Result<()> {
    let repository = InMemoryOrderRepository::new();
    let order = place(date!(2025-12-02), 2, Frequency::ThreeWeek);
    let id = order.id.clone();

    repository.create(order.clone())?;

    assert_eq!(repository.find_by_id(&id)?, Some(order));
    assert_eq!(repository.find_by_id("missing")?, None);

    Ok(())
}

#[test]
fn test_duplicate_id_rejected() -> anyhow::Result<()> {
    let repository = InMemoryOrderRepository::new();
    let order = place(date!(2025-12-01), 1, Frequency::Daily);

    repository.create(order.clone())?;
    let err = repository.create(order.clone()).unwrap_err();

    assert!(matches!(err, OrderError::DuplicateId(id) if id == order.id));
    assert_eq!(repository.list()?.len(), 1);

    Ok(())
}

#[test]
fn test_list_keeps_insertion_order() -> anyhow::Result<()> {
    let repository: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::new());
    let first = place(date!(2025-12-01), 1, Frequency::ThreeWeek);
    let second = place(date!(2025-12-06), 4, Frequency::Daily);

    repository.create(first.clone())?;
    repository.create(second.clone())?;

    let ids = repository
        .list()?
        .into_iter()
        .map(|o| o.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

#[test]
fn test_stored_orders_are_copies() -> anyhow::Result<()> {
    let repository = InMemoryOrderRepository::new();
    let order = place(date!(2025-12-03), 1, Frequency::ThreeWeek);
    let id = order.id.clone();
    repository.create(order)?;

    let mut loaded = repository.find_by_id(&id)?.expect("stored");
    loaded.deliveries.clear();

    let reloaded = repository.find_by_id(&id)?.expect("stored");
    assert_eq!(reloaded.deliveries.len(), 3);

    Ok(())
}

#[test]
fn test_order_quote_matches_period() {
    let order = place(date!(2025-12-01), 4, Frequency::ThreeWeek);
    let quote = PriceTable::default().quote(order.period);

    assert_eq!(order.period, Period::FourWeeks);
    assert_eq!(order.delivery_count, 12);
    assert_eq!(quote.price, 244_720);
}
