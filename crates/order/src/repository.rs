use std::sync::RwLock;

use crate::{Order, OrderError, Result};

/// Storage for placed orders.
///
/// Handlers receive an implementation explicitly instead of reaching for a
/// process-wide store.
pub trait OrderRepository: Send + Sync {
    fn create(&self, order: Order) -> Result<()>;

    fn find_by_id(&self, id: &str) -> Result<Option<Order>>;

    /// All orders in insertion order
    fn list(&self) -> Result<Vec<Order>>;
}

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn create(&self, order: Order) -> Result<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| OrderError::Storage(e.to_string()))?;

        if orders.iter().any(|o| o.id == order.id) {
            return Err(OrderError::DuplicateId(order.id));
        }

        tracing::debug!(order_id = %order.id, "order stored");
        orders.push(order);

        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| OrderError::Storage(e.to_string()))?;

        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| OrderError::Storage(e.to_string()))?;

        Ok(orders.clone())
    }
}
