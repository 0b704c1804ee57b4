use tracing::{debug, info, warn};

use crate::error::{CustomerError, LogReadError, PizzaError, RestaurantError};
use crate::log::OrderLog;
use crate::models::customer::Customer;
use crate::models::pizza::PizzaOrder;
use crate::observability::metrics::Metrics;

/// The orders of one trading day.
///
/// Customers and pizza orders are stored side by side: index `i` in either
/// collection refers to the same order, and both collections always have the
/// same length outside of [`Restaurant::process_log`].
pub struct Restaurant<P> {
    customers: Vec<Customer>,
    pizza_orders: Vec<P>,
    metrics: Metrics,
}

impl<P: PizzaOrder> Restaurant<P> {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            pizza_orders: Vec::new(),
            metrics: Metrics::new(),
        }
    }

    /// Loads every order in `filename` and appends it after the orders
    /// already held.
    ///
    /// Nothing is appended unless both datasets load and line up, so a failed
    /// call leaves the restaurant exactly as it was.
    pub fn process_log<L>(&mut self, log: &L, filename: &str) -> Result<bool, RestaurantError>
    where
        L: OrderLog<Pizza = P>,
    {
        match load_datasets(log, filename) {
            Ok((customers, pizza_orders)) => {
                let loaded = customers.len();
                self.customers.extend(customers);
                self.pizza_orders.extend(pizza_orders);

                self.metrics.orders_loaded_total.inc_by(loaded as u64);
                self.metrics
                    .log_loads_total
                    .with_label_values(&["success"])
                    .inc();
                self.record_stored();

                info!(
                    filename,
                    orders = loaded,
                    total_orders = self.customers.len(),
                    "order log processed"
                );
                Ok(true)
            }
            Err(err) => {
                self.metrics
                    .log_loads_total
                    .with_label_values(&[err.outcome_label()])
                    .inc();
                warn!(filename, error = %err, "failed to process order log");
                Err(err)
            }
        }
    }

    pub fn customer_by_index(&self, index: isize) -> Result<&Customer, CustomerError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.customers.get(i))
            .ok_or(CustomerError::InvalidIndex {
                index,
                len: self.customers.len(),
            })
    }

    pub fn pizza_by_index(&self, index: isize) -> Result<&P, PizzaError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.pizza_orders.get(i))
            .ok_or(PizzaError::InvalidIndex {
                index,
                len: self.pizza_orders.len(),
            })
    }

    /// All customers, in log order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn pizza_orders(&self) -> &[P] {
        &self.pizza_orders
    }

    pub fn num_customer_orders(&self) -> usize {
        self.customers.len()
    }

    pub fn num_pizza_orders(&self) -> usize {
        self.pizza_orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Sum of every customer's delivery distance, in blocks, in log order.
    pub fn total_delivery_distance(&self) -> f64 {
        self.customers
            .iter()
            .map(Customer::delivery_distance)
            .sum()
    }

    /// Recomputes the cost of every pizza order, then sums their profit.
    pub fn total_profit(&mut self) -> f64 {
        self.pizza_orders
            .iter_mut()
            .map(|pizza| {
                pizza.compute_cost();
                pizza.order_profit()
            })
            .sum()
    }

    pub fn reset_details(&mut self) {
        let dropped = self.customers.len();
        self.customers.clear();
        self.pizza_orders.clear();
        self.record_stored();

        debug!(orders = dropped, "restaurant details reset");
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn record_stored(&self) {
        self.metrics.orders_stored.set(self.customers.len() as i64);
    }
}

impl<P: PizzaOrder> Default for Restaurant<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn load_datasets<L>(
    log: &L,
    filename: &str,
) -> Result<(Vec<Customer>, Vec<L::Pizza>), RestaurantError>
where
    L: OrderLog,
{
    let customers = log.populate_customer_dataset(filename)?;
    let pizza_orders = log.populate_pizza_dataset(filename)?;

    if customers.len() != pizza_orders.len() {
        return Err(LogReadError::Misaligned {
            customers: customers.len(),
            pizzas: pizza_orders.len(),
        }
        .into());
    }

    Ok((customers, pizza_orders))
}
