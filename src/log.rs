use crate::error::RestaurantError;
use crate::models::customer::Customer;
use crate::models::pizza::PizzaOrder;

/// Source of a day's orders.
///
/// Implementations read the log named by `filename` and return one entry per
/// order line, in log order. Both datasets describe the same lines, so index
/// `i` of the customers and index `i` of the pizzas belong to the same order.
/// On any malformed or invalid line the whole dataset is rejected.
pub trait OrderLog {
    type Pizza: PizzaOrder;

    fn populate_customer_dataset(&self, filename: &str) -> Result<Vec<Customer>, RestaurantError>;

    fn populate_pizza_dataset(&self, filename: &str) -> Result<Vec<Self::Pizza>, RestaurantError>;
}
