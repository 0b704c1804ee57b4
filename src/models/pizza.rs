use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::PizzaError;

const MIN_QUANTITY: u32 = 1;
const MAX_QUANTITY: u32 = 10;
const MIN_DELIVERY_MINUTES: i64 = 10;
const MAX_DELIVERY_MINUTES: i64 = 60;

pub fn opening_time() -> NaiveTime {
    NaiveTime::from_hms_opt(19, 0, 0).expect("valid opening time")
}

pub fn last_order_time() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 0, 0).expect("valid last order time")
}

/// A pizza order as the restaurant sees it. Cost tables live with the
/// implementor; the restaurant only asks for a cost calculation and reads the
/// resulting profit.
pub trait PizzaOrder {
    fn details(&self) -> &OrderDetails;

    /// Recomputes the cost state of the order. Must be idempotent.
    fn compute_cost(&mut self);

    fn order_profit(&self) -> f64;
}

/// Quantity and timing shared by every pizza order, validated against the
/// restaurant's opening hours and delivery window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    quantity: u32,
    order_time: NaiveTime,
    delivery_time: NaiveTime,
}

impl OrderDetails {
    pub fn new(
        quantity: u32,
        order_time: NaiveTime,
        delivery_time: NaiveTime,
    ) -> Result<Self, PizzaError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(PizzaError::InvalidQuantity(quantity));
        }

        if order_time < opening_time() || order_time > last_order_time() {
            return Err(PizzaError::OutsideOpeningHours(order_time));
        }

        // Same-evening times only; a delivery never crosses midnight.
        let wait = delivery_time.signed_duration_since(order_time);
        if wait < Duration::minutes(MIN_DELIVERY_MINUTES)
            || wait > Duration::minutes(MAX_DELIVERY_MINUTES)
        {
            return Err(PizzaError::InvalidDeliveryTime {
                ordered: order_time,
                delivery: delivery_time,
            });
        }

        Ok(Self {
            quantity,
            order_time,
            delivery_time,
        })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn order_time(&self) -> NaiveTime {
        self.order_time
    }

    pub fn delivery_time(&self) -> NaiveTime {
        self.delivery_time
    }
}
