use std::path::PathBuf;

use chrono::NaiveTime;
use thiserror::Error;

use crate::models::customer::CustomerKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    #[error("invalid name {0:?}: must be 1 to 20 characters and not only whitespace")]
    InvalidName(String),

    #[error("invalid mobile number {0:?}: must be 10 characters starting with 0")]
    InvalidMobileNumber(String),

    #[error("customer at ({x}, {y}) is too far from the restaurant")]
    TooFarAway { x: i32, y: i32 },

    #[error("{kind} customer cannot be located at ({x}, {y})")]
    InvalidLocation { kind: CustomerKind, x: i32, y: i32 },

    #[error("unknown customer code {0:?}")]
    UnknownCode(String),

    #[error("invalid customer index {index} (orders: {len})")]
    InvalidIndex { index: isize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PizzaError {
    #[error("invalid quantity {0}: must be between 1 and 10")]
    InvalidQuantity(u32),

    #[error("order time {0} is outside opening hours")]
    OutsideOpeningHours(NaiveTime),

    #[error("delivery time {delivery} is invalid for an order placed at {ordered}")]
    InvalidDeliveryTime {
        ordered: NaiveTime,
        delivery: NaiveTime,
    },

    /// Raised by `OrderLog` implementors for a pizza code they do not sell.
    #[error("unknown pizza code {0:?}")]
    UnknownCode(String),

    /// Pizza-specific rule broken inside a `PizzaOrder` implementation.
    #[error("invalid pizza order: {0}")]
    Invalid(String),

    #[error("invalid pizza index {index} (orders: {len})")]
    InvalidIndex { index: isize, len: usize },
}

#[derive(Debug, Error)]
pub enum LogReadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line `OrderLog` implementors could not split into fields. `line` is 1-based.
    #[error("malformed log line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("log produced {customers} customers but {pizzas} pizza orders")]
    Misaligned { customers: usize, pizzas: usize },
}

#[derive(Debug, Error)]
pub enum RestaurantError {
    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Pizza(#[from] PizzaError),

    #[error(transparent)]
    Log(#[from] LogReadError),
}

impl RestaurantError {
    pub fn outcome_label(&self) -> &'static str {
        match self {
            RestaurantError::Customer(_) => "customer_error",
            RestaurantError::Pizza(_) => "pizza_error",
            RestaurantError::Log(_) => "log_error",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: String, reason: String },
}
