pub mod config;
pub mod error;
pub mod geo;
pub mod log;
pub mod models;
pub mod observability;
pub mod restaurant;

pub use error::{CustomerError, LogReadError, PizzaError, RestaurantError};
pub use log::OrderLog;
pub use models::customer::{Customer, CustomerKind};
pub use models::pizza::{OrderDetails, PizzaOrder};
pub use restaurant::Restaurant;
