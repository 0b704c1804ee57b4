pub mod customer;
pub mod pizza;
