//! Business logic services.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod date_range;
pub mod orders;
pub mod products;
