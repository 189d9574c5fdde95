//! Route definitions for the storefront API.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod orders;
pub mod products;
