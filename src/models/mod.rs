//! Database models and DTOs for all domain entities.

pub mod category;
pub mod order;
pub mod pagination;
pub mod product;
pub mod user;
