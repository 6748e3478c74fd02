//! HTTP handlers for products, orders and users.

pub mod order;
pub mod product;
pub mod user;
pub use order::*;
pub use product::*;
pub use user::*;
