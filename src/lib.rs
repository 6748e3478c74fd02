//! Minimal e-commerce backend: products, orders and users over MySQL (production) or SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, Tier};
pub use error::{AppError, ConfigError, StoreError};
pub use migration::apply_migrations;
pub use routes::app;
pub use service::{OrderService, ProductService, UserService};
pub use state::AppState;
pub use store::{connect, database_url, Backend};
