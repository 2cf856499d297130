//! Pizzeria API: HTTP record service for restaurants, pizzas, and their
//! priced associations.

pub mod config;
pub mod error;
pub mod migration;
pub mod models;
pub mod response;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::Config;
pub use error::AppError;
pub use migration::apply_migrations;
pub use response::PrettyJson;
pub use state::AppState;
pub use store::connect;
pub use routes::{app_router, common_routes, record_routes};
pub use service::RecordService;
