pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod state;
pub mod taxes;

pub use config::AppConfig;
pub use error::ApiError;
pub use service::PricingEngine;
pub use state::AppState;
pub use taxes::{TaxTable, TaxTableError, TaxTableStore};
