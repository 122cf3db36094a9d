pub mod config;
pub mod observability;
pub mod report;

pub use config::Config;
pub use report::{ChefReport, MealReport, OrderFile, OrderFileItem};
