mod catalog;
pub mod fields;
mod filter;
mod record;
mod recipe;

pub use catalog::*;
pub use filter::*;
pub use record::*;
pub use recipe::*;
