mod item;
mod variation;

pub use item::*;
pub use variation::*;
