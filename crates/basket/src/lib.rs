mod order;
mod session;

pub use order::*;
pub use session::*;
