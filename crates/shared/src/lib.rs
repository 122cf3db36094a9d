mod command;
mod portion;

pub use command::*;
pub use portion::*;
