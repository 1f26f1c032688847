mod chapter;
mod date;
mod error;
mod plan;
mod progress;
mod testament;

pub use chapter::*;
pub use date::*;
pub use error::*;
pub use plan::*;
pub use progress::*;
pub use testament::*;
