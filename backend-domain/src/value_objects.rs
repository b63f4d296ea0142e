// Domain value objects
pub mod date;
pub mod filters;

pub use date::*;
pub use filters::*;
