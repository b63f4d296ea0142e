pub mod realtime_store;

pub use realtime_store::*;
