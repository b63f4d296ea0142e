// Domain entities

pub mod analytics;
pub mod config;
pub mod order;
pub mod sales;
pub mod scan_event;
pub mod upload;
pub mod users;

pub use analytics::*;
pub use config::*;
pub use order::*;
pub use sales::*;
pub use scan_event::*;
pub use upload::*;
pub use users::*;
