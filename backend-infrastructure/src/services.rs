pub mod store_watcher;
pub mod upload_service;

pub use store_watcher::*;
pub use upload_service::*;
