pub mod analytics_handlers;
pub mod file_handlers;
pub mod ops_handlers;
pub mod sales_handlers;
pub mod settings_handlers;
pub mod user_handlers;

pub use analytics_handlers::*;
pub use file_handlers::*;
pub use ops_handlers::*;
pub use sales_handlers::*;
pub use settings_handlers::*;
pub use user_handlers::*;
