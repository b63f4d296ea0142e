// Operational plumbing shared by commands and background services

pub mod settings_stream_hub;

pub use settings_stream_hub::*;
