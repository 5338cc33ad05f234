pub mod config;
pub mod format;
pub mod mock;
pub mod server;
