//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod page_system;
pub mod telemetry;

pub use config::*;
pub use page_system::*;
pub use telemetry::*;
