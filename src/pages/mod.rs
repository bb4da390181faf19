//! Page configurations for the generic form controller.

mod catalog;
pub mod config;

pub use catalog::*;
pub use config::*;
