//! # Form Controllers
//!
//! Load/submit controllers for account pages (signup, recovery, settings,
//! dashboard), built as small tokio actors.
//!
//! ## Ingredients
//!
//! - **Domain types** - The bound [`Record`](domain::Record), the
//!   `{Ok, Error?, ...}` [`Envelope`](domain::Envelope) and the rendered
//!   [`FormState`](domain::FormState)
//! - **Page configurations** - One [`PageConfig`](pages::PageConfig) per page:
//!   read/write/search endpoints, success action, fields cleared on success
//! - **Form actor** - A single generic [`FormActor`](form_framework::FormActor)
//!   running the load → submit → settle cycle for any page
//! - **Client** - [`FormClient`](clients::FormClient), a cloneable handle with
//!   macro-generated request methods
//! - **Busy button** - [`BusyButton`](busy_button::BusyButton) maps `working`
//!   onto a control
//! - **Seams** - [`HttpTransport`](transport::HttpTransport) and
//!   [`Navigator`](transport::Navigator) are injected, never global
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! # use form_controllers::{app_system::PageSystem, pages::PageConfig, domain::Record};
//! # use form_controllers::transport::{LogNavigator, ReqwestTransport};
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = ReqwestTransport::new("demo")?;
//! let mut system = PageSystem::new(transport, LogNavigator);
//!
//! let location = url::Url::parse("https://example.com/recovery.html")?;
//! let recovery = system.open(PageConfig::recovery(), &location)?;
//!
//! let outcome = recovery.submit(Record::new().with("Email", "alice@example.com")).await?;
//! println!("{outcome:?}");
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod busy_button;
pub mod clients;
pub mod domain;
pub mod error;
pub mod form_framework;
pub mod pages;
pub mod transport;

#[cfg(test)]
mod mock_framework;
