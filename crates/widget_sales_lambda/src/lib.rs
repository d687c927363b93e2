//! Lambda-facing handlers for widget sales submissions.
//!
//! This crate owns runtime integration details (the `service_fn` adapter and
//! log setup). The notes contract itself lives in `widget_sales_core`.

pub mod handlers;
pub mod logging;
