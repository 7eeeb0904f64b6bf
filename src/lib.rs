#![doc(test(attr(deny(warnings))))]

//! Credit application backend: customer directory, credit ledger, request
//! validation and the `credit_app_cli` shell.
//!
//! The business rules live in `credit-core`; this crate wires them to a
//! configured record store and presents results as views or
//! [`api::ExceptionDetails`].

pub mod api;
pub mod cli;
pub mod dto;
pub mod errors;
pub mod utils;

pub use api::{CreditApi, ExceptionDetails};

use std::sync::Once;

use credit_config::Config;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default filter.
pub fn init() {
    init_with_filter(&Config::default_log_filter());
}

/// Initializes global tracing, falling back to `default_filter` when
/// `RUST_LOG` is unset. Only the first call has any effect.
pub fn init_with_filter(default_filter: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(default_filter);
        tracing::debug!("credit app tracing initialized");
    });
}
