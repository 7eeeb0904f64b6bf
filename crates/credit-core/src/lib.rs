//! credit-core
//!
//! Business rules for the credit application backend.
//! Depends on credit-domain. No CLI, no terminal I/O; persistence only through
//! the store traits in [`storage`].

pub mod credit_service;
pub mod customer_service;
pub mod error;
pub mod memory;
pub mod records;
pub mod storage;
pub mod time;

pub use credit_service::*;
pub use customer_service::*;
pub use error::CoreError;
pub use memory::MemoryStore;
pub use records::RecordSet;
pub use storage::{CreditStore, CustomerStore, StoreError, StoreResult};
pub use time::{Clock, FixedClock, SystemClock};
