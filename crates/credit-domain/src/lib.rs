//! credit-domain
//!
//! Pure domain models (Customer, Address, Credit, CreditStatus).
//! No I/O, no CLI, no storage. Only data types and their invariants.

pub mod common;
pub mod credit;
pub mod customer;

pub use common::*;
pub use credit::*;
pub use customer::*;
