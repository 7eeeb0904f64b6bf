//! Identifier types and shared traits for credit-application entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exposes the store-assigned identifier of an entity, if it has been persisted.
pub trait Identifiable {
    type Id: Copy + Eq + fmt::Display;

    fn id(&self) -> Option<Self::Id>;

    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

/// Converts an entity into a short user-facing label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Database identifier of a customer.
pub struct CustomerId(pub u64);

impl CustomerId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CustomerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Database identifier of a credit. Never exposed as the external reference.
pub struct CreditId(pub u64);

impl CreditId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CreditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CreditId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
