//! Domain types describing credit applicants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// Postal address embedded in a [`Customer`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Address {
    pub zip_code: String,
    pub street: String,
}

impl Address {
    pub fn new(zip_code: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            zip_code: zip_code.into(),
            street: street.into(),
        }
    }
}

/// A registered credit applicant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub income: Decimal,
    pub email: String,
    pub password: String,
    pub address: Address,
}

impl Customer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        cpf: impl Into<String>,
        income: Decimal,
        email: impl Into<String>,
        password: impl Into<String>,
        address: Address,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            cpf: cpf.into(),
            income,
            email: email.into(),
            password: password.into(),
            address,
        }
    }

    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Overwrites the mutable profile fields. `cpf`, `email` and `password` are left untouched.
    pub fn apply_patch(&mut self, patch: CustomerPatch) {
        self.first_name = patch.first_name;
        self.last_name = patch.last_name;
        self.income = patch.income;
        self.address = patch.address;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(left), Some(right)) => left == right,
            _ => {
                self.first_name == other.first_name
                    && self.last_name == other.last_name
                    && self.cpf == other.cpf
                    && self.income == other.income
                    && self.email == other.email
                    && self.password == other.password
                    && self.address == other.address
            }
        }
    }
}

impl Identifiable for Customer {
    type Id = CustomerId;

    fn id(&self) -> Option<CustomerId> {
        self.id
    }
}

impl Displayable for Customer {
    fn display_label(&self) -> String {
        match self.id {
            Some(id) => format!("#{} {}", id, self.full_name()),
            None => self.full_name(),
        }
    }
}

/// Profile changes accepted by the customer update operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerPatch {
    pub first_name: String,
    pub last_name: String,
    pub income: Decimal,
    pub address: Address,
}
