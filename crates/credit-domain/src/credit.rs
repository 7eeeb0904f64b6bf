//! Domain models for credit applications.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Review state of a credit application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    #[default]
    InProgress,
    Approved,
    Rejected,
}

impl fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CreditStatus::InProgress => "IN_PROGRESS",
            CreditStatus::Approved => "APPROVED",
            CreditStatus::Rejected => "REJECTED",
        };
        f.write_str(label)
    }
}

/// A credit line requested by a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CreditId>,
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: u32,
    #[serde(default)]
    pub status: CreditStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
}

impl Credit {
    /// Builds an unpersisted credit with a fresh credit code and `IN_PROGRESS` status.
    pub fn new(
        credit_value: Decimal,
        day_first_installment: NaiveDate,
        number_of_installments: u32,
    ) -> Self {
        Self {
            id: None,
            credit_code: Uuid::new_v4(),
            credit_value,
            day_first_installment,
            number_of_installments,
            status: CreditStatus::InProgress,
            customer_id: None,
        }
    }

    pub fn with_credit_code(mut self, credit_code: Uuid) -> Self {
        self.credit_code = credit_code;
        self
    }

    /// Links the credit to its owner.
    pub fn owned_by(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn is_owned_by(&self, customer_id: CustomerId) -> bool {
        self.customer_id == Some(customer_id)
    }

    /// Checks value, installment count, and that the first installment falls after `today`.
    pub fn validate_terms(&self, today: NaiveDate) -> Result<(), CreditTermsError> {
        if self.credit_value <= Decimal::ZERO {
            return Err(CreditTermsError::NonPositiveValue(self.credit_value));
        }
        if self.number_of_installments == 0 {
            return Err(CreditTermsError::NoInstallments);
        }
        if self.day_first_installment <= today {
            return Err(CreditTermsError::FirstInstallmentNotInFuture(
                self.day_first_installment,
            ));
        }
        Ok(())
    }
}

impl PartialEq for Credit {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(left), Some(right)) => left == right,
            _ => {
                self.credit_code == other.credit_code
                    && self.credit_value == other.credit_value
                    && self.day_first_installment == other.day_first_installment
                    && self.number_of_installments == other.number_of_installments
                    && self.status == other.status
                    && self.customer_id == other.customer_id
            }
        }
    }
}

impl Identifiable for Credit {
    type Id = CreditId;

    fn id(&self) -> Option<CreditId> {
        self.id
    }
}

impl Displayable for Credit {
    fn display_label(&self) -> String {
        format!(
            "{} ({} in {}x, {})",
            self.credit_code, self.credit_value, self.number_of_installments, self.status
        )
    }
}

/// Input accepted by the credit application operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditRequest {
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: u32,
    pub customer_id: CustomerId,
}

impl CreditRequest {
    /// Builds the unlinked credit described by this request.
    pub fn to_credit(&self) -> Credit {
        Credit::new(
            self.credit_value,
            self.day_first_installment,
            self.number_of_installments,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreditTermsError {
    NonPositiveValue(Decimal),
    NoInstallments,
    FirstInstallmentNotInFuture(NaiveDate),
}

impl fmt::Display for CreditTermsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditTermsError::NonPositiveValue(value) => {
                write!(f, "credit value must be positive, got {value}")
            }
            CreditTermsError::NoInstallments => {
                f.write_str("number of installments must be greater than zero")
            }
            CreditTermsError::FirstInstallmentNotInFuture(date) => {
                write!(f, "first installment date {date} must be in the future")
            }
        }
    }
}

impl std::error::Error for CreditTermsError {}
