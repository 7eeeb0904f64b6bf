use chrono::NaiveDate;
use credit_domain::{Credit, CreditRequest, CreditStatus, Customer, CustomerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::ValidationErrors;

/// Credit application payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditDto {
    pub credit_value: Decimal,
    #[serde(rename = "dayFirstOfInstallment")]
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i64,
    pub customer_id: u64,
}

impl CreditDto {
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.credit_value <= Decimal::ZERO {
            errors.add("creditValue", "credit value must be positive");
        }
        if self.day_first_installment <= today {
            errors.add(
                "dayFirstOfInstallment",
                "first installment must be a future date",
            );
        }
        if self.number_of_installments <= 0 || self.number_of_installments > i64::from(u32::MAX)
        {
            errors.add(
                "numberOfInstallments",
                "number of installments must be positive",
            );
        }
        errors.into_result()
    }

    /// Builds the core request. Call [`CreditDto::validate`] first; an
    /// out-of-range installment count is clamped to zero so the core rejects it.
    pub fn to_request(&self) -> CreditRequest {
        CreditRequest {
            credit_value: self.credit_value,
            day_first_installment: self.day_first_installment,
            number_of_installments: u32::try_from(self.number_of_installments).unwrap_or(0),
            customer_id: CustomerId(self.customer_id),
        }
    }
}

/// Single-credit projection, enriched with a few owner fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditView {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub number_of_installment: u32,
    pub status: CreditStatus,
    pub email_customer: Option<String>,
    pub income_customer: Option<Decimal>,
}

impl CreditView {
    pub fn new(credit: &Credit, owner: Option<&Customer>) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installment: credit.number_of_installments,
            status: credit.status,
            email_customer: owner.map(|customer| customer.email.clone()),
            income_customer: owner.map(|customer| customer.income),
        }
    }
}

/// Row of a per-customer credit listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditViewList {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub number_of_installments: u32,
}

impl From<&Credit> for CreditViewList {
    fn from(credit: &Credit) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
        }
    }
}
