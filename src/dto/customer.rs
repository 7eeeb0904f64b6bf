use credit_domain::{Address, Customer, CustomerId, CustomerPatch};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::{is_valid_cpf, is_valid_email, normalize_cpf, ValidationErrors};

/// Registration payload for a new customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub income: Decimal,
    pub email: String,
    pub password: String,
    pub zip_code: String,
    pub street: String,
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("firstName", &self.first_name, "first name must not be empty");
        errors.require_non_empty("lastName", &self.last_name, "last name must not be empty");
        errors.require_non_empty("cpf", &self.cpf, "CPF must not be empty");
        if !errors.contains("cpf") && !is_valid_cpf(&self.cpf) {
            errors.add("cpf", "invalid CPF");
        }
        if self.income < Decimal::ZERO {
            errors.add("income", "invalid income value");
        }
        errors.require_non_empty("email", &self.email, "e-mail must not be empty");
        if !errors.contains("email") && !is_valid_email(&self.email) {
            errors.add("email", "invalid e-mail");
        }
        errors.require_non_empty("password", &self.password, "password must not be empty");
        errors.require_non_empty("zipCode", &self.zip_code, "zip code must not be empty");
        errors.require_non_empty("street", &self.street, "street must not be empty");
        errors.into_result()
    }

    /// Builds an unsaved customer. The CPF is stored in its digits-only form.
    pub fn to_entity(&self) -> Customer {
        Customer::new(
            self.first_name.clone(),
            self.last_name.clone(),
            normalize_cpf(&self.cpf),
            self.income,
            self.email.clone(),
            self.password.clone(),
            Address::new(self.zip_code.clone(), self.street.clone()),
        )
    }
}

/// Profile changes for an existing customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateDto {
    pub first_name: String,
    pub last_name: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl CustomerUpdateDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("firstName", &self.first_name, "first name must not be empty");
        errors.require_non_empty("lastName", &self.last_name, "last name must not be empty");
        if self.income < Decimal::ZERO {
            errors.add("income", "invalid income value");
        }
        errors.require_non_empty("zipCode", &self.zip_code, "zip code must not be empty");
        errors.require_non_empty("street", &self.street, "street must not be empty");
        errors.into_result()
    }

    pub fn to_patch(&self) -> CustomerPatch {
        CustomerPatch {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            income: self.income,
            address: Address::new(self.zip_code.clone(), self.street.clone()),
        }
    }
}

/// Outward projection of a customer. The password is never included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub income: Decimal,
    pub email: String,
    pub zip_code: String,
    pub street: String,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            cpf: customer.cpf.clone(),
            income: customer.income,
            email: customer.email.clone(),
            zip_code: customer.address.zip_code.clone(),
            street: customer.address.street.clone(),
        }
    }
}
