//! Customer directory: registration, lookup, profile updates and removal.

use std::sync::Arc;

use credit_domain::{Customer, CustomerId, CustomerPatch, Displayable};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{storage::CustomerStore, CoreError};

/// Lifecycle operations on [`Customer`] records.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Persists a new customer.
    ///
    /// Uniqueness of `cpf` is left to the store's constraint; a duplicate
    /// surfaces as [`CoreError::Conflict`].
    pub fn register(&self, candidate: Customer) -> Result<Customer, CoreError> {
        debug!(cpf = %candidate.cpf, "registering customer");
        ensure_income(candidate.income)?;
        match self.store.insert(candidate) {
            Ok(saved) => {
                info!(customer = %saved.display_label(), "customer registered");
                Ok(saved)
            }
            Err(err) => {
                let err = CoreError::from(err);
                if err.is_conflict() {
                    warn!(error = %err, "customer registration rejected");
                }
                Err(err)
            }
        }
    }

    pub fn find_by_id(&self, id: CustomerId) -> Result<Customer, CoreError> {
        debug!(customer_id = %id, "looking up customer");
        self.store
            .find(id)?
            .ok_or_else(|| CoreError::NotFound(format!("Id {} not found", id)))
    }

    pub fn find_by_cpf(&self, cpf: &str) -> Result<Customer, CoreError> {
        debug!(cpf, "looking up customer by cpf");
        self.store
            .find_by_cpf(cpf)?
            .ok_or_else(|| CoreError::NotFound(format!("Cpf {} not found", cpf)))
    }

    /// Applies a profile patch to an existing customer. `cpf`, `email` and
    /// `password` are not part of the patch and never change here.
    pub fn update(&self, id: CustomerId, patch: CustomerPatch) -> Result<Customer, CoreError> {
        ensure_income(patch.income)?;
        let mut customer = self.find_by_id(id)?;
        customer.apply_patch(patch);
        let saved = self.store.update(&customer)?;
        info!(customer_id = %id, "customer updated");
        Ok(saved)
    }

    /// Deletes a customer after confirming it exists.
    pub fn remove(&self, id: CustomerId) -> Result<(), CoreError> {
        let customer = self.find_by_id(id)?;
        let id = customer.id.unwrap_or(id);
        self.store.delete(id)?;
        info!(customer_id = %id, "customer removed");
        Ok(())
    }
}

fn ensure_income(income: Decimal) -> Result<(), CoreError> {
    if income < Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "income must not be negative, got {}",
            income
        )));
    }
    Ok(())
}
