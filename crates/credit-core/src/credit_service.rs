//! Credit ledger: applications, per-customer listings and owner-checked lookups.

use std::sync::Arc;

use credit_domain::{Credit, CreditRequest, Customer, CustomerId, Displayable};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    customer_service::CustomerService,
    storage::CreditStore,
    time::{Clock, SystemClock},
    CoreError,
};

/// Message returned when a credit exists but belongs to someone else.
pub const OWNERSHIP_DENIED_MESSAGE: &str = "Contact admin";

/// Lifecycle operations on [`Credit`] records.
#[derive(Clone)]
pub struct CreditService {
    store: Arc<dyn CreditStore>,
    customers: CustomerService,
    clock: Arc<dyn Clock>,
}

impl CreditService {
    pub fn new(store: Arc<dyn CreditStore>, customers: CustomerService) -> Self {
        Self::with_clock(store, customers, Arc::new(SystemClock))
    }

    pub fn with_clock(
        store: Arc<dyn CreditStore>,
        customers: CustomerService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            customers,
            clock,
        }
    }

    pub fn customers(&self) -> &CustomerService {
        &self.customers
    }

    /// Files a credit application for an existing customer.
    ///
    /// The owner is resolved through the customer directory and the stored
    /// record is linked to that resolved customer, never to the raw request id.
    pub fn apply(&self, request: CreditRequest) -> Result<Credit, CoreError> {
        self.apply_with_owner(request).map(|(credit, _)| credit)
    }

    /// Like [`CreditService::apply`], also handing back the resolved owner.
    /// The owner is read before the credit is written.
    pub fn apply_with_owner(&self, request: CreditRequest) -> Result<(Credit, Customer), CoreError> {
        debug!(customer_id = %request.customer_id, "applying for credit");
        let credit = request.to_credit();
        credit
            .validate_terms(self.clock.today())
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        let owner = self.customers.find_by_id(request.customer_id)?;
        let owner_id = owner
            .id
            .ok_or_else(|| CoreError::Storage("resolved customer has no id".into()))?;

        let saved = self.store.insert(credit.owned_by(owner_id))?;
        info!(
            customer_id = %owner_id,
            credit = %saved.display_label(),
            "credit application filed"
        );
        Ok((saved, owner))
    }

    /// Returns every credit owned by `customer_id`; empty when there are none.
    pub fn list_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Credit>, CoreError> {
        debug!(customer_id = %customer_id, "listing credits");
        Ok(self.store.find_all_by_customer(customer_id)?)
    }

    /// Looks a credit up by code, then checks that `customer_id` owns it.
    ///
    /// A missing code is [`CoreError::NotFound`]; a code owned by another
    /// customer is [`CoreError::Authorization`].
    pub fn find_by_code_for_customer(
        &self,
        customer_id: CustomerId,
        credit_code: Uuid,
    ) -> Result<Credit, CoreError> {
        debug!(customer_id = %customer_id, %credit_code, "looking up credit");
        let credit = self
            .store
            .find_by_credit_code(credit_code)?
            .ok_or_else(|| CoreError::NotFound(not_found_message(credit_code)))?;

        if credit.is_owned_by(customer_id) {
            Ok(credit)
        } else {
            warn!(
                customer_id = %customer_id,
                %credit_code,
                "credit lookup by non-owner"
            );
            Err(CoreError::Authorization(OWNERSHIP_DENIED_MESSAGE.into()))
        }
    }
}

/// Message used when no credit carries `credit_code`.
pub fn not_found_message(credit_code: Uuid) -> String {
    format!("Creditcode {} not found", credit_code)
}
