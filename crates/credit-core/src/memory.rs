use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use credit_domain::{Credit, CreditId, Customer, CustomerId};
use uuid::Uuid;

use crate::{
    records::RecordSet,
    storage::{CreditStore, CustomerStore, StoreError, StoreResult},
};

/// In-memory record store. One instance serves as both customer and credit store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<RecordSet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: RecordSet) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Copies the current tables.
    pub fn snapshot(&self) -> StoreResult<RecordSet> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, RecordSet>> {
        self.records
            .read()
            .map_err(|_| StoreError::Backend("record store lock poisoned".into()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, RecordSet>> {
        self.records
            .write()
            .map_err(|_| StoreError::Backend("record store lock poisoned".into()))
    }
}

impl CustomerStore for MemoryStore {
    fn insert(&self, customer: Customer) -> StoreResult<Customer> {
        self.write()?.insert_customer(customer)
    }

    fn update(&self, customer: &Customer) -> StoreResult<Customer> {
        self.write()?.update_customer(customer)
    }

    fn find(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
        Ok(self.read()?.customer(id).cloned())
    }

    fn find_by_cpf(&self, cpf: &str) -> StoreResult<Option<Customer>> {
        Ok(self.read()?.customer_by_cpf(cpf).cloned())
    }

    fn delete(&self, id: CustomerId) -> StoreResult<()> {
        self.write()?.delete_customer(id)
    }
}

impl CreditStore for MemoryStore {
    fn insert(&self, credit: Credit) -> StoreResult<Credit> {
        self.write()?.insert_credit(credit)
    }

    fn find(&self, id: CreditId) -> StoreResult<Option<Credit>> {
        Ok(self.read()?.credit(id).cloned())
    }

    fn find_by_credit_code(&self, credit_code: Uuid) -> StoreResult<Option<Credit>> {
        Ok(self.read()?.credit_by_code(credit_code).cloned())
    }

    fn find_all_by_customer(&self, customer_id: CustomerId) -> StoreResult<Vec<Credit>> {
        Ok(self.read()?.credits_for(customer_id))
    }

    fn delete(&self, id: CreditId) -> StoreResult<()> {
        self.write()?.delete_credit(id)
    }
}
