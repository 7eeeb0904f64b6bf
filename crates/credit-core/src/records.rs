//! Constraint-checked record tables shared by the in-memory and file-backed stores.

use std::collections::BTreeMap;

use credit_domain::{Credit, CreditId, Customer, CustomerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{StoreError, StoreResult};

/// Customer and credit tables plus their id sequences.
///
/// Every mutation checks the unique and foreign-key constraints before it
/// writes, so callers holding exclusive access get atomic insert-with-constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSet {
    next_customer_id: u64,
    next_credit_id: u64,
    customers: BTreeMap<u64, Customer>,
    credits: BTreeMap<u64, Credit>,
}

impl Default for RecordSet {
    fn default() -> Self {
        Self {
            next_customer_id: 1,
            next_credit_id: 1,
            customers: BTreeMap::new(),
            credits: BTreeMap::new(),
        }
    }
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn credit_count(&self) -> usize {
        self.credits.len()
    }

    pub fn insert_customer(&mut self, mut customer: Customer) -> StoreResult<Customer> {
        if self.customers.values().any(|existing| existing.cpf == customer.cpf) {
            return Err(StoreError::unique("cpf", customer.cpf));
        }
        let id = self.next_customer_id;
        self.next_customer_id += 1;
        customer.id = Some(CustomerId(id));
        self.customers.insert(id, customer.clone());
        Ok(customer)
    }

    pub fn update_customer(&mut self, customer: &Customer) -> StoreResult<Customer> {
        let id = customer
            .id
            .ok_or_else(|| StoreError::MissingRecord("customer has no id".into()))?;
        if !self.customers.contains_key(&id.value()) {
            return Err(StoreError::MissingRecord(format!("Id {} not found", id)));
        }
        let duplicate = self
            .customers
            .iter()
            .any(|(key, existing)| *key != id.value() && existing.cpf == customer.cpf);
        if duplicate {
            return Err(StoreError::unique("cpf", customer.cpf.clone()));
        }
        self.customers.insert(id.value(), customer.clone());
        Ok(customer.clone())
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id.value())
    }

    pub fn customer_by_cpf(&self, cpf: &str) -> Option<&Customer> {
        self.customers.values().find(|customer| customer.cpf == cpf)
    }

    /// Removes the customer together with every credit it owns.
    pub fn delete_customer(&mut self, id: CustomerId) -> StoreResult<()> {
        if self.customers.remove(&id.value()).is_none() {
            return Err(StoreError::MissingRecord(format!("Id {} not found", id)));
        }
        self.credits.retain(|_, credit| !credit.is_owned_by(id));
        Ok(())
    }

    pub fn insert_credit(&mut self, mut credit: Credit) -> StoreResult<Credit> {
        let owner = credit
            .customer_id
            .ok_or_else(|| StoreError::MissingRecord("credit has no customer".into()))?;
        if !self.customers.contains_key(&owner.value()) {
            return Err(StoreError::MissingRecord(format!("Id {} not found", owner)));
        }
        if self
            .credits
            .values()
            .any(|existing| existing.credit_code == credit.credit_code)
        {
            return Err(StoreError::unique(
                "credit_code",
                credit.credit_code.to_string(),
            ));
        }
        let id = self.next_credit_id;
        self.next_credit_id += 1;
        credit.id = Some(CreditId(id));
        self.credits.insert(id, credit.clone());
        Ok(credit)
    }

    pub fn credit(&self, id: CreditId) -> Option<&Credit> {
        self.credits.get(&id.value())
    }

    pub fn credit_by_code(&self, credit_code: Uuid) -> Option<&Credit> {
        self.credits
            .values()
            .find(|credit| credit.credit_code == credit_code)
    }

    /// Credits owned by `customer_id`, ordered by id (insertion order).
    pub fn credits_for(&self, customer_id: CustomerId) -> Vec<Credit> {
        self.credits
            .values()
            .filter(|credit| credit.is_owned_by(customer_id))
            .cloned()
            .collect()
    }

    pub fn delete_credit(&mut self, id: CreditId) -> StoreResult<()> {
        self.credits
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| StoreError::MissingRecord(format!("Credit {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use credit_domain::Address;
    use rust_decimal_macros::dec;

    fn customer(cpf: &str) -> Customer {
        Customer::new(
            "Fulano",
            "Silva",
            cpf,
            dec!(1000),
            "fulano@fulano.org",
            "password",
            Address::new("88000100", "Rua Xyz"),
        )
    }

    fn credit() -> Credit {
        Credit::new(dec!(500), NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(), 5)
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut records = RecordSet::new();
        let first = records.insert_customer(customer("1")).unwrap();
        let second = records.insert_customer(customer("2")).unwrap();
        assert_eq!(first.id, Some(CustomerId(1)));
        assert_eq!(second.id, Some(CustomerId(2)));
    }

    #[test]
    fn duplicate_cpf_is_rejected_on_insert_and_update() {
        let mut records = RecordSet::new();
        records.insert_customer(customer("111")).unwrap();
        let mut other = records.insert_customer(customer("222")).unwrap();

        assert_eq!(
            records.insert_customer(customer("111")),
            Err(StoreError::unique("cpf", "111"))
        );

        other.cpf = "111".into();
        assert!(matches!(
            records.update_customer(&other),
            Err(StoreError::UniqueViolation { field: "cpf", .. })
        ));
        assert_eq!(records.customer_count(), 2);
    }

    #[test]
    fn credit_requires_existing_owner() {
        let mut records = RecordSet::new();
        assert!(matches!(
            records.insert_credit(credit()),
            Err(StoreError::MissingRecord(_))
        ));
        assert!(matches!(
            records.insert_credit(credit().owned_by(CustomerId(9))),
            Err(StoreError::MissingRecord(_))
        ));
        assert_eq!(records.credit_count(), 0);
    }

    #[test]
    fn duplicate_credit_code_is_rejected() {
        let mut records = RecordSet::new();
        let owner = records.insert_customer(customer("1")).unwrap().id.unwrap();
        let code = Uuid::new_v4();
        records
            .insert_credit(credit().with_credit_code(code).owned_by(owner))
            .unwrap();
        assert!(matches!(
            records.insert_credit(credit().with_credit_code(code).owned_by(owner)),
            Err(StoreError::UniqueViolation {
                field: "credit_code",
                ..
            })
        ));
    }

    #[test]
    fn deleting_customer_cascades_to_credits() {
        let mut records = RecordSet::new();
        let keep = records.insert_customer(customer("1")).unwrap().id.unwrap();
        let drop = records.insert_customer(customer("2")).unwrap().id.unwrap();
        records.insert_credit(credit().owned_by(keep)).unwrap();
        records.insert_credit(credit().owned_by(drop)).unwrap();
        records.insert_credit(credit().owned_by(drop)).unwrap();

        records.delete_customer(drop).unwrap();

        assert_eq!(records.credit_count(), 1);
        assert!(records.credits_for(drop).is_empty());
        assert_eq!(records.credits_for(keep).len(), 1);
    }

    #[test]
    fn credit_lookup_and_delete_by_id() {
        let mut records = RecordSet::new();
        let owner = records.insert_customer(customer("1")).unwrap().id.unwrap();
        let saved = records.insert_credit(credit().owned_by(owner)).unwrap();
        let id = saved.id.unwrap();

        assert_eq!(records.credit(id).map(|c| c.credit_code), Some(saved.credit_code));

        records.delete_credit(id).unwrap();

        assert!(records.credit(id).is_none());
        assert!(records.credit_by_code(saved.credit_code).is_none());
        assert!(matches!(
            records.delete_credit(id),
            Err(StoreError::MissingRecord(_))
        ));
    }
}
