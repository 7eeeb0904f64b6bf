use credit_domain::{Credit, CreditId, Customer, CustomerId};
use thiserror::Error;
use uuid::Uuid;

/// Failures reported by record stores.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate value for unique field `{field}`: {value}")]
    UniqueViolation { field: &'static str, value: String },
    #[error("{0}")]
    MissingRecord(String),
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn unique(field: &'static str, value: impl Into<String>) -> Self {
        Self::UniqueViolation {
            field,
            value: value.into(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract for customers.
///
/// `insert` and `update` must enforce `cpf` uniqueness atomically with the write.
/// `delete` removes the customer's credits in the same step.
pub trait CustomerStore: Send + Sync {
    /// Persists a new customer and returns it with its assigned id.
    fn insert(&self, customer: Customer) -> StoreResult<Customer>;
    /// Overwrites an existing customer in place.
    fn update(&self, customer: &Customer) -> StoreResult<Customer>;
    fn find(&self, id: CustomerId) -> StoreResult<Option<Customer>>;
    fn find_by_cpf(&self, cpf: &str) -> StoreResult<Option<Customer>>;
    fn delete(&self, id: CustomerId) -> StoreResult<()>;
}

/// Persistence contract for credits.
///
/// `insert` must enforce `credit_code` uniqueness atomically with the write.
pub trait CreditStore: Send + Sync {
    fn insert(&self, credit: Credit) -> StoreResult<Credit>;
    fn find(&self, id: CreditId) -> StoreResult<Option<Credit>>;
    fn find_by_credit_code(&self, credit_code: Uuid) -> StoreResult<Option<Credit>>;
    /// Returns the customer's credits in insertion order.
    fn find_all_by_customer(&self, customer_id: CustomerId) -> StoreResult<Vec<Credit>>;
    fn delete(&self, id: CreditId) -> StoreResult<()>;
}
