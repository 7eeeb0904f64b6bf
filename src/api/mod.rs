//! Resource-style facade over the customer directory and credit ledger.
//!
//! Every operation takes wire DTOs, validates them, calls the services and
//! projects the outcome into a view or an [`ExceptionDetails`].

pub mod exception;

use std::sync::Arc;

use credit_config::{Config, StoreKind};
use credit_core::{
    not_found_message, Clock, CoreError, CreditService, CreditStore, CustomerService,
    CustomerStore, MemoryStore, SystemClock,
};
use credit_domain::CustomerId;
use credit_storage_json::JsonRecordStore;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    dto::{
        normalize_cpf, CreditDto, CreditView, CreditViewList, CustomerDto, CustomerUpdateDto,
        CustomerView,
    },
    errors::Result,
};

pub use exception::ExceptionDetails;

pub type ApiResult<T> = std::result::Result<T, ExceptionDetails>;

/// Entry point used by the shell and by embedding code.
#[derive(Clone)]
pub struct CreditApi {
    customers: CustomerService,
    credits: CreditService,
    clock: Arc<dyn Clock>,
    mask_ownership_errors: bool,
}

impl CreditApi {
    pub fn new<S>(store: Arc<S>, config: &Config) -> Self
    where
        S: CustomerStore + CreditStore + 'static,
    {
        Self::with_clock(store, config, Arc::new(SystemClock))
    }

    pub fn with_clock<S>(store: Arc<S>, config: &Config, clock: Arc<dyn Clock>) -> Self
    where
        S: CustomerStore + CreditStore + 'static,
    {
        let customer_store: Arc<dyn CustomerStore> = store.clone();
        let credit_store: Arc<dyn CreditStore> = store;
        let customers = CustomerService::new(customer_store);
        let credits = CreditService::with_clock(credit_store, customers.clone(), clock.clone());
        Self {
            customers,
            credits,
            clock,
            mask_ownership_errors: config.mask_ownership_errors,
        }
    }

    /// Opens the store selected by `config` and wires the services over it.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api = match config.store {
            StoreKind::Memory => Self::new(Arc::new(MemoryStore::new()), config),
            StoreKind::Json => {
                let dir = config.resolve_data_dir();
                debug!(path = %dir.display(), "opening json record store");
                Self::new(Arc::new(JsonRecordStore::open(dir)?), config)
            }
        };
        Ok(api)
    }

    pub fn masks_ownership_errors(&self) -> bool {
        self.mask_ownership_errors
    }

    pub fn save_customer(&self, dto: &CustomerDto) -> ApiResult<CustomerView> {
        dto.validate()?;
        let saved = self.customers.register(dto.to_entity())?;
        Ok(CustomerView::from(&saved))
    }

    pub fn find_customer(&self, id: u64) -> ApiResult<CustomerView> {
        let customer = self.customers.find_by_id(CustomerId(id))?;
        Ok(CustomerView::from(&customer))
    }

    pub fn find_customer_by_cpf(&self, cpf: &str) -> ApiResult<CustomerView> {
        let customer = self.customers.find_by_cpf(&normalize_cpf(cpf))?;
        Ok(CustomerView::from(&customer))
    }

    pub fn update_customer(&self, id: u64, dto: &CustomerUpdateDto) -> ApiResult<CustomerView> {
        dto.validate()?;
        let updated = self.customers.update(CustomerId(id), dto.to_patch())?;
        Ok(CustomerView::from(&updated))
    }

    pub fn delete_customer(&self, id: u64) -> ApiResult<()> {
        Ok(self.customers.remove(CustomerId(id))?)
    }

    pub fn save_credit(&self, dto: &CreditDto) -> ApiResult<CreditView> {
        dto.validate(self.clock.today())?;
        let (saved, owner) = self.credits.apply_with_owner(dto.to_request())?;
        Ok(CreditView::new(&saved, Some(&owner)))
    }

    pub fn find_all_credits_by_customer(&self, customer_id: u64) -> ApiResult<Vec<CreditViewList>> {
        let credits = self.credits.list_by_customer(CustomerId(customer_id))?;
        Ok(credits.iter().map(CreditViewList::from).collect())
    }

    pub fn find_credit_by_code(
        &self,
        customer_id: u64,
        credit_code: Uuid,
    ) -> ApiResult<CreditView> {
        let customer_id = CustomerId(customer_id);
        let credit = self
            .credits
            .find_by_code_for_customer(customer_id, credit_code)
            .map_err(|err| self.present_lookup_error(err, credit_code))?;
        let owner = self.customers.find_by_id(customer_id)?;
        Ok(CreditView::new(&credit, Some(&owner)))
    }

    fn present_lookup_error(&self, err: CoreError, credit_code: Uuid) -> ExceptionDetails {
        match err {
            CoreError::Authorization(_) if self.mask_ownership_errors => {
                warn!(%credit_code, "masking ownership failure as not found");
                CoreError::NotFound(not_found_message(credit_code)).into()
            }
            other => other.into(),
        }
    }
}
