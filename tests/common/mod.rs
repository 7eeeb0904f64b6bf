#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use credit_app::{
    dto::{CreditDto, CustomerDto},
    CreditApi,
};
use credit_config::Config;
use credit_core::{FixedClock, MemoryStore};
use rust_decimal_macros::dec;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 3, 1).expect("valid date")
}

/// API over a fresh in-memory store with the clock pinned to [`today`].
pub fn memory_api(config: &Config) -> CreditApi {
    CreditApi::with_clock(
        Arc::new(MemoryStore::new()),
        config,
        Arc::new(FixedClock::new(today())),
    )
}

pub fn build_customer_dto(cpf: &str) -> CustomerDto {
    CustomerDto {
        first_name: "Fulano".into(),
        last_name: "Silva".into(),
        cpf: cpf.into(),
        income: dec!(1000.0),
        email: "fulano@fulano.org".into(),
        password: "password".into(),
        zip_code: "88000100".into(),
        street: "Rua Xyz".into(),
    }
}

pub fn build_credit_dto(customer_id: u64) -> CreditDto {
    CreditDto {
        credit_value: dec!(500.0),
        day_first_installment: NaiveDate::from_ymd_opt(2023, 4, 22).expect("valid date"),
        number_of_installments: 5,
        customer_id,
    }
}
