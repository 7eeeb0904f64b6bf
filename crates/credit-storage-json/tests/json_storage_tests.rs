use std::sync::Arc;

use chrono::NaiveDate;
use credit_core::{
    storage::{CreditStore, CustomerStore, StoreError},
    CreditService, CustomerService, FixedClock,
};
use credit_domain::{Address, Credit, CreditRequest, Customer, CustomerId};
use credit_storage_json::JsonRecordStore;
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn build_customer(cpf: &str) -> Customer {
    Customer::new(
        "Fulano",
        "Silva",
        cpf,
        dec!(1000.0),
        "fulano@fulano.org",
        "password",
        Address::new("88000100", "Rua Xyz"),
    )
}

fn build_credit() -> Credit {
    Credit::new(
        dec!(500.0),
        NaiveDate::from_ymd_opt(2023, 4, 22).unwrap(),
        5,
    )
}

#[test]
fn json_store_persists_records_across_reopen() {
    let dir = tempdir().expect("tempdir");
    let (customer_id, credit_code) = {
        let store = JsonRecordStore::open(dir.path()).expect("open store");
        let customer = CustomerStore::insert(&store, build_customer("12345678909"))
            .expect("insert customer");
        let customer_id = customer.id.expect("assigned id");
        let credit = CreditStore::insert(&store, build_credit().owned_by(customer_id))
            .expect("insert credit");
        (customer_id, credit.credit_code)
    };

    let reopened = JsonRecordStore::open(dir.path()).expect("reopen store");
    assert!(reopened.path().exists());

    let customer = CustomerStore::find(&reopened, customer_id)
        .expect("find customer")
        .expect("customer present");
    assert_eq!(customer.cpf, "12345678909");
    assert_eq!(customer.income, dec!(1000.0));

    let credit = reopened
        .find_by_credit_code(credit_code)
        .expect("find credit")
        .expect("credit present");
    assert_eq!(credit.customer_id, Some(customer_id));

    let next = CustomerStore::insert(&reopened, build_customer("98765432100")).unwrap();
    assert_eq!(next.id, Some(CustomerId(2)));
}

#[test]
fn json_store_enforces_unique_cpf_after_reopen() {
    let dir = tempdir().expect("tempdir");
    {
        let store = JsonRecordStore::open(dir.path()).expect("open store");
        CustomerStore::insert(&store, build_customer("12345678909")).unwrap();
    }

    let reopened = JsonRecordStore::open(dir.path()).expect("reopen store");
    let err = CustomerStore::insert(&reopened, build_customer("12345678909")).unwrap_err();

    assert!(matches!(err, StoreError::UniqueViolation { field: "cpf", .. }));
}

#[test]
fn rejected_mutation_leaves_file_untouched() {
    let dir = tempdir().expect("tempdir");
    let store = JsonRecordStore::open(dir.path()).expect("open store");
    CustomerStore::insert(&store, build_customer("12345678909")).unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    assert!(CreditStore::insert(&store, build_credit().owned_by(CustomerId(99))).is_err());

    let after = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn services_run_on_json_store() {
    let dir = tempdir().expect("tempdir");
    let store = Arc::new(JsonRecordStore::open(dir.path()).expect("open store"));
    let customers = CustomerService::new(store.clone());
    let credits = CreditService::with_clock(
        store.clone(),
        customers.clone(),
        Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap())),
    );

    let id = customers
        .register(build_customer("12345678909"))
        .unwrap()
        .id
        .unwrap();
    let request = CreditRequest {
        credit_value: dec!(500.0),
        day_first_installment: NaiveDate::from_ymd_opt(2023, 4, 22).unwrap(),
        number_of_installments: 5,
        customer_id: id,
    };
    credits.apply(request.clone()).unwrap();
    credits.apply(request).unwrap();

    assert_eq!(credits.list_by_customer(id).unwrap().len(), 2);

    customers.remove(id).unwrap();
    let reopened = JsonRecordStore::open(dir.path()).expect("reopen store");
    assert!(reopened.find_all_by_customer(id).unwrap().is_empty());
}
