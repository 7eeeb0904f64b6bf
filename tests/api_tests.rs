mod common;

use common::{build_credit_dto, build_customer_dto, memory_api, today};
use credit_app::{
    api::exception::{BAD_REQUEST_TITLE, CONFLICT_TITLE},
    dto::CustomerUpdateDto,
    CreditApi,
};
use credit_config::{Config, StoreKind};
use credit_domain::CreditStatus;
use rust_decimal_macros::dec;
use tempfile::tempdir;
use uuid::Uuid;

fn masking(mask: bool) -> Config {
    Config {
        mask_ownership_errors: mask,
        ..Config::default()
    }
}

#[test]
fn save_customer_returns_view_with_id() {
    let api = memory_api(&Config::default());

    let view = api
        .save_customer(&build_customer_dto("12345678909"))
        .expect("customer saved");

    assert_eq!(view.id.map(|id| id.value()), Some(1));
    assert_eq!(view.first_name, "Fulano");
    assert_eq!(view.cpf, "12345678909");
    assert_eq!(view.income, dec!(1000.0));
    assert_eq!(view.zip_code, "88000100");
}

#[test]
fn duplicate_cpf_is_a_conflict() {
    let api = memory_api(&Config::default());
    api.save_customer(&build_customer_dto("12345678909")).unwrap();

    let err = api
        .save_customer(&build_customer_dto("12345678909"))
        .unwrap_err();

    assert_eq!(err.status, 409);
    assert_eq!(err.title, CONFLICT_TITLE);
    assert_eq!(err.exception, "Conflict");
    assert!(!err.details.is_empty());
}

#[test]
fn formatted_cpf_is_the_same_customer() {
    let api = memory_api(&Config::default());
    api.save_customer(&build_customer_dto("12345678909")).unwrap();

    let err = api
        .save_customer(&build_customer_dto("123.456.789-09"))
        .unwrap_err();

    assert_eq!(err.status, 409);
    assert_eq!(err.exception, "Conflict");
    let found = api.find_customer_by_cpf("123.456.789-09").expect("lookup by formatted cpf");
    assert_eq!(found.id.map(|id| id.value()), Some(1));
    assert_eq!(found.cpf, "12345678909");
    assert!(api.find_customer(2).is_err());
}

#[test]
fn invalid_customer_payload_is_a_bad_request() {
    let api = memory_api(&Config::default());
    let mut dto = build_customer_dto("12345678900");
    dto.first_name = String::new();

    let err = api.save_customer(&dto).unwrap_err();

    assert_eq!(err.status, 400);
    assert_eq!(err.title, BAD_REQUEST_TITLE);
    assert_eq!(err.exception, "Validation");
    assert!(err.details.contains_key("cpf"));
    assert!(err.details.contains_key("firstName"));
    assert!(api.find_customer(1).is_err());
}

#[test]
fn missing_customer_is_a_bad_request() {
    let api = memory_api(&Config::default());

    let err = api.find_customer(2).unwrap_err();

    assert_eq!(err.status, 400);
    assert_eq!(err.exception, "NotFound");
    assert_eq!(err.message(), Some("Id 2 not found"));
}

#[test]
fn update_customer_keeps_cpf() {
    let api = memory_api(&Config::default());
    api.save_customer(&build_customer_dto("12345678909")).unwrap();

    let update = CustomerUpdateDto {
        first_name: "Fulano2".into(),
        last_name: "Silva2".into(),
        income: dec!(2000.0),
        zip_code: "45656".into(),
        street: "Rua Updated".into(),
    };
    let view = api.update_customer(1, &update).expect("updated");

    assert_eq!(view.first_name, "Fulano2");
    assert_eq!(view.income, dec!(2000.0));
    assert_eq!(view.cpf, "12345678909");
    assert_eq!(view.street, "Rua Updated");
}

#[test]
fn delete_customer_removes_credits() {
    let api = memory_api(&Config::default());
    api.save_customer(&build_customer_dto("12345678909")).unwrap();
    api.save_credit(&build_credit_dto(1)).unwrap();

    api.delete_customer(1).expect("deleted");

    assert!(api.find_customer(1).is_err());
    assert!(api.find_all_credits_by_customer(1).unwrap().is_empty());
    assert_eq!(api.delete_customer(1).unwrap_err().exception, "NotFound");
}

#[test]
fn save_credit_returns_in_progress_view() {
    let api = memory_api(&Config::default());
    api.save_customer(&build_customer_dto("12345678909")).unwrap();

    let view = api.save_credit(&build_credit_dto(1)).expect("credit saved");

    assert_eq!(view.status, CreditStatus::InProgress);
    assert_eq!(view.credit_value, dec!(500.0));
    assert_eq!(view.number_of_installment, 5);
    assert_eq!(view.email_customer.as_deref(), Some("fulano@fulano.org"));
    assert_eq!(view.income_customer, Some(dec!(1000.0)));
}

#[test]
fn save_credit_for_unknown_customer_fails() {
    let api = memory_api(&Config::default());

    let err = api.save_credit(&build_credit_dto(7)).unwrap_err();

    assert_eq!(err.status, 400);
    assert_eq!(err.message(), Some("Id 7 not found"));
}

#[test]
fn save_credit_validates_schedule() {
    let api = memory_api(&Config::default());
    api.save_customer(&build_customer_dto("12345678909")).unwrap();
    let mut dto = build_credit_dto(1);
    dto.day_first_installment = today();
    dto.number_of_installments = 0;

    let err = api.save_credit(&dto).unwrap_err();

    assert_eq!(err.exception, "Validation");
    assert!(err.details.contains_key("dayFirstOfInstallment"));
    assert!(err.details.contains_key("numberOfInstallments"));
    assert!(api.find_all_credits_by_customer(1).unwrap().is_empty());
}

#[test]
fn list_returns_every_credit_of_customer() {
    let api = memory_api(&Config::default());
    api.save_customer(&build_customer_dto("12345678909")).unwrap();
    let first = api.save_credit(&build_credit_dto(1)).unwrap();
    let second = api.save_credit(&build_credit_dto(1)).unwrap();

    let rows = api.find_all_credits_by_customer(1).unwrap();

    assert_eq!(rows.len(), 2);
    let codes: Vec<Uuid> = rows.iter().map(|row| row.credit_code).collect();
    assert!(codes.contains(&first.credit_code));
    assert!(codes.contains(&second.credit_code));
    assert!(api.find_all_credits_by_customer(42).unwrap().is_empty());
}

#[test]
fn owner_can_read_own_credit() {
    let api = memory_api(&Config::default());
    api.save_customer(&build_customer_dto("12345678909")).unwrap();
    let saved = api.save_credit(&build_credit_dto(1)).unwrap();

    let view = api.find_credit_by_code(1, saved.credit_code).unwrap();

    assert_eq!(view, saved);
}

#[test]
fn masked_ownership_failure_looks_like_not_found() {
    let api = memory_api(&masking(true));
    api.save_customer(&build_customer_dto("12345678909")).unwrap();
    api.save_customer(&build_customer_dto("98765432100")).unwrap();
    let saved = api.save_credit(&build_credit_dto(1)).unwrap();

    let foreign = api.find_credit_by_code(2, saved.credit_code).unwrap_err();
    let missing = api.find_credit_by_code(2, Uuid::new_v4()).unwrap_err();

    assert_eq!(foreign.exception, "NotFound");
    assert_eq!(foreign.status, missing.status);
    assert_eq!(foreign.title, missing.title);
    assert_eq!(
        foreign.message(),
        Some(format!("Creditcode {} not found", saved.credit_code).as_str())
    );
}

#[test]
fn unmasked_ownership_failure_asks_to_contact_admin() {
    let api = memory_api(&masking(false));
    api.save_customer(&build_customer_dto("12345678909")).unwrap();
    api.save_customer(&build_customer_dto("98765432100")).unwrap();
    let saved = api.save_credit(&build_credit_dto(1)).unwrap();

    let err = api.find_credit_by_code(2, saved.credit_code).unwrap_err();

    assert_eq!(err.status, 400);
    assert_eq!(err.exception, "Authorization");
    assert_eq!(err.message(), Some("Contact admin"));
}

#[test]
fn from_config_opens_json_store() {
    let dir = tempdir().expect("tempdir");
    let config = Config {
        store: StoreKind::Json,
        data_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };

    {
        let api = CreditApi::from_config(&config).expect("api");
        api.save_customer(&build_customer_dto("12345678909")).unwrap();
    }

    let reopened = CreditApi::from_config(&config).expect("api");
    assert_eq!(reopened.find_customer_by_cpf("12345678909").unwrap().id.map(|id| id.value()), Some(1));
    assert!(dir.path().join("records.json").exists());
}

#[test]
fn from_config_memory_store_starts_empty() {
    let config = Config {
        store: StoreKind::Memory,
        ..Config::default()
    };
    let api = CreditApi::from_config(&config).expect("api");

    assert!(api.masks_ownership_errors());
    assert!(api.find_customer(1).is_err());
}
