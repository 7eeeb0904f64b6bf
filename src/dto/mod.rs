//! Wire shapes for requests and responses, plus the field checks that run
//! before anything reaches the services.

pub mod credit;
pub mod customer;
pub mod validation;

pub use credit::{CreditDto, CreditView, CreditViewList};
pub use customer::{CustomerDto, CustomerUpdateDto, CustomerView};
pub use validation::{is_valid_cpf, is_valid_email, normalize_cpf, ValidationErrors};
