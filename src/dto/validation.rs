//! Field checks applied to incoming DTOs before they reach the services.

use std::{collections::BTreeMap, fmt};

/// Collects every failing field of a request, keyed by its wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn require_non_empty(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks a Brazilian CPF: eleven digits (dots and dash allowed), not all
/// equal, with both check digits matching.
pub fn is_valid_cpf(raw: &str) -> bool {
    let digits: Vec<u32> = normalize_cpf(raw)
        .chars()
        .map(|ch| ch.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default();

    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|digit| *digit == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Canonical stored form of a CPF: the `.` and `-` separators are dropped,
/// so `123.456.789-09` and `12345678909` name the same tax id.
pub fn normalize_cpf(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, '.' | '-'))
        .collect()
}

fn check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(index, digit)| digit * (weight_start - index as u32))
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder == 10 {
        0
    } else {
        remainder
    }
}

pub fn is_valid_email(raw: &str) -> bool {
    let value = raw.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_good_cpfs() {
        assert!(is_valid_cpf("12345678909"));
        assert!(is_valid_cpf("123.456.789-09"));
        assert!(is_valid_cpf("98765432100"));
    }

    #[test]
    fn rejects_malformed_cpfs() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("1234567890"));
        assert!(!is_valid_cpf("12345678900"));
        assert!(!is_valid_cpf("11111111111"));
        assert!(!is_valid_cpf("1234567890a"));
    }

    #[test]
    fn normalized_cpf_keeps_only_digits() {
        assert_eq!(normalize_cpf("123.456.789-09"), "12345678909");
        assert_eq!(normalize_cpf(" 12345678909 "), "12345678909");
    }

    #[test]
    fn email_needs_local_part_and_dotted_domain() {
        assert!(is_valid_email("fulano@fulano.org"));
        assert!(!is_valid_email("fulano.org"));
        assert!(!is_valid_email("@fulano.org"));
        assert!(!is_valid_email("fulano@localhost"));
        assert!(!is_valid_email("ful ano@fulano.org"));
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("cpf", "CPF must not be empty");
        errors.add("cpf", "invalid CPF");
        assert_eq!(errors.to_string(), "cpf: CPF must not be empty");
        assert!(errors.into_result().is_err());
    }
}
