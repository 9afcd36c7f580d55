//! Field validation for coupon transfer shapes.
//!
//! Validators are pure and deterministic. Every violated rule is collected in the order
//! the rules are declared; callers currently surface only the first one.

use crate::{
    model::coupon::{CouponCreateDto, CouponUpdateDto},
    server::error::AppError,
};

/// Default upper bound on coupon name length, in characters.
pub const DEFAULT_NAME_MAX_LENGTH: usize = 100;

/// Limits applied to coupon transfer shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouponRules {
    pub name_max_length: usize,
    pub min_percent: i32,
    pub max_percent: i32,
}

impl Default for CouponRules {
    fn default() -> Self {
        Self {
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
            min_percent: 1,
            max_percent: 100,
        }
    }
}

/// Outcome of validating a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every violated rule, in declaration order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// Converts into a `Result` carrying only the first violation.
    pub fn into_result(self) -> Result<(), AppError> {
        match self.errors.into_iter().next() {
            Some(first) => Err(AppError::Validation(first)),
            None => Ok(()),
        }
    }

    fn check(&mut self, ok: bool, message: impl FnOnce() -> String) {
        if !ok {
            self.errors.push(message());
        }
    }
}

/// Checks the field constraints of a transfer shape.
pub trait Validator<T> {
    fn validate(&self, value: &T) -> ValidationResult;
}

/// Validates `POST /api/coupon` bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateCouponValidator {
    rules: CouponRules,
}

impl CreateCouponValidator {
    pub fn new(rules: CouponRules) -> Self {
        Self { rules }
    }
}

impl Validator<CouponCreateDto> for CreateCouponValidator {
    fn validate(&self, value: &CouponCreateDto) -> ValidationResult {
        let mut result = ValidationResult::default();
        check_fields(&mut result, &self.rules, &value.name, value.percent);
        result
    }
}

/// Validates `PUT /api/coupon` bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateCouponValidator {
    rules: CouponRules,
}

impl UpdateCouponValidator {
    pub fn new(rules: CouponRules) -> Self {
        Self { rules }
    }
}

impl Validator<CouponUpdateDto> for UpdateCouponValidator {
    fn validate(&self, value: &CouponUpdateDto) -> ValidationResult {
        let mut result = ValidationResult::default();
        result.check(value.id > 0, || "'Id' must be greater than '0'.".to_string());
        check_fields(&mut result, &self.rules, &value.name, value.percent);
        result
    }
}

fn check_fields(result: &mut ValidationResult, rules: &CouponRules, name: &str, percent: i32) {
    result.check(!name.trim().is_empty(), || {
        "'Name' must not be empty.".to_string()
    });

    let length = name.chars().count();
    result.check(length <= rules.name_max_length, || {
        format!(
            "The length of 'Name' must be {} characters or fewer. You entered {} characters.",
            rules.name_max_length, length
        )
    });

    result.check(
        (rules.min_percent..=rules.max_percent).contains(&percent),
        || {
            format!(
                "'Percent' must be between {} and {}. You entered {}.",
                rules.min_percent, rules.max_percent, percent
            )
        },
    );
}
