// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form DTOs with submit-time validation.
//!
//! Validation runs synchronously when the operator submits, not on a
//! debounce timer, so a fast submit can never race past an unfinished
//! background check. Every rule violation is collected and addressed to
//! its field for inline display. Only shape and cross-field rules are
//! checked here; uniqueness belongs to the backend.

use chrono::NaiveDate;
use dealer_hub_domain::{
    DomainError, validate_capability, validate_contract_dates, validate_contract_number,
    validate_dealer_code, validate_staff_allocation, validate_tax_code,
};
use serde::Deserialize;

/// A validation failure addressed to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field's name.
    pub field: &'static str,
    /// The message to show next to the field.
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, error: &DomainError) -> Self {
        Self {
            field,
            message: error.to_string(),
        }
    }
}

/// The dealer onboarding form.
///
/// Mirrors the wire DTO of the dealers resource; `validate` must pass
/// before a create request is built from it.
#[derive(Debug, Clone, Deserialize)]
pub struct DealerOnboardingForm {
    /// The dealer business code.
    pub code: String,
    /// The dealer's tax code.
    pub tax_code: String,
    /// The dealership contract number.
    pub contract_number: String,
    /// Display name.
    pub name: String,
    /// Contract signing date.
    pub signed_date: NaiveDate,
    /// Contract expiry date.
    pub expiry_date: NaiveDate,
    /// Declared sales staff count.
    pub sales_staff_count: u32,
    /// Declared support staff count.
    pub support_staff_count: u32,
    /// Declared total staff count.
    pub total_staff_count: u32,
    /// Declared monthly sales target, in vehicles.
    pub monthly_sales_target: i64,
    /// Declared service bay count.
    pub service_bays: i64,
    /// Declared charging station count.
    pub charging_stations: i64,
}

impl DealerOnboardingForm {
    /// Validates every field and cross-field rule, collecting all
    /// violations rather than stopping at the first.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per violated rule, each addressed to the
    /// field it should be displayed next to.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors: Vec<FieldError> = Vec::new();

        if let Err(err) = validate_dealer_code(&self.code) {
            errors.push(FieldError::new("code", &err));
        }
        if let Err(err) = validate_tax_code(&self.tax_code) {
            errors.push(FieldError::new("tax_code", &err));
        }
        if let Err(err) = validate_contract_number(&self.contract_number) {
            errors.push(FieldError::new("contract_number", &err));
        }
        if let Err(err) = validate_contract_dates(self.signed_date, self.expiry_date) {
            errors.push(FieldError::new("expiry_date", &err));
        }
        if let Err(err) = validate_staff_allocation(
            self.sales_staff_count,
            self.support_staff_count,
            self.total_staff_count,
        ) {
            errors.push(FieldError::new("total_staff_count", &err));
        }
        if let Err(err) = validate_capability("monthly_sales_target", self.monthly_sales_target) {
            errors.push(FieldError::new("monthly_sales_target", &err));
        }
        if let Err(err) = validate_capability("service_bays", self.service_bays) {
            errors.push(FieldError::new("service_bays", &err));
        }
        if let Err(err) = validate_capability("charging_stations", self.charging_stations) {
            errors.push(FieldError::new("charging_stations", &err));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
