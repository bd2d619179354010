// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, validate_capability, validate_contract_dates, validate_contract_number,
    validate_dealer_code, validate_staff_allocation, validate_tax_code,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_validate_dealer_code_accepts_canonical_code() {
    let result: Result<(), DomainError> = validate_dealer_code("VF_HN_3S_013");
    assert!(result.is_ok());
}

#[test]
fn test_validate_dealer_code_rejects_missing_showroom_class_letter() {
    let result: Result<(), DomainError> = validate_dealer_code("VF_HN_3_013");
    let err: DomainError = result.unwrap_err();
    assert!(matches!(err, DomainError::InvalidDealerCode(_)));

    // The message must identify the expected shape
    let message: String = err.to_string();
    assert!(message.contains("BRAND_RR_nS_NNN"));
}

#[test]
fn test_validate_dealer_code_rejects_lowercase_brand() {
    assert!(validate_dealer_code("vf_HN_3S_013").is_err());
}

#[test]
fn test_validate_dealer_code_rejects_short_sequence() {
    assert!(validate_dealer_code("VF_HN_3S_13").is_err());
}

#[test]
fn test_validate_dealer_code_rejects_long_region() {
    assert!(validate_dealer_code("VF_HAN_3S_013").is_err());
}

#[test]
fn test_validate_dealer_code_rejects_extra_segments() {
    assert!(validate_dealer_code("VF_HN_3S_013_X").is_err());
}

#[test]
fn test_validate_dealer_code_accepts_longer_brand() {
    assert!(validate_dealer_code("BYD_SG_1S_204").is_ok());
}

#[test]
fn test_validate_tax_code_accepts_ten_digits() {
    assert!(validate_tax_code("0312345678").is_ok());
}

#[test]
fn test_validate_tax_code_accepts_branch_suffix() {
    assert!(validate_tax_code("0312345678-001").is_ok());
}

#[test]
fn test_validate_tax_code_rejects_short_code() {
    let result: Result<(), DomainError> = validate_tax_code("031234567");
    assert!(matches!(result, Err(DomainError::InvalidTaxCode(_))));
}

#[test]
fn test_validate_tax_code_rejects_letters() {
    assert!(validate_tax_code("03123A5678").is_err());
}

#[test]
fn test_validate_tax_code_rejects_two_digit_branch() {
    assert!(validate_tax_code("0312345678-01").is_err());
}

#[test]
fn test_validate_contract_number_accepts_canonical_number() {
    assert!(validate_contract_number("HD-2026-0042").is_ok());
}

#[test]
fn test_validate_contract_number_rejects_two_digit_year() {
    let result: Result<(), DomainError> = validate_contract_number("HD-26-0042");
    assert!(matches!(
        result,
        Err(DomainError::InvalidContractNumber(_))
    ));
}

#[test]
fn test_validate_contract_number_rejects_missing_segment() {
    assert!(validate_contract_number("HD-2026").is_err());
}

#[test]
fn test_validate_contract_dates_accepts_signed_before_expiry() {
    let result: Result<(), DomainError> =
        validate_contract_dates(date(2026, 1, 15), date(2029, 1, 15));
    assert!(result.is_ok());
}

#[test]
fn test_validate_contract_dates_rejects_signed_after_expiry() {
    let result: Result<(), DomainError> =
        validate_contract_dates(date(2029, 1, 15), date(2026, 1, 15));
    assert!(matches!(result, Err(DomainError::InvalidDateOrder { .. })));
}

#[test]
fn test_validate_contract_dates_rejects_equal_dates() {
    let day: NaiveDate = date(2026, 6, 1);
    assert!(validate_contract_dates(day, day).is_err());
}

#[test]
fn test_validate_staff_allocation_accepts_exact_fit() {
    assert!(validate_staff_allocation(10, 5, 15).is_ok());
}

#[test]
fn test_validate_staff_allocation_accepts_slack() {
    assert!(validate_staff_allocation(10, 5, 20).is_ok());
}

#[test]
fn test_validate_staff_allocation_rejects_overflow() {
    let result: Result<(), DomainError> = validate_staff_allocation(10, 6, 15);
    assert!(matches!(
        result,
        Err(DomainError::InvalidStaffAllocation {
            sales: 10,
            support: 6,
            total: 15
        })
    ));
}

#[test]
fn test_validate_capability_accepts_positive_value() {
    assert!(validate_capability("monthly_sales_target", 40).is_ok());
}

#[test]
fn test_validate_capability_rejects_zero() {
    let result: Result<(), DomainError> = validate_capability("service_bays", 0);
    assert!(matches!(
        result,
        Err(DomainError::NonPositiveCapability { value: 0, .. })
    ));
}

#[test]
fn test_validate_capability_rejects_negative_value() {
    assert!(validate_capability("charging_stations", -3).is_err());
}
