// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DealerOnboardingForm, FieldError};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn valid_form() -> DealerOnboardingForm {
    DealerOnboardingForm {
        code: String::from("VF_HN_3S_013"),
        tax_code: String::from("0312345678"),
        contract_number: String::from("HD-2026-0042"),
        name: String::from("Hanoi Central"),
        signed_date: date(2026, 1, 15),
        expiry_date: date(2029, 1, 15),
        sales_staff_count: 12,
        support_staff_count: 6,
        total_staff_count: 25,
        monthly_sales_target: 40,
        service_bays: 6,
        charging_stations: 8,
    }
}

#[test]
fn test_valid_form_passes() {
    assert!(valid_form().validate().is_ok());
}

#[test]
fn test_invalid_code_is_addressed_to_the_code_field() {
    let mut form: DealerOnboardingForm = valid_form();
    form.code = String::from("VF_HN_3_013");

    let errors: Vec<FieldError> = form.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "code");
    assert!(errors[0].message.contains("BRAND_RR_nS_NNN"));
}

#[test]
fn test_all_violations_are_collected_not_just_the_first() {
    let mut form: DealerOnboardingForm = valid_form();
    form.code = String::from("bad");
    form.tax_code = String::from("123");
    form.expiry_date = date(2020, 1, 1);
    form.service_bays = 0;

    let errors: Vec<FieldError> = form.validate().unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["code", "tax_code", "expiry_date", "service_bays"]
    );
}

#[test]
fn test_staff_overflow_is_addressed_to_total_staff_count() {
    let mut form: DealerOnboardingForm = valid_form();
    form.sales_staff_count = 20;
    form.support_staff_count = 10;
    form.total_staff_count = 25;

    let errors: Vec<FieldError> = form.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "total_staff_count");
}

#[test]
fn test_zero_capability_is_rejected() {
    let mut form: DealerOnboardingForm = valid_form();
    form.monthly_sales_target = 0;

    let errors: Vec<FieldError> = form.validate().unwrap_err();
    assert_eq!(errors[0].field, "monthly_sales_target");
}
