// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Structural validation for dealer onboarding fields.
//!
//! These checks are advisory and local: they run before submission and
//! block it on failure, but the backend remains the source of truth for
//! uniqueness. Nothing here claims to validate uniqueness, only shape.

use crate::error::DomainError;
use chrono::NaiveDate;

/// The human-readable shape of a dealer code, used in error messages.
const DEALER_CODE_SHAPE: &str = "BRAND_RR_nS_NNN (e.g. VF_HN_3S_013)";

/// Validates the structural shape of a dealer business code.
///
/// A dealer code has four underscore-separated segments:
/// brand (2-4 uppercase letters), region (2 uppercase letters), showroom
/// class (a digit followed by `S`), and a 3-digit sequence number.
///
/// # Errors
///
/// Returns `DomainError::InvalidDealerCode` naming the expected shape if
/// the code does not match.
pub fn validate_dealer_code(code: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidDealerCode(format!("'{code}' must match {DEALER_CODE_SHAPE}"));

    let segments: Vec<&str> = code.split('_').collect();
    if segments.len() != 4 {
        return Err(invalid());
    }

    // Segment 1: brand, 2-4 uppercase letters
    let brand: &str = segments[0];
    if !(2..=4).contains(&brand.len()) || !brand.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(invalid());
    }

    // Segment 2: region, exactly 2 uppercase letters
    let region: &str = segments[1];
    if region.len() != 2 || !region.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(invalid());
    }

    // Segment 3: showroom class, a digit followed by 'S'
    let showroom: &str = segments[2];
    let mut showroom_chars = showroom.chars();
    let class_ok: bool = matches!(
        (showroom_chars.next(), showroom_chars.next(), showroom_chars.next()),
        (Some(digit), Some('S'), None) if digit.is_ascii_digit()
    );
    if !class_ok {
        return Err(invalid());
    }

    // Segment 4: sequence, exactly 3 digits
    let sequence: &str = segments[3];
    if sequence.len() != 3 || !sequence.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    Ok(())
}

/// Validates the structural shape of a tax code.
///
/// A tax code is 10 digits, optionally followed by a dash and a 3-digit
/// branch suffix (e.g. `0312345678` or `0312345678-001`).
///
/// # Errors
///
/// Returns `DomainError::InvalidTaxCode` if the code does not match.
pub fn validate_tax_code(code: &str) -> Result<(), DomainError> {
    let invalid = || {
        DomainError::InvalidTaxCode(format!(
            "'{code}' must be 10 digits with an optional -NNN branch suffix"
        ))
    };

    let (main, branch): (&str, Option<&str>) = match code.split_once('-') {
        Some((m, b)) => (m, Some(b)),
        None => (code, None),
    };

    if main.len() != 10 || !main.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    if let Some(branch) = branch
        && (branch.len() != 3 || !branch.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(invalid());
    }

    Ok(())
}

/// Validates the structural shape of a contract number.
///
/// A contract number has three dash-separated segments: a 2-4 uppercase
/// letter prefix, a 4-digit year, and a 4-digit sequence number
/// (e.g. `HD-2026-0042`).
///
/// # Errors
///
/// Returns `DomainError::InvalidContractNumber` if the number does not
/// match.
pub fn validate_contract_number(number: &str) -> Result<(), DomainError> {
    let invalid = || {
        DomainError::InvalidContractNumber(format!(
            "'{number}' must match PREFIX-YYYY-NNNN (e.g. HD-2026-0042)"
        ))
    };

    let segments: Vec<&str> = number.split('-').collect();
    if segments.len() != 3 {
        return Err(invalid());
    }

    let prefix: &str = segments[0];
    if !(2..=4).contains(&prefix.len()) || !prefix.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(invalid());
    }

    let year: &str = segments[1];
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let sequence: &str = segments[2];
    if sequence.len() != 4 || !sequence.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    Ok(())
}

/// Validates that a contract is signed strictly before it expires.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateOrder` if `signed` is not strictly
/// before `expiry`.
pub fn validate_contract_dates(signed: NaiveDate, expiry: NaiveDate) -> Result<(), DomainError> {
    if signed < expiry {
        Ok(())
    } else {
        Err(DomainError::InvalidDateOrder { signed, expiry })
    }
}

/// Validates that declared staff counts fit within the total head count.
///
/// # Errors
///
/// Returns `DomainError::InvalidStaffAllocation` if sales plus support
/// staff exceed the total.
pub fn validate_staff_allocation(
    sales: u32,
    support: u32,
    total: u32,
) -> Result<(), DomainError> {
    if u64::from(sales) + u64::from(support) > u64::from(total) {
        return Err(DomainError::InvalidStaffAllocation {
            sales,
            support,
            total,
        });
    }
    Ok(())
}

/// Validates that a declared capability figure is positive.
///
/// # Arguments
///
/// * `field` - The capability field name, used in the error message
/// * `value` - The declared value
///
/// # Errors
///
/// Returns `DomainError::NonPositiveCapability` if the value is zero or
/// negative.
pub fn validate_capability(field: &str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::NonPositiveCapability {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
