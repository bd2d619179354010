// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Dealer code does not match the required shape.
    InvalidDealerCode(String),
    /// Tax code does not match the required shape.
    InvalidTaxCode(String),
    /// Contract number does not match the required shape.
    InvalidContractNumber(String),
    /// Contract dates are out of order.
    InvalidDateOrder {
        /// The contract signing date.
        signed: NaiveDate,
        /// The contract expiry date.
        expiry: NaiveDate,
    },
    /// Declared staff counts exceed the total head count.
    InvalidStaffAllocation {
        /// The sales staff count.
        sales: u32,
        /// The support staff count.
        support: u32,
        /// The total staff count.
        total: u32,
    },
    /// A declared capability figure is zero or negative.
    NonPositiveCapability {
        /// The capability field name.
        field: String,
        /// The declared value.
        value: i64,
    },
    /// A request status string is not recognized.
    InvalidRequestStatus(String),
    /// An activation status string is not recognized.
    InvalidActivationStatus(String),
    /// A quote status string is not recognized.
    InvalidQuoteStatus(String),
    /// A status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// The reason the transition is not allowed.
        reason: String,
    },
    /// A distribution plan was submitted with no targets selected.
    EmptySelection,
    /// A distribution quantity is not a positive integer.
    InvalidQuantity {
        /// The invalid quantity value.
        quantity: u32,
    },
    /// A distribution plan requires more units than are available.
    InsufficientAvailability {
        /// The quantity available in the constrained pool.
        available: u64,
        /// The quantity the plan requires.
        required: u64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDealerCode(msg) => write!(f, "Invalid dealer code: {msg}"),
            Self::InvalidTaxCode(msg) => write!(f, "Invalid tax code: {msg}"),
            Self::InvalidContractNumber(msg) => write!(f, "Invalid contract number: {msg}"),
            Self::InvalidDateOrder { signed, expiry } => {
                write!(
                    f,
                    "Contract signing date {signed} must be before expiry date {expiry}"
                )
            }
            Self::InvalidStaffAllocation {
                sales,
                support,
                total,
            } => {
                write!(
                    f,
                    "Sales staff ({sales}) plus support staff ({support}) must not exceed total staff ({total})"
                )
            }
            Self::NonPositiveCapability { field, value } => {
                write!(f, "Capability '{field}' must be positive, got {value}")
            }
            Self::InvalidRequestStatus(status) => {
                write!(f, "Invalid request status: '{status}'")
            }
            Self::InvalidActivationStatus(status) => {
                write!(f, "Invalid activation status: '{status}'")
            }
            Self::InvalidQuoteStatus(status) => write!(f, "Invalid quote status: '{status}'"),
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition from '{from}' to '{to}': {reason}")
            }
            Self::EmptySelection => write!(f, "At least one target dealer must be selected"),
            Self::InvalidQuantity { quantity } => {
                write!(f, "Quantity per target must be at least 1, got {quantity}")
            }
            Self::InsufficientAvailability {
                available,
                required,
            } => {
                write!(
                    f,
                    "Insufficient availability: {required} units required but only {available} available"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
