// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error taxonomy for backend calls and workflow operations.
//!
//! Backend failures are classified once, at the HTTP boundary, into
//! `BackendError`. Workflow operations wrap them in operation-specific
//! errors so callers can distinguish a locally rejected transition (no
//! request was sent) from a backend refusal.

use dealer_hub_domain::{DomainError, EntityId};

/// A backend call failure, classified by kind.
///
/// Classification happens exactly once, where the HTTP response is
/// received. No variant is ever retried automatically; retry is always
/// operator-initiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Transport failure or server-side error (5xx). Dismissible; the
    /// operation may be re-triggered manually.
    Transient {
        /// A description of the failure.
        message: String,
    },
    /// The session is no longer valid (401). Re-authentication is required.
    SessionExpired,
    /// The operator lacks permission for this action (403). Retrying with
    /// the same credentials will not succeed.
    Forbidden {
        /// The server's message.
        message: String,
    },
    /// The entity no longer exists (404), typically a stale list entry.
    NotFound {
        /// The server's message, surfaced verbatim.
        message: String,
    },
    /// The backend refused the operation on business grounds (400/409).
    BusinessRule {
        /// The server's message, surfaced verbatim.
        message: String,
    },
    /// The response body could not be decoded.
    Decode {
        /// A description of the decode failure.
        message: String,
    },
}

impl BackendError {
    /// Extracts stock-shortage figures from a business-rule message, when
    /// the message matches the backend's known shortage pattern.
    ///
    /// Returns `None` for every other variant or message shape; callers
    /// fall back to the verbatim message.
    #[must_use]
    pub fn stock_shortage(&self) -> Option<StockShortage> {
        match self {
            Self::BusinessRule { message } => StockShortage::parse(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transient { message } => write!(f, "Transient network failure: {message}"),
            Self::SessionExpired => write!(f, "Session expired"),
            Self::Forbidden { message } => write!(f, "Insufficient permission: {message}"),
            Self::NotFound { message } | Self::BusinessRule { message } => {
                write!(f, "{message}")
            }
            Self::Decode { message } => write!(f, "Failed to decode response: {message}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// Stock-shortage figures extracted from a backend business-rule message.
///
/// The backend reports shortages as free text containing the available and
/// requested quantities (e.g. `"insufficient stock: available 5, requested
/// 10"`). Parsing is best-effort; an unmatched message is surfaced
/// verbatim instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockShortage {
    /// Units the backend reports as available.
    pub available: u64,
    /// Units the refused operation requested.
    pub requested: u64,
}

impl StockShortage {
    /// Parses shortage figures from a backend message.
    #[must_use]
    pub fn parse(message: &str) -> Option<Self> {
        let lower: String = message.to_lowercase();
        let available: u64 = number_after(&lower, "available")?;
        let requested: u64 =
            number_after(&lower, "requested").or_else(|| number_after(&lower, "required"))?;
        Some(Self {
            available,
            requested,
        })
    }
}

/// Finds the first integer following a keyword in `text`.
fn number_after(text: &str, keyword: &str) -> Option<u64> {
    let start: usize = text.find(keyword)? + keyword.len();
    let digits: String = text[start..]
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Errors from a workflow status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The entity is not present in the source collection.
    EntityNotFound {
        /// The missing entity's identifier.
        id: EntityId,
    },
    /// The entity's current status was not recognized when decoded.
    ///
    /// Treated as transient: the list is likely stale relative to a newer
    /// backend, and a refetch may resolve it.
    UnknownStatus {
        /// The entity's identifier.
        id: EntityId,
    },
    /// The requested transition is not permitted by the status machine.
    /// No request was sent.
    DomainViolation(DomainError),
    /// The backend refused or failed the transition. The entity's
    /// displayed status is unchanged.
    Backend(BackendError),
}

impl std::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntityNotFound { id } => write!(f, "Entity '{id}' not found in the list"),
            Self::UnknownStatus { id } => {
                write!(f, "Entity '{id}' has an unrecognized status; refresh the list")
            }
            Self::DomainViolation(err) => write!(f, "{err}"),
            Self::Backend(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for TransitionError {}

impl From<DomainError> for TransitionError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<BackendError> for TransitionError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err)
    }
}

/// Errors from the quote-to-order conversion workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The quote is not present in the source collection.
    QuoteNotFound {
        /// The missing quote's identifier.
        id: EntityId,
    },
    /// The quote's status does not permit conversion. No request was sent.
    DomainViolation(DomainError),
    /// Order creation failed; nothing was changed on the backend.
    OrderCreation(BackendError),
    /// The order was created but the quote could not be marked converted.
    ///
    /// The order exists on the backend; the operator must reconcile.
    QuoteMarkFailed {
        /// The identifier of the order that was created.
        order_id: EntityId,
        /// The failure that prevented marking the quote.
        error: BackendError,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuoteNotFound { id } => write!(f, "Quote '{id}' not found in the list"),
            Self::DomainViolation(err) => write!(f, "{err}"),
            Self::OrderCreation(err) => write!(f, "Order creation failed: {err}"),
            Self::QuoteMarkFailed { order_id, error } => {
                write!(
                    f,
                    "Order '{order_id}' was created but the quote could not be marked converted: {error}"
                )
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<DomainError> for ConversionError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
