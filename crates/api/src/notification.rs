// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User-visible notification mapping.
//!
//! Every engine error converges here into one displayable shape. A failed
//! operation never crashes a list view: the notification is rendered, the
//! list stays interactive, and nothing is retried automatically.

use dealer_hub::{BackendError, ConversionError, DistributionResult, TransitionError};
use tracing::debug;

/// Display severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational, auto-dismissing.
    Info,
    /// Needs attention but the operation partially or fully succeeded.
    Warning,
    /// The operation failed.
    Error,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Display severity.
    pub severity: Severity,
    /// The message to render.
    pub message: String,
    /// Whether the operator must re-authenticate before continuing.
    pub requires_reauth: bool,
    /// Whether the originating list should be refetched in the background
    /// (set for stale-entry failures).
    pub suggests_refetch: bool,
}

impl Notification {
    fn error(message: String) -> Self {
        Self {
            severity: Severity::Error,
            message,
            requires_reauth: false,
            suggests_refetch: false,
        }
    }

    /// Renders a backend failure per the error taxonomy.
    #[must_use]
    pub fn from_backend_error(error: &BackendError) -> Self {
        match error {
            BackendError::Transient { message } => Self::error(format!(
                "The operation could not be completed: {message}. You may try again."
            )),
            BackendError::SessionExpired => Self {
                severity: Severity::Error,
                message: String::from("Your session has expired. Please sign in again."),
                requires_reauth: true,
                suggests_refetch: false,
            },
            BackendError::Forbidden { .. } => Self::error(String::from(
                "You do not have permission to perform this action.",
            )),
            BackendError::NotFound { message } => Self {
                severity: Severity::Error,
                message: message.clone(),
                requires_reauth: false,
                suggests_refetch: true,
            },
            BackendError::BusinessRule { message } => {
                // Known shortage messages become actionable figures
                error.stock_shortage().map_or_else(
                    || Self::error(message.clone()),
                    |shortage| {
                        Self::error(format!(
                            "Insufficient stock: {} available, {} requested.",
                            shortage.available, shortage.requested
                        ))
                    },
                )
            }
            BackendError::Decode { message } => {
                debug!(message, "decode failure surfaced to operator");
                Self::error(String::from(
                    "The server returned an unexpected response. Please try again.",
                ))
            }
        }
    }

    /// Renders a transition failure.
    #[must_use]
    pub fn from_transition_error(error: &TransitionError) -> Self {
        match error {
            TransitionError::EntityNotFound { .. } | TransitionError::UnknownStatus { .. } => {
                Self {
                    severity: Severity::Warning,
                    message: error.to_string(),
                    requires_reauth: false,
                    suggests_refetch: true,
                }
            }
            TransitionError::DomainViolation(domain_error) => {
                Self::error(domain_error.to_string())
            }
            TransitionError::Backend(backend_error) => Self::from_backend_error(backend_error),
        }
    }

    /// Renders a conversion failure.
    #[must_use]
    pub fn from_conversion_error(error: &ConversionError) -> Self {
        match error {
            ConversionError::QuoteNotFound { .. } => Self {
                severity: Severity::Warning,
                message: error.to_string(),
                requires_reauth: false,
                suggests_refetch: true,
            },
            ConversionError::DomainViolation(domain_error) => {
                Self::error(domain_error.to_string())
            }
            ConversionError::OrderCreation(backend_error) => {
                Self::from_backend_error(backend_error)
            }
            ConversionError::QuoteMarkFailed { .. } => Self::error(error.to_string()),
        }
    }

    /// Renders a distribution outcome as "N succeeded, M failed" with
    /// per-target detail appended for the failures.
    #[must_use]
    pub fn from_distribution_result(result: &DistributionResult) -> Self {
        let severity: Severity = if result.failed == 0 {
            Severity::Info
        } else if result.succeeded == 0 {
            Severity::Error
        } else {
            Severity::Warning
        };

        let mut message: String = result.summary();
        for failure in &result.failure_details {
            message.push_str(&format!("\n{}: {}", failure.target_id, failure.message));
        }

        Self {
            severity,
            message,
            requires_reauth: false,
            suggests_refetch: false,
        }
    }
}
