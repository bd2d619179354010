// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status state machines for workflow-managed entities.
//!
//! This module defines the status states and valid transitions for the
//! entities the console manages. Status transitions are operator-initiated
//! only; the system never advances a status on its own.
//!
//! Statuses are owned by the remote backend. Each enum carries an `Unknown`
//! catch-all so that one unrecognized record cannot fail an entire list
//! decode; the workflow engine refuses to transition such an entity.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Behavior shared by every status state machine.
///
/// The workflow transition engine is generic over this trait: it validates
/// a requested transition locally, and only then issues the corresponding
/// API call using the target status's action segment.
pub trait StatusMachine: Copy + Eq + std::fmt::Debug {
    /// Returns the string representation of the status.
    fn as_str(&self) -> &'static str;

    /// Returns true if the status was recognized when decoded.
    ///
    /// An unknown current status is treated as a transient condition, not
    /// a fatal one: the record may have been written by a newer backend.
    fn is_known(&self) -> bool;

    /// Validates that a transition from this status to `target` is permitted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not allowed.
    fn validate_transition(&self, target: Self) -> Result<(), DomainError>;

    /// Returns the REST action segment used to request the target status.
    ///
    /// Only meaningful for statuses reachable via `validate_transition`.
    fn action_segment(&self) -> &'static str;
}

/// Activation status for dealers, vehicles, and promotions.
///
/// A two-state machine: `active → inactive` and `inactive → active` are
/// both always legal.
/// Each direction accepts an optional textual reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationStatus {
    /// The entity is active and visible to the network.
    Active,
    /// The entity has been deactivated.
    Inactive,
    /// Forward-compatible catch-all for statuses this client version
    /// does not recognize.
    #[serde(other)]
    Unknown,
}

impl ActivationStatus {
    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidActivationStatus(s.to_string())),
        }
    }
}

impl StatusMachine for ActivationStatus {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Unknown => "unknown",
        }
    }

    fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if !target.is_known() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                reason: String::from("target status is not recognized"),
            });
        }
        if *self == target {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                reason: format!("entity is already {}", target.as_str()),
            });
        }
        Ok(())
    }

    fn action_segment(&self) -> &'static str {
        match self {
            Self::Active => "activate",
            Self::Inactive => "deactivate",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for ActivationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ActivationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status states for a vehicle request raised by a dealer.
///
/// Valid transitions:
/// - `pending → approved`
/// - `pending → rejected`
/// - `approved → in_progress`
/// - `in_progress → delivered`
///
/// `delivered` and `rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// The request awaits a manufacturer decision.
    Pending,
    /// The request has been approved and awaits fulfilment.
    Approved,
    /// The approved request is being fulfilled.
    InProgress,
    /// The requested vehicles have been delivered.
    Delivered,
    /// The request was rejected.
    Rejected,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "in_progress" => Ok(Self::InProgress),
            "delivered" => Ok(Self::Delivered),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidRequestStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal (no transition can leave it).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Rejected)
    }
}

impl StatusMachine for RequestStatus {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::InProgress => "in_progress",
            Self::Delivered => "delivered",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }

    fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                reason: String::from("cannot transition from terminal state"),
            });
        }

        // Valid transitions based on current state
        let valid = match self {
            Self::Pending => matches!(target, Self::Approved | Self::Rejected),
            Self::Approved => matches!(target, Self::InProgress),
            Self::InProgress => matches!(target, Self::Delivered),
            Self::Delivered | Self::Rejected | Self::Unknown => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                reason: String::from("transition is not in the allowed set"),
            })
        }
    }

    fn action_segment(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approve",
            Self::InProgress => "in-progress",
            Self::Delivered => "delivered",
            Self::Rejected => "reject",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status states for a customer quote.
///
/// Valid transitions:
/// - `pending → converted` (quote converted into an order)
/// - `pending → canceled`
///
/// `converted` and `canceled` are terminal.
///
/// The canonical internal spelling is `canceled`. The backend's
/// `cancelled` spelling is accepted on decode and never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// The quote awaits a customer decision.
    Pending,
    /// The quote has been converted into an order.
    Converted,
    /// The quote was canceled.
    #[serde(alias = "cancelled")]
    Canceled,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

impl QuoteStatus {
    /// Parses a status from its string representation.
    ///
    /// Accepts both the canonical `canceled` and the backend's
    /// `cancelled` spelling.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "converted" => Ok(Self::Converted),
            "canceled" | "cancelled" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidQuoteStatus(s.to_string())),
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Converted => "converted",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true if this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Converted | Self::Canceled)
    }

    /// Validates that a transition from this status to `target` is permitted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not allowed.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        let valid = matches!(
            (self, target),
            (Self::Pending, Self::Converted) | (Self::Pending, Self::Canceled)
        );

        if valid {
            Ok(())
        } else {
            let reason = if self.is_terminal() {
                String::from("cannot transition from terminal state")
            } else {
                String::from("transition is not in the allowed set")
            };
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                reason,
            })
        }
    }
}

impl FromStr for QuoteStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
