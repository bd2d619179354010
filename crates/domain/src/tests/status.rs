// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ActivationStatus, DomainError, QuoteStatus, RequestStatus, StatusMachine};
use std::str::FromStr;

#[test]
fn test_request_status_allows_pending_to_approved() {
    let result: Result<(), DomainError> =
        RequestStatus::Pending.validate_transition(RequestStatus::Approved);
    assert!(result.is_ok());
}

#[test]
fn test_request_status_allows_pending_to_rejected() {
    let result: Result<(), DomainError> =
        RequestStatus::Pending.validate_transition(RequestStatus::Rejected);
    assert!(result.is_ok());
}

#[test]
fn test_request_status_allows_approved_to_in_progress() {
    let result: Result<(), DomainError> =
        RequestStatus::Approved.validate_transition(RequestStatus::InProgress);
    assert!(result.is_ok());
}

#[test]
fn test_request_status_allows_in_progress_to_delivered() {
    let result: Result<(), DomainError> =
        RequestStatus::InProgress.validate_transition(RequestStatus::Delivered);
    assert!(result.is_ok());
}

#[test]
fn test_request_status_rejects_pending_to_delivered() {
    let result: Result<(), DomainError> =
        RequestStatus::Pending.validate_transition(RequestStatus::Delivered);
    assert!(matches!(
        result,
        Err(DomainError::InvalidStatusTransition { .. })
    ));
}

#[test]
fn test_request_status_rejects_approved_to_rejected() {
    let result: Result<(), DomainError> =
        RequestStatus::Approved.validate_transition(RequestStatus::Rejected);
    assert!(result.is_err());
}

#[test]
fn test_rejected_is_terminal() {
    assert!(RequestStatus::Rejected.is_terminal());

    let result: Result<(), DomainError> =
        RequestStatus::Rejected.validate_transition(RequestStatus::Approved);
    let err: DomainError = result.unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidStatusTransition { ref reason, .. }
            if reason == "cannot transition from terminal state"
    ));
}

#[test]
fn test_delivered_is_terminal() {
    assert!(RequestStatus::Delivered.is_terminal());
    assert!(
        RequestStatus::Delivered
            .validate_transition(RequestStatus::Pending)
            .is_err()
    );
}

#[test]
fn test_request_status_round_trips_through_strings() {
    let statuses: [RequestStatus; 5] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::InProgress,
        RequestStatus::Delivered,
        RequestStatus::Rejected,
    ];
    for status in statuses {
        let parsed: RequestStatus = RequestStatus::from_str(status.as_str()).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_request_status_from_str_rejects_unknown_string() {
    let result: Result<RequestStatus, DomainError> = RequestStatus::from_str("shipped");
    assert!(matches!(result, Err(DomainError::InvalidRequestStatus(_))));
}

#[test]
fn test_request_status_decodes_unrecognized_value_as_unknown() {
    let status: RequestStatus = serde_json::from_str("\"escalated\"").unwrap();
    assert_eq!(status, RequestStatus::Unknown);
    assert!(!status.is_known());
}

#[test]
fn test_unknown_request_status_cannot_transition() {
    let result: Result<(), DomainError> =
        RequestStatus::Unknown.validate_transition(RequestStatus::Approved);
    assert!(result.is_err());
}

#[test]
fn test_request_action_segments() {
    assert_eq!(RequestStatus::Approved.action_segment(), "approve");
    assert_eq!(RequestStatus::Rejected.action_segment(), "reject");
    assert_eq!(RequestStatus::InProgress.action_segment(), "in-progress");
    assert_eq!(RequestStatus::Delivered.action_segment(), "delivered");
}

#[test]
fn test_activation_status_toggles_both_directions() {
    assert!(
        ActivationStatus::Active
            .validate_transition(ActivationStatus::Inactive)
            .is_ok()
    );
    assert!(
        ActivationStatus::Inactive
            .validate_transition(ActivationStatus::Active)
            .is_ok()
    );
}

#[test]
fn test_activation_status_rejects_same_state_transition() {
    let result: Result<(), DomainError> =
        ActivationStatus::Active.validate_transition(ActivationStatus::Active);
    assert!(matches!(
        result,
        Err(DomainError::InvalidStatusTransition { .. })
    ));
}

#[test]
fn test_activation_action_segments() {
    assert_eq!(ActivationStatus::Active.action_segment(), "activate");
    assert_eq!(ActivationStatus::Inactive.action_segment(), "deactivate");
}

#[test]
fn test_quote_status_allows_pending_to_converted() {
    assert!(
        QuoteStatus::Pending
            .validate_transition(QuoteStatus::Converted)
            .is_ok()
    );
}

#[test]
fn test_quote_status_converted_is_terminal() {
    assert!(QuoteStatus::Converted.is_terminal());
    assert!(
        QuoteStatus::Converted
            .validate_transition(QuoteStatus::Canceled)
            .is_err()
    );
}

#[test]
fn test_quote_status_accepts_backend_cancelled_spelling() {
    let status: QuoteStatus = serde_json::from_str("\"cancelled\"").unwrap();
    assert_eq!(status, QuoteStatus::Canceled);

    let parsed: QuoteStatus = QuoteStatus::from_str("cancelled").unwrap();
    assert_eq!(parsed, QuoteStatus::Canceled);
}

#[test]
fn test_quote_status_emits_canonical_canceled_spelling() {
    let encoded: String = serde_json::to_string(&QuoteStatus::Canceled).unwrap();
    assert_eq!(encoded, "\"canceled\"");
}
