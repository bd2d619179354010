// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{RecordingBackend, create_test_quote};
use crate::{BackendError, ConversionError, ListController, convert_quote};
use dealer_hub_domain::{EntityId, Quote, QuoteStatus};

fn quote_list(id: &str, status: QuoteStatus) -> ListController<Quote> {
    let mut list: ListController<Quote> = ListController::new(10);
    let ticket = list.begin_fetch();
    list.complete_fetch(ticket, vec![create_test_quote(id, status)]);
    list
}

#[tokio::test]
async fn test_pending_quote_converts_and_patches_status() {
    let backend: RecordingBackend = RecordingBackend::new();
    let mut list: ListController<Quote> = quote_list("q1", QuoteStatus::Pending);
    let id: EntityId = EntityId::new("q1");

    let order_id: EntityId = convert_quote(&backend, &mut list, &id).await.unwrap();

    assert_eq!(order_id.as_str(), "order-for-q1");
    assert_eq!(*backend.order_calls.lock().unwrap(), 1);
    assert_eq!(*backend.mark_calls.lock().unwrap(), 1);
    assert_eq!(list.find(&id).unwrap().status, QuoteStatus::Converted);
}

#[tokio::test]
async fn test_converted_quote_cannot_convert_again() {
    let backend: RecordingBackend = RecordingBackend::new();
    let mut list: ListController<Quote> = quote_list("q1", QuoteStatus::Converted);
    let id: EntityId = EntityId::new("q1");

    let result = convert_quote(&backend, &mut list, &id).await;
    assert!(matches!(result, Err(ConversionError::DomainViolation(_))));

    // Rejected locally: no order was requested
    assert_eq!(*backend.order_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_canceled_quote_cannot_convert() {
    let backend: RecordingBackend = RecordingBackend::new();
    let mut list: ListController<Quote> = quote_list("q1", QuoteStatus::Canceled);

    let result = convert_quote(&backend, &mut list, &EntityId::new("q1")).await;
    assert!(matches!(result, Err(ConversionError::DomainViolation(_))));
    assert_eq!(*backend.order_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_order_creation_failure_changes_nothing() {
    let backend: RecordingBackend = RecordingBackend {
        create_order_error: Some(BackendError::BusinessRule {
            message: String::from("insufficient stock: available 0, requested 1"),
        }),
        ..RecordingBackend::new()
    };
    let mut list: ListController<Quote> = quote_list("q1", QuoteStatus::Pending);
    let id: EntityId = EntityId::new("q1");

    let result = convert_quote(&backend, &mut list, &id).await;
    assert!(matches!(result, Err(ConversionError::OrderCreation(_))));

    // The quote was never marked and its local status is unchanged
    assert_eq!(*backend.mark_calls.lock().unwrap(), 0);
    assert_eq!(list.find(&id).unwrap().status, QuoteStatus::Pending);
}

#[tokio::test]
async fn test_mark_failure_reports_created_order_for_reconciliation() {
    let backend: RecordingBackend = RecordingBackend {
        mark_quote_error: Some(BackendError::Transient {
            message: String::from("gateway timeout"),
        }),
        ..RecordingBackend::new()
    };
    let mut list: ListController<Quote> = quote_list("q1", QuoteStatus::Pending);
    let id: EntityId = EntityId::new("q1");

    let err: ConversionError = convert_quote(&backend, &mut list, &id).await.unwrap_err();
    match err {
        ConversionError::QuoteMarkFailed { order_id, .. } => {
            assert_eq!(order_id.as_str(), "order-for-q1");
        }
        other => panic!("expected QuoteMarkFailed, got {other:?}"),
    }

    // Local status is left pending so the operator can reconcile
    assert_eq!(list.find(&id).unwrap().status, QuoteStatus::Pending);
}

#[tokio::test]
async fn test_missing_quote_is_reported_without_network_call() {
    let backend: RecordingBackend = RecordingBackend::new();
    let mut list: ListController<Quote> = quote_list("q1", QuoteStatus::Pending);

    let result = convert_quote(&backend, &mut list, &EntityId::new("q404")).await;
    assert!(matches!(result, Err(ConversionError::QuoteNotFound { .. })));
    assert_eq!(*backend.order_calls.lock().unwrap(), 0);
}
