// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response envelope decoding and normalization.
//!
//! The backend wraps every response in `{success, message, data}`, but is
//! inconsistent about list payloads: `data` is sometimes a flat array and
//! sometimes a nested `{data, page, limit, total, totalPages}` page. Both
//! shapes are normalized here, once, into [`Page`]. Consuming components
//! never branch on response shape.

use dealer_hub::BackendError;
use serde::Deserialize;

/// The canonical response envelope.
///
/// `data` is declared optional: unsuccessful envelopes and some
/// acknowledgements arrive with it null or absent.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwraps the payload, converting an unsuccessful envelope into a
    /// business-rule error carrying the backend's message.
    pub(crate) fn into_data(self) -> Result<Option<T>, BackendError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(BackendError::BusinessRule {
                message: self
                    .message
                    .unwrap_or_else(|| String::from("operation failed")),
            })
        }
    }

    /// Unwraps a payload the backend must include on success.
    ///
    /// A successful envelope with a missing or null payload is a decode
    /// failure, not a silent default.
    pub(crate) fn into_required_data(self) -> Result<T, BackendError> {
        match self.into_data()? {
            Some(data) => Ok(data),
            None => Err(BackendError::Decode {
                message: String::from("response payload missing"),
            }),
        }
    }
}

/// An acknowledgement envelope for calls whose payload is irrelevant.
#[derive(Debug, Deserialize)]
pub(crate) struct AckEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl AckEnvelope {
    /// Converts an unsuccessful acknowledgement into a business-rule error.
    pub(crate) fn ensure(self) -> Result<(), BackendError> {
        if self.success {
            Ok(())
        } else {
            Err(BackendError::BusinessRule {
                message: self
                    .message
                    .unwrap_or_else(|| String::from("operation failed")),
            })
        }
    }
}

/// A list payload in either of the backend's two shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListData<T> {
    /// The nested paginated shape.
    Paged(PagedData<T>),
    /// The flat-array shape.
    Flat(Vec<T>),
}

/// The backend's nested paginated list shape.
#[derive(Debug, Deserialize)]
pub(crate) struct PagedData<T> {
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

const fn first_page() -> u32 {
    1
}

/// A normalized list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items of this page.
    pub items: Vec<T>,
    /// The 1-based page number.
    pub page: u32,
    /// The server-side page size.
    pub limit: u32,
    /// The total item count across all pages.
    pub total: u64,
    /// The total page count.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// An empty single-page collection, for successful responses whose
    /// payload is null or absent.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            limit: 0,
            total: 0,
            total_pages: 0,
        }
    }
}

impl<T> ListData<T> {
    /// Normalizes either payload shape into a [`Page`].
    ///
    /// A flat array is a complete, single-page collection.
    pub(crate) fn normalize(self) -> Page<T> {
        match self {
            Self::Paged(paged) => Page {
                items: paged.data,
                page: paged.page,
                limit: paged.limit,
                total: paged.total,
                total_pages: paged.total_pages,
            },
            Self::Flat(items) => {
                let count: u32 = u32::try_from(items.len()).unwrap_or(u32::MAX);
                Page {
                    total: items.len() as u64,
                    items,
                    page: 1,
                    limit: count,
                    total_pages: 1,
                }
            }
        }
    }
}
