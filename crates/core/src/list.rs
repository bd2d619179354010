// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Generic list-state controller.
//!
//! Every management screen shows a fetched collection filtered by keyword,
//! sorted by one field, and paged. This controller holds that state once,
//! generically, and derives the visible page as a pure function of it:
//! `filtered` depends only on `(source items, keyword)`, `sorted` on the
//! filter output and the sort selection, `paged` on the sort output and
//! the page controls.
//!
//! ## Mutation policy
//!
//! The source collection is mutated only by a fetch commit
//! (`complete_fetch`) or a single-entity patch (`patch`). Fetch commits
//! are guarded by a generation counter: only the response matching the
//! most recently issued ticket may commit, so a stale in-flight response
//! can never overwrite fresher state.

use dealer_hub_domain::{EntityId, Listable};
use tracing::debug;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smaller values first.
    Ascending,
    /// Larger values first.
    Descending,
}

/// A ticket identifying one issued fetch.
///
/// Obtained from [`ListController::begin_fetch`] and redeemed by
/// [`ListController::complete_fetch`]. A ticket older than the most
/// recently issued one no longer commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// The derived, render-ready view of a list.
#[derive(Debug)]
pub struct ListView<'a, T> {
    /// The items of the current page, in display order.
    pub items: Vec<&'a T>,
    /// How many items survive the keyword filter.
    pub total_filtered: usize,
    /// How many pages the filtered collection spans.
    pub total_pages: usize,
    /// The clamped current page (1-based).
    pub current_page: usize,
}

/// List state for one entity collection.
#[derive(Debug)]
pub struct ListController<T: Listable> {
    source_items: Vec<T>,
    keyword: String,
    sort: Option<(T::SortKey, SortDirection)>,
    page: usize,
    page_size: usize,
    fetch_generation: u64,
}

impl<T: Listable> ListController<T> {
    /// Creates an empty controller with the given page size.
    ///
    /// A zero page size is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            source_items: Vec::new(),
            keyword: String::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
            fetch_generation: 0,
        }
    }

    /// Returns the raw source collection, unfiltered and unsorted.
    #[must_use]
    pub fn source_items(&self) -> &[T] {
        &self.source_items
    }

    /// Finds an entity in the source collection by id.
    #[must_use]
    pub fn find(&self, id: &EntityId) -> Option<&T> {
        self.source_items.iter().find(|item| item.id() == id)
    }

    /// Replaces the keyword filter and resets to the first page.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.page = 1;
    }

    /// Selects a sort key.
    ///
    /// Selecting the current key flips the direction; selecting a new key
    /// starts ascending.
    pub fn set_sort(&mut self, key: T::SortKey) {
        self.sort = match self.sort {
            Some((current, direction)) if current == key => {
                let flipped = match direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                };
                Some((key, flipped))
            }
            _ => Some((key, SortDirection::Ascending)),
        };
    }

    /// Moves to a page, clamped to the valid range for the current filter.
    ///
    /// Clamps to 1 when the filtered collection is empty.
    pub fn set_page(&mut self, page: usize) {
        let total_pages: usize = self.filtered_count().div_ceil(self.page_size);
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Changes the page size and resets to the first page.
    ///
    /// A zero page size is treated as 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Issues a ticket for a fetch that is about to start.
    ///
    /// Issuing a new ticket invalidates all previously issued ones.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        FetchTicket(self.fetch_generation)
    }

    /// Commits a completed fetch, unless it has been superseded.
    ///
    /// Returns true if the items were committed, false if the ticket was
    /// stale and the response discarded.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, items: Vec<T>) -> bool {
        if ticket.0 == self.fetch_generation {
            self.source_items = items;
            true
        } else {
            debug!(
                ticket = ticket.0,
                current = self.fetch_generation,
                "discarding stale fetch response"
            );
            false
        }
    }

    /// Applies an in-place patch to one entity in the source collection.
    ///
    /// This is the only mutation path besides a fetch commit. Returns true
    /// if the entity was found and patched.
    pub fn patch<F>(&mut self, id: &EntityId, patch: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.source_items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                patch(item);
                true
            }
            None => false,
        }
    }

    /// Derives the current view: filtered, sorted, and paged.
    ///
    /// Pure with respect to the controller state; calling it repeatedly
    /// without an intervening mutation yields the same result.
    #[must_use]
    pub fn view(&self) -> ListView<'_, T> {
        let mut filtered: Vec<&T> = self.filtered();

        if let Some((key, direction)) = self.sort {
            // Stable sort: equal keys keep their source order
            filtered.sort_by(|a, b| {
                let ordering = a.sort_value(key).compare(&b.sort_value(key));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let total_filtered: usize = filtered.len();
        let total_pages: usize = total_filtered.div_ceil(self.page_size);
        let current_page: usize = if total_pages == 0 {
            1
        } else {
            self.page.min(total_pages)
        };

        let items: Vec<&T> = filtered
            .into_iter()
            .skip((current_page - 1) * self.page_size)
            .take(self.page_size)
            .collect();

        ListView {
            items,
            total_filtered,
            total_pages,
            current_page,
        }
    }

    /// Applies the keyword filter to the source collection.
    fn filtered(&self) -> Vec<&T> {
        if self.keyword.is_empty() {
            return self.source_items.iter().collect();
        }
        let needle: String = self.keyword.to_lowercase();
        self.source_items
            .iter()
            .filter(|item| {
                item.searchable_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    fn filtered_count(&self) -> usize {
        self.filtered().len()
    }
}
