// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Traits connecting domain entities to the generic list controller and
//! workflow engine.
//!
//! Every management screen follows the same list pattern, so the list
//! controller is written once, generically, against `Listable`. Entities
//! declare their searchable text fields and typed sort keys here instead
//! of duplicating filter/sort logic per screen.

use crate::status::StatusMachine;
use crate::types::{EntityId, Resource};
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

/// A sortable field value extracted from an entity.
///
/// String fields compare by codepoint order; numeric, boolean, and date
/// fields compare by underlying value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    /// A text field.
    Text(&'a str),
    /// An integer field (counts, amounts in minor units).
    Integer(i64),
    /// A boolean flag.
    Boolean(bool),
    /// A calendar date.
    Date(NaiveDate),
    /// A UTC timestamp.
    Timestamp(DateTime<Utc>),
}

impl SortValue<'_> {
    /// Compares two sort values, smaller-first.
    ///
    /// A fixed sort key always yields the same variant for every item, so
    /// mixed-variant comparisons only order by variant as a safety net.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Boolean(a), Self::Boolean(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }

    const fn variant_rank(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Integer(_) => 1,
            Self::Boolean(_) => 2,
            Self::Date(_) => 3,
            Self::Timestamp(_) => 4,
        }
    }
}

/// A domain entity that can be managed through the generic list controller.
pub trait Listable {
    /// The typed sort keys this entity supports.
    type SortKey: Copy + Eq + std::fmt::Debug;

    /// Returns the entity's unique identifier.
    fn id(&self) -> &EntityId;

    /// Returns the text fields a keyword filter matches against.
    ///
    /// The field set is fixed per entity type; keyword matching is
    /// case-insensitive substring containment.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Extracts the sortable value for a sort key.
    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_>;
}

/// A listable entity whose status is managed by the workflow engine.
pub trait Transitionable: Listable {
    /// The status state machine governing this entity.
    type Status: StatusMachine;

    /// Returns the entity's current status.
    fn status(&self) -> Self::Status;

    /// Replaces the entity's status after a confirmed transition.
    fn set_status(&mut self, status: Self::Status);

    /// Returns the REST resource this entity lives under.
    fn resource() -> Resource;
}
