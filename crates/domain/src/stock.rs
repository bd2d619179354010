// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-color stock pools for a vehicle SKU.
//!
//! Manufacturer stock is tracked per color. A distribution plan may be
//! constrained to one color's pool, or draw from the aggregate across all
//! pools. The true post-distribution quantity is always server-computed;
//! these figures are a read-through snapshot used for pre-flight checks.

use serde::{Deserialize, Serialize};

/// Available stock for a single color of a vehicle SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStock {
    /// The color code (e.g. "red", "midnight_blue").
    pub color: String,
    /// Units available in this pool.
    pub quantity: u32,
}

impl ColorStock {
    /// Creates a stock pool for one color.
    #[must_use]
    pub fn new(color: impl Into<String>, quantity: u32) -> Self {
        Self {
            color: color.into(),
            quantity,
        }
    }
}

/// The stock snapshot of a vehicle SKU, broken down by color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStock {
    /// The per-color pools.
    #[serde(default)]
    pub pools: Vec<ColorStock>,
}

impl VehicleStock {
    /// Creates a stock snapshot from per-color pools.
    #[must_use]
    pub const fn new(pools: Vec<ColorStock>) -> Self {
        Self { pools }
    }

    /// Returns the aggregate quantity across all pools.
    #[must_use]
    pub fn aggregate(&self) -> u64 {
        self.pools.iter().map(|p| u64::from(p.quantity)).sum()
    }

    /// Returns the quantity available in one color's pool.
    ///
    /// A color with no pool has zero availability.
    #[must_use]
    pub fn pool(&self, color: &str) -> u64 {
        self.pools
            .iter()
            .find(|p| p.color == color)
            .map_or(0, |p| u64::from(p.quantity))
    }

    /// Returns the quantity available under an optional color constraint.
    ///
    /// With a color, this is that pool's quantity; without, the aggregate
    /// across all pools.
    #[must_use]
    pub fn available(&self, color: Option<&str>) -> u64 {
        color.map_or_else(|| self.aggregate(), |c| self.pool(c))
    }
}
