// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ColorStock, VehicleStock};

#[test]
fn test_aggregate_sums_all_pools() {
    let stock: VehicleStock = VehicleStock::new(vec![
        ColorStock::new("red", 100),
        ColorStock::new("blue", 20),
        ColorStock::new("white", 5),
    ]);
    assert_eq!(stock.aggregate(), 125);
}

#[test]
fn test_pool_returns_single_color_quantity() {
    let stock: VehicleStock =
        VehicleStock::new(vec![ColorStock::new("red", 100), ColorStock::new("blue", 20)]);
    assert_eq!(stock.pool("blue"), 20);
}

#[test]
fn test_pool_returns_zero_for_missing_color() {
    let stock: VehicleStock = VehicleStock::new(vec![ColorStock::new("red", 100)]);
    assert_eq!(stock.pool("green"), 0);
}

#[test]
fn test_available_dispatches_on_color_constraint() {
    let stock: VehicleStock =
        VehicleStock::new(vec![ColorStock::new("red", 100), ColorStock::new("blue", 20)]);
    assert_eq!(stock.available(Some("red")), 100);
    assert_eq!(stock.available(None), 120);
}

#[test]
fn test_empty_stock_has_zero_availability() {
    let stock: VehicleStock = VehicleStock::default();
    assert_eq!(stock.available(None), 0);
    assert_eq!(stock.available(Some("red")), 0);
}
