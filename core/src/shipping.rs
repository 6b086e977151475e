//! Tiered shipping cost. The numbers are illustrative, but each one has a name.

pub const BASE_SHIPPING_COST: f64 = 5.0;
pub const COST_PER_DISTANCE_UNIT: f64 = 0.05;
pub const EXPRESS_MULTIPLIER: f64 = 2.5;
/// Orders heavier than this ship free when they are also close by.
pub const FREE_SHIPPING_MIN_WEIGHT: f64 = 50.0;
pub const FREE_SHIPPING_MAX_DISTANCE: f64 = 100.0;

pub fn calculate_shipping_cost(weight: f64, distance: f64, is_express: bool) -> f64 {
    let standard_cost = BASE_SHIPPING_COST + distance * COST_PER_DISTANCE_UNIT;

    if is_express {
        return standard_cost * EXPRESS_MULTIPLIER;
    }
    if qualifies_for_free_shipping(weight, distance) {
        return 0.0;
    }
    standard_cost
}

fn qualifies_for_free_shipping(weight: f64, distance: f64) -> bool {
    weight > FREE_SHIPPING_MIN_WEIGHT && distance < FREE_SHIPPING_MAX_DISTANCE
}
