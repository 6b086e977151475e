#![cfg(test)]
use tidy_common::error::LessonError;
use tidy_core::comments::calculate_total;
use tidy_core::filters::get_positive_numbers;
use tidy_core::shipping::calculate_shipping_cost;

#[test]
fn total_with_tax_matches_lesson_example() {
    let total = calculate_total(100.0, 0.15).expect("valid inputs must not fail");
    assert_eq!(total, 115.0);
}

#[test]
fn total_rejects_out_of_range_inputs() {
    for (price, tax_rate) in [(-1.0, 0.1), (10.0, 1.5)] {
        let result = calculate_total(price, tax_rate);
        assert!(
            matches!(result, Err(LessonError::InvalidArgument(_))),
            "expected InvalidArgument for ({price}, {tax_rate}), got {result:?}"
        );
    }
}

#[test]
fn shipping_tiers() {
    assert_eq!(calculate_shipping_cost(60.0, 50.0, false), 0.0);
    assert_eq!(calculate_shipping_cost(10.0, 20.0, true), (5.0 + 1.0) * 2.5);
}

#[test]
fn positive_filter_preserves_order() {
    assert_eq!(get_positive_numbers(&[-2, -1, 0, 1, 2]), vec![1, 2]);
}
