//! # Comments
//!
//! A doc comment states what a function does and what its inputs mean. Line
//! comments that narrate each statement ("calculate total including tax") add
//! nothing the code does not already say.

use tidy_common::error::{LessonError, Result};
use tracing::debug;

/// Calculate the total amount including tax.
///
/// # Arguments
/// * `price` - The base price of the item.
/// * `tax_rate` - The applicable tax rate, e.g. `0.15` for 15%.
///
/// # Returns
/// The price with tax applied. Inputs are not validated; see [`calculate_total`].
pub fn total_with_tax(price: f64, tax_rate: f64) -> f64 {
    price + price * tax_rate
}

/// Calculate the total amount including tax, rejecting nonsensical inputs.
///
/// # Errors
/// * [`LessonError::InvalidArgument`] when `price` is negative, NaN or infinite.
/// * [`LessonError::InvalidArgument`] when `tax_rate` is outside `[0, 1]`.
pub fn calculate_total(price: f64, tax_rate: f64) -> Result<f64> {
    if !price.is_finite() {
        return Err(LessonError::invalid_argument("Price must be a finite number"));
    }
    if price < 0.0 {
        return Err(LessonError::invalid_argument("Price cannot be negative"));
    }
    if !(0.0..=1.0).contains(&tax_rate) {
        return Err(LessonError::invalid_argument(
            "Tax rate must be between 0 and 1",
        ));
    }

    let total = total_with_tax(price, tax_rate);
    debug!(price, tax_rate, total, "calculated total");
    Ok(total)
}
