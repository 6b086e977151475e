//! # Lesson Models
//!
//! The entities and value holders the lessons operate on.
//!
//! * [`account::Account`]: a user account with an activity flag and a permission set.
//! * [`order::Order`]: an order with its customer, items and running total.
//! * [`question::Question`]: a graded quiz answer.

pub mod account;
pub mod order;
pub mod question;
