//! # Tidy Core
//!
//! The lessons themselves. Each module pairs one clean-code rule with small,
//! self-contained functions that follow it.
//!
//! ## Lessons
//! * **[`understandability`]**: positive conditionals.
//! * **[`comments`]**: doc comments instead of narrating comments.
//! * **[`shipping`]**: named constants instead of magic numbers.
//! * **[`filters`]**: intention-revealing iterator code.
//! * **[`accounts`]**: side effects pushed behind ports.
//! * **[`orders`]**: small functions with a single responsibility.
//! * **[`shapes`]**: polymorphism over conditionals.
//! * **[`error_handling`]**: context, logging and retries instead of swallowed errors.
//! * **[`boundaries`]**: naming boundary values once.
//! * **[`scoring`]**: the function behind the test-coverage lesson.
//! * **[`value_objects`]**: wrapping primitives that carry rules.
//! * **[`reports`]**: removing rigidity with an abstraction.
//! * **[`tennis`]**: the refactored tennis kata.
//!
//! ## Support
//! * **[`catalog`]**: the prose of every lesson (rule, bad example, good example).
//! * **[`adapters`]**: in-memory implementations of `tidy_common::ports`.

pub mod accounts;
pub mod adapters;
pub mod boundaries;
pub mod catalog;
pub mod comments;
pub mod error_handling;
pub mod filters;
pub mod orders;
pub mod reports;
pub mod scoring;
pub mod shapes;
pub mod shipping;
pub mod tennis;
pub mod understandability;
pub mod value_objects;
