//! Cross-crate tests driving `tidy-core` through `tidy-common` ports.

mod files;
mod lessons;
mod orders;
mod pricing;
