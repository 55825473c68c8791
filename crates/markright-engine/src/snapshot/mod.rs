//! # Snapshot Testing Support
//!
//! Helpers for asserting on parsed trees.
//!
//! ## Modules
//!
//! - **`repr`**: renders a tree as stable, indented text, one node per line,
//!   used by tests and by `.mr` fixture files as the expected output
//! - **`invariants`**: structural checks on a tree (valid names, no empty
//!   paragraphs or block bodies), panicking on violation

pub mod invariants;
pub mod repr;

pub use invariants::check as invariants;
pub use repr::repr;
