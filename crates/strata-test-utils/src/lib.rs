//! Test fixtures and strategies for Strata development.
//!
//! [`fixtures`] builds matrices and neighbourhoods from ASCII art so tests
//! read like the levels they describe. [`strategies`] provides proptest
//! generators for cells and flag sets.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{context_from_rows, flag, geo_from_char, matrix_from_rows, solid_ring};
pub use strategies::{arb_geo, arb_run_cell, arb_stackables};
