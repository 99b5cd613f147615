//! Integration test suite.
//!
//! 1. Loading from CSV files and configuration
//! 2. Cross-layout equivalence on generated data

pub mod csv_pipeline;
pub mod layout_equivalence;
