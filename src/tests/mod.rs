//! Scenario tests for the picker controller and registry.
//!
//! These drive pickers through in-memory host and view doubles and check
//! what each operation writes to them.

mod registry_tests;
mod support;
