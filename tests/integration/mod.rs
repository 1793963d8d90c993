//! Integration test modules

mod check_scenarios;
