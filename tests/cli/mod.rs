//! CLI command integration tests
//!
//! Verifies each subcommand across output formats (text, toon, json).

pub mod actions_tests;
pub mod analyze_all_tests;
pub mod check_tests;
pub mod fix_tests;
pub mod ignore_tests;
