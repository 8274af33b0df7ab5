//! Common test utilities for force-semicolon integration tests
//!
//! This module provides:
//! - `TestRepo` builder for throwaway workspaces
//! - Custom assertions for validating CLI output

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod assertions;
pub mod test_repo;

pub use assertions::*;
pub use test_repo::TestRepo;
