//! Common test utilities for bathygrid.
//!
//! This module provides shared grids and assertions for the integration tests.

pub mod assertions;
pub mod test_data;
