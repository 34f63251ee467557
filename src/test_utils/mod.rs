//! Test utilities for unit and HTTP-level testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory implementations of every port (repos, file store, rate limiter)
//! - `TestAppStateBuilder` for driving the HTTP routers with axum-test

mod app_state_builder;
mod catalog_mocks;
mod factories;
mod infra_mocks;
mod order_mocks;

pub use app_state_builder::*;
pub use catalog_mocks::*;
pub use factories::*;
pub use infra_mocks::*;
pub use order_mocks::*;
