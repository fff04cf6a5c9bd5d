//! Testing utilities and mock implementations
//!
//! Mock handlers that record what they were asked to do, so tests can assert
//! on handler invocations as well as on emitted notices.

pub mod mocks;

pub use mocks::*;
