//! Scorekeeper test support utilities
//!
//! Shared by the library's unit tests, its integration tests and the CLI
//! tests so that every test binary configures logging the same way.

pub mod logging;
