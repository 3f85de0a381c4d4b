//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the full app through the acceptance harness or poke at
//! internal state that the public API does not expose.

// Harness-based acceptance tests
mod acceptance_scroll;
mod view_snapshots;
