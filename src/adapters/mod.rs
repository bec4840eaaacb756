//! Adapters implementing the port traits.
//!
//! `live` talks to the real disk; `memory` keeps a tree in memory for tests.

pub mod live;
pub mod memory;
