#![deny(missing_docs)]
#![no_std]

//! Singly linked LIFO stack.
//!
//! Facade over `linkstack-core-rs`; re-exports the stack types so applications depend on a
//! single crate.

pub use linkstack_core_rs::collections::stack::{LinkedStack, Stack, StackError};


/// Returns the version of this crate as recorded in its package metadata.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
