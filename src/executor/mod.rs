//! The executor abstraction: an opaque async collaborator.

use std::fmt::Display;

use anyhow::Result;

pub mod command;

/// A single asynchronous operation: accept a string, eventually produce a
/// printable value, or fail.
///
/// The entry routine depends only on this trait, so any substitute
/// implementation can stand in for the real executor (in tests or when
/// embedding the routine in another harness). Nothing here constrains what
/// the operation actually does; that contract belongs to whoever supplies
/// the implementation.
#[allow(async_fn_in_trait)]
pub trait Executor {
    type Output: Display;

    async fn execute(&self, input: &str) -> Result<Self::Output>;
}
