//! A generic radix-tree router: maps URL-style path patterns to opaque
//! payloads, with support for named parameters (`:name`) and catch-all
//! globs (`*name`).
//!
//! Build a [`Tree`] once during startup with [`Tree::add`], then call
//! [`Tree::find`] per request from as many readers as you like; the tree
//! is never mutated by a lookup.

mod error;
mod result;
mod tree;

#[doc(hidden)]
mod node;

#[doc(hidden)]
mod utils;

pub use crate::error::InsertError;
pub use crate::result::LookupResult;
pub use crate::tree::Tree;

/// Alias kept for callers coming from HTTP-router terminology.
pub type Router<T> = crate::tree::Tree<T>;
