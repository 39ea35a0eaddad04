//! Resolv IR - shared data types
//!
//! This crate contains the types every other resolv crate operates on:
//! - [`Value`]: the generic tagged tree produced by format adapters
//! - [`Error`] / [`ErrorKind`]: the error type with an inspectable kind
//!
//! # Design Philosophy
//!
//! - **Read-only trees**: nothing in the resolution pipeline mutates a `Value`.
//!   Navigation hands out borrows into the tree.
//! - **Kinds, not strings**: callers match on [`ErrorKind`]; messages are for humans.
//! - **One adapter path**: `Value` implements `serde::Deserialize`, so every
//!   self-describing format decodes into the same tree.

mod error;
mod value;

pub use error::{Error, ErrorKind, Result};
pub use value::{Mapping, Value};
