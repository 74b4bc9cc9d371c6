/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # IronPix Core
//!
//! Core types and error definitions for the IronPix BR Code encoder.
//!
//! This crate provides the fundamental building blocks used across all
//! IronPix crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: `FieldTag`, `FieldValue`, `FieldTree` and the
//!   well-known PIX tags
//! - **Value types**: `Amount`, the fixed-point transaction amount
//!
//! ## Ordered Field Trees
//!
//! The encoder input is an insertion-ordered tree of tagged fields. Order is
//! preserved through encoding so that payloads stay canonical for
//! interoperability, even though each TLV record is self-delimiting.

pub mod error;
pub mod field;
pub mod types;

pub use error::{EncodeError, PixError, Result};
pub use field::{FieldTag, FieldTree, FieldValue, tags};
pub use types::Amount;
