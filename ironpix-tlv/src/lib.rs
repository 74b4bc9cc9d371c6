/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # IronPix TLV
//!
//! Tag-length-value text encoding for the IronPix BR Code encoder.
//!
//! This crate serializes ordered field trees into the flat
//! `[tag][length][value]` text format used by PIX "copia e cola" payloads,
//! with the CRC-16/CCITT-FALSE trailer appended on every encode.
//!
//! ## Features
//!
//! - **Structural recursion**: nested field groups encode as
//!   length-prefixed sub-payloads
//! - **Text normalization**: accent folding, supplementary-plane stripping
//!   and the narrow symbol filter applied to every non-amount scalar
//! - **Fail-fast length validation**: oversize values abort the encode
//!   instead of truncating

pub mod checksum;
pub mod encoder;
pub mod normalize;

pub use checksum::{crc16_ccitt_false, format_crc16};
pub use encoder::{MAX_VALUE_LEN, encode};
pub use normalize::normalize;
