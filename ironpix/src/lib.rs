/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # IronPix
//!
//! A PIX BR Code (EMV MPM) payload encoder for Rust.
//!
//! IronPix builds the "copia e cola" text behind PIX QR codes: an ordered
//! tree of tagged fields serialized to tag-length-value text with a
//! CRC-16/CCITT-FALSE trailer, ready to hand to any barcode image library.
//!
//! ## Features
//!
//! - **Ordered field trees**: insertion order is preserved for canonical,
//!   interoperable payloads
//! - **Text normalization**: accent folding and symbol stripping matching
//!   deployed payload generators
//! - **Fail-fast validation**: oversize values abort the encode instead of
//!   truncating into a corrupt payload
//!
//! ## Quick Start
//!
//! ```rust
//! use ironpix::prelude::*;
//!
//! let payload = PixPayload::new(
//!     "42a57095-84f3-4a42-b9fb-d08935c86f47",
//!     "RENATO MONTEIRO BATISTA",
//!     "NATAL",
//! )
//! .with_amount(Amount::coerce("10.00"));
//!
//! let encoded = payload.encode().unwrap();
//! assert!(encoded.starts_with("000201"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Field tree, amount and error definitions
//! - [`tlv`]: Tag-length-value encoding, checksum and normalization
//! - [`payload`]: High-level payload builder and the renderer seam

pub mod core {
    //! Field tree, amount and error definitions.
    pub use ironpix_core::*;
}

pub mod tlv {
    //! Tag-length-value encoding, checksum and normalization.
    pub use ironpix_tlv::*;
}

pub mod payload {
    //! High-level payload builder and the renderer seam.
    pub use ironpix_payload::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use ironpix_core::{
        Amount, EncodeError, FieldTag, FieldTree, FieldValue, PixError, Result, tags,
    };

    // Tag-length-value encoding
    pub use ironpix_tlv::{MAX_VALUE_LEN, crc16_ccitt_false, encode, format_crc16, normalize};

    // Payload
    pub use ironpix_payload::{ImageRenderer, NoOpRenderer, PixPayload, RenderError};
}
