/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the IronPix BR Code encoder.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all IronPix operations.

use crate::field::FieldTag;
use thiserror::Error;

/// Result type alias using [`PixError`] as the error type.
pub type Result<T> = std::result::Result<T, PixError>;

/// Top-level error type for all IronPix operations.
#[derive(Debug, Error)]
pub enum PixError {
    /// Error during payload encoding.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Errors that occur during TLV payload encoding.
///
/// An oversize value is a fatal input error: the two-digit length field
/// cannot represent it, and truncating would produce a corrupt payload.
/// The encoder aborts the whole operation instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Field value exceeds the two-digit length-field capacity.
    #[error("value too long for tag {tag}: {length} bytes exceeds max {max_length}")]
    ValueTooLong {
        /// The tag of the offending field.
        tag: FieldTag,
        /// Actual byte length of the value.
        length: usize,
        /// Maximum representable length.
        max_length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::ValueTooLong {
            tag: FieldTag::new(59),
            length: 120,
            max_length: 99,
        };
        assert_eq!(
            err.to_string(),
            "value too long for tag 59: 120 bytes exceeds max 99"
        );
    }

    #[test]
    fn test_encode_error_display_pads_tag() {
        let err = EncodeError::ValueTooLong {
            tag: FieldTag::new(5),
            length: 100,
            max_length: 99,
        };
        assert_eq!(
            err.to_string(),
            "value too long for tag 05: 100 bytes exceeds max 99"
        );
    }

    #[test]
    fn test_pix_error_from_encode() {
        let encode_err = EncodeError::ValueTooLong {
            tag: FieldTag::new(26),
            length: 150,
            max_length: 99,
        };
        let pix_err: PixError = encode_err.clone().into();
        assert!(matches!(pix_err, PixError::Encode(e) if e == encode_err));
    }
}
