/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! TLV payload encoder.
//!
//! This module serializes an ordered [`FieldTree`] into the flat
//! `[2-digit tag][2-digit length][value]` text form of the BR Code, then
//! appends the CRC-16 checksum trailer. Encoding is a pure, synchronous,
//! single-call transformation: the checksum record is appended
//! unconditionally on every call, there is no separate finalize step.

use crate::checksum::{CRC_DIGEST_LEN, crc16_ccitt_false, format_crc16};
use crate::normalize::normalize;
use ironpix_core::error::EncodeError;
use ironpix_core::field::{FieldTag, FieldTree, FieldValue, tags};
use ironpix_core::types::Amount;

/// Maximum byte length a single encoded value may occupy. The two-digit
/// length field cannot represent more; larger values abort the encode.
pub const MAX_VALUE_LEN: usize = 99;

/// Encodes a field tree into the checksummed TLV payload text.
///
/// Fields are emitted in insertion order. Scalars under the transaction
/// amount tag (at any nesting level) are coerced to a two-decimal amount;
/// every other scalar passes through the normalization pipeline. Nested
/// groups are encoded recursively and length-prefixed as a whole.
///
/// # Arguments
/// * `tree` - The ordered field tree to serialize
///
/// # Returns
/// The complete payload, ending in the `6304`-prefixed CRC digest.
///
/// # Errors
/// Returns [`EncodeError::ValueTooLong`] if any value's encoded byte length
/// exceeds [`MAX_VALUE_LEN`]. The operation aborts immediately; no partial
/// or truncated payload is ever produced.
pub fn encode(tree: &FieldTree) -> Result<String, EncodeError> {
    let mut out = String::with_capacity(256);
    encode_into(tree, &mut out)?;

    // Checksum header: the CRC is computed over everything before the
    // digest, the record's own tag and length included.
    push_two_digits(&mut out, tags::CRC.value());
    push_two_digits(&mut out, CRC_DIGEST_LEN as u8);
    let crc = crc16_ccitt_false(out.as_bytes());
    out.push_str(&format_crc16(crc));

    Ok(out)
}

fn encode_into(tree: &FieldTree, out: &mut String) -> Result<(), EncodeError> {
    for (tag, value) in tree.iter() {
        match value {
            FieldValue::Text(text) => {
                let rendered = if tag == tags::TRANSACTION_AMOUNT {
                    Amount::coerce(text).to_string()
                } else {
                    normalize(text)
                };
                push_record(out, tag, &rendered)?;
            }
            FieldValue::Group(group) => {
                let mut inner = String::new();
                encode_into(group, &mut inner)?;
                push_record(out, tag, &inner)?;
            }
        }
    }
    Ok(())
}

fn push_record(out: &mut String, tag: FieldTag, value: &str) -> Result<(), EncodeError> {
    let length = value.len();
    if length > MAX_VALUE_LEN {
        return Err(EncodeError::ValueTooLong {
            tag,
            length,
            max_length: MAX_VALUE_LEN,
        });
    }
    push_two_digits(out, tag.value());
    push_two_digits(out, length as u8);
    out.push_str(value);
    Ok(())
}

fn push_two_digits(out: &mut String, n: u8) {
    out.push((b'0' + n / 10) as char);
    out.push((b'0' + n % 10) as char);
}
