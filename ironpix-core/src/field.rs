/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field types for EMV MPM payloads.
//!
//! This module provides:
//! - [`FieldTag`]: Type-safe wrapper for two-digit EMV field tags
//! - [`FieldValue`]: A scalar text value or a nested field group
//! - [`FieldTree`]: Insertion-ordered mapping of tags to values
//! - [`tags`]: Well-known tags of the PIX BR Code layout

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// EMV field tag number.
///
/// Tags are two-digit decimal identifiers (0-99) rendered zero-padded in the
/// encoded payload. A tag uniquely identifies a field within its parent tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldTag(u8);

impl FieldTag {
    /// Highest tag representable in the two-digit encoding.
    pub const MAX: u8 = 99;

    /// Creates a new field tag.
    ///
    /// # Arguments
    /// * `tag` - The tag number (must be 0-99)
    #[inline]
    #[must_use]
    pub const fn new(tag: u8) -> Self {
        debug_assert!(tag <= Self::MAX);
        Self(tag)
    }

    /// Returns the raw tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns true if the tag fits the two-digit encoding.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 <= Self::MAX
    }
}

impl From<u8> for FieldTag {
    fn from(tag: u8) -> Self {
        Self(tag)
    }
}

impl From<FieldTag> for u8 {
    fn from(tag: FieldTag) -> Self {
        tag.0
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Well-known tags of the PIX BR Code (EMV MPM) layout.
pub mod tags {
    use super::FieldTag;

    /// Payload Format Indicator (00), fixed value "01".
    pub const PAYLOAD_FORMAT_INDICATOR: FieldTag = FieldTag::new(0);
    /// Merchant Account Information template (26).
    pub const MERCHANT_ACCOUNT_INFO: FieldTag = FieldTag::new(26);
    /// Merchant Category Code (52), "0000" or an ISO 18245 MCC.
    pub const MERCHANT_CATEGORY_CODE: FieldTag = FieldTag::new(52);
    /// Transaction currency (53), ISO 4217 numeric ("986" = BRL).
    pub const TRANSACTION_CURRENCY: FieldTag = FieldTag::new(53);
    /// Transaction amount (54), fixed-point with two decimals.
    pub const TRANSACTION_AMOUNT: FieldTag = FieldTag::new(54);
    /// Country code (58), ISO 3166-1 alpha-2.
    pub const COUNTRY_CODE: FieldTag = FieldTag::new(58);
    /// Merchant name (59).
    pub const MERCHANT_NAME: FieldTag = FieldTag::new(59);
    /// Merchant city (60).
    pub const MERCHANT_CITY: FieldTag = FieldTag::new(60);
    /// Additional Data Field template (62).
    pub const ADDITIONAL_DATA: FieldTag = FieldTag::new(62);
    /// CRC (63), the reserved checksum trailer.
    pub const CRC: FieldTag = FieldTag::new(63);

    /// Globally Unique Identifier (26-00), fixed value "BR.GOV.BCB.PIX".
    pub const GUI: FieldTag = FieldTag::new(0);
    /// Recipient PIX key (26-01): EVP, e-mail, CPF or CNPJ.
    pub const PIX_KEY: FieldTag = FieldTag::new(1);
    /// Optional transaction description (26-02).
    pub const DESCRIPTION: FieldTag = FieldTag::new(2);
    /// Reference label / transaction id (62-05), "***" when auto-generated.
    pub const REFERENCE_LABEL: FieldTag = FieldTag::new(5);
}

/// A field value: scalar text or a nested group of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Scalar text value.
    Text(String),
    /// Nested field group, encoded recursively.
    Group(Box<FieldTree>),
}

impl FieldValue {
    /// Returns the scalar text, if this is a Text variant.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Group(_) => None,
        }
    }

    /// Returns the nested group, if this is a Group variant.
    #[must_use]
    pub fn as_group(&self) -> Option<&FieldTree> {
        match self {
            Self::Text(_) => None,
            Self::Group(g) => Some(g),
        }
    }

    /// Returns true if this value is a nested group.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<FieldTree> for FieldValue {
    fn from(value: FieldTree) -> Self {
        Self::Group(Box::new(value))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Group(g) => write!(f, "<group of {} fields>", g.len()),
        }
    }
}

/// Insertion-ordered mapping of tags to field values.
///
/// Order is significant: it is preserved in the encoded output so that field
/// positions match the published BR Code numbering. Setting an existing tag
/// replaces its value in place without disturbing the order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldTree {
    entries: SmallVec<[(FieldTag, FieldValue); 8]>,
}

impl FieldTree {
    /// Creates an empty field tree.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Sets a field value, replacing any existing value under the same tag.
    ///
    /// # Arguments
    /// * `tag` - The field tag
    /// * `value` - The scalar or group value
    pub fn set(&mut self, tag: FieldTag, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == tag) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((tag, value)),
        }
    }

    /// Sets a scalar text field.
    #[inline]
    pub fn set_text(&mut self, tag: FieldTag, value: impl Into<String>) {
        self.set(tag, FieldValue::Text(value.into()));
    }

    /// Sets a nested field group.
    #[inline]
    pub fn set_group(&mut self, tag: FieldTag, group: FieldTree) {
        self.set(tag, FieldValue::Group(Box::new(group)));
    }

    /// Returns the value under the given tag, if present.
    #[must_use]
    pub fn get(&self, tag: FieldTag) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, v)| v)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldTag, &FieldValue)> {
        self.entries.iter().map(|(t, v)| (*t, v))
    }

    /// Returns the number of fields in this tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tree has no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(FieldTag, FieldValue)> for FieldTree {
    fn from_iter<I: IntoIterator<Item = (FieldTag, FieldValue)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (tag, value) in iter {
            tree.set(tag, value);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tag() {
        let tag = FieldTag::new(54);
        assert_eq!(tag.value(), 54);
        assert!(tag.is_valid());
    }

    #[test]
    fn test_field_tag_display_zero_padded() {
        assert_eq!(FieldTag::new(0).to_string(), "00");
        assert_eq!(FieldTag::new(5).to_string(), "05");
        assert_eq!(FieldTag::new(63).to_string(), "63");
    }

    #[test]
    fn test_field_value_accessors() {
        let text = FieldValue::Text("NATAL".to_string());
        assert_eq!(text.as_text(), Some("NATAL"));
        assert!(text.as_group().is_none());
        assert!(!text.is_group());

        let group = FieldValue::from(FieldTree::new());
        assert!(group.is_group());
        assert!(group.as_text().is_none());
    }

    #[test]
    fn test_tree_preserves_insertion_order() {
        let mut tree = FieldTree::new();
        tree.set_text(FieldTag::new(53), "986");
        tree.set_text(FieldTag::new(0), "01");
        tree.set_text(FieldTag::new(26), "x");

        let order: Vec<u8> = tree.iter().map(|(t, _)| t.value()).collect();
        assert_eq!(order, vec![53, 0, 26]);
    }

    #[test]
    fn test_tree_set_replaces_in_place() {
        let mut tree = FieldTree::new();
        tree.set_text(FieldTag::new(0), "01");
        tree.set_text(FieldTag::new(58), "BR");
        tree.set_text(FieldTag::new(0), "02");

        assert_eq!(tree.len(), 2);
        assert_eq!(
            tree.get(FieldTag::new(0)).and_then(FieldValue::as_text),
            Some("02")
        );
        let order: Vec<u8> = tree.iter().map(|(t, _)| t.value()).collect();
        assert_eq!(order, vec![0, 58]);
    }

    #[test]
    fn test_tree_nested_group() {
        let mut account = FieldTree::new();
        account.set_text(tags::GUI, "BR.GOV.BCB.PIX");

        let mut tree = FieldTree::new();
        tree.set_group(tags::MERCHANT_ACCOUNT_INFO, account);

        let group = tree
            .get(tags::MERCHANT_ACCOUNT_INFO)
            .and_then(FieldValue::as_group)
            .unwrap();
        assert_eq!(
            group.get(tags::GUI).and_then(FieldValue::as_text),
            Some("BR.GOV.BCB.PIX")
        );
    }

    #[test]
    fn test_tree_from_iterator() {
        let tree: FieldTree = [
            (FieldTag::new(0), FieldValue::from("01")),
            (FieldTag::new(58), FieldValue::from("BR")),
        ]
        .into_iter()
        .collect();
        assert_eq!(tree.len(), 2);
        assert!(!tree.is_empty());
    }
}
