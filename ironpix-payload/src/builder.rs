/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! PIX payload builder.
//!
//! This module assembles the canonical BR Code field tree from
//! application-level parameters (recipient key, merchant name, city, amount,
//! transaction id) and hands it to the TLV encoder.

use ironpix_core::error::Result;
use ironpix_core::field::{FieldTree, tags};
use ironpix_core::types::Amount;

/// Globally Unique Identifier of the PIX arrangement (field 26-00).
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

/// Reference label for auto-generated transaction ids (field 62-05).
pub const AUTO_REFERENCE_LABEL: &str = "***";

/// Default Merchant Category Code (field 52).
pub const DEFAULT_MCC: &str = "0000";

/// ISO 4217 numeric code for the Brazilian real (field 53).
pub const CURRENCY_BRL: &str = "986";

/// ISO 3166-1 alpha-2 country code for Brazil (field 58).
pub const COUNTRY_BR: &str = "BR";

/// Application-level description of a PIX charge.
///
/// Collects the parameters of a static BR Code and assembles the canonical
/// field tree. Defaults follow the published PIX initiation layout: MCC
/// `0000`, currency `986` (BRL), country `BR`, reference label `***`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixPayload {
    /// Recipient PIX key: EVP, e-mail, CPF or CNPJ (field 26-01).
    pub key: String,
    /// Beneficiary name (field 59).
    pub merchant_name: String,
    /// City where the transaction takes place (field 60).
    pub merchant_city: String,
    /// Transaction amount (field 54). When absent the payer app asks for
    /// the value.
    pub amount: Option<Amount>,
    /// Optional transaction description (field 26-02).
    pub description: Option<String>,
    /// Transaction id (field 62-05).
    pub reference_label: String,
    /// Merchant Category Code (field 52).
    pub merchant_category_code: String,
    /// ISO 4217 numeric transaction currency (field 53).
    pub currency: String,
    /// ISO 3166-1 alpha-2 country code (field 58).
    pub country: String,
}

impl PixPayload {
    /// Creates a payload description with required fields and PIX defaults.
    ///
    /// # Arguments
    /// * `key` - The recipient PIX key
    /// * `merchant_name` - The beneficiary name
    /// * `merchant_city` - The transaction city
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
            amount: None,
            description: None,
            reference_label: AUTO_REFERENCE_LABEL.to_string(),
            merchant_category_code: DEFAULT_MCC.to_string(),
            currency: CURRENCY_BRL.to_string(),
            country: COUNTRY_BR.to_string(),
        }
    }

    /// Sets the transaction amount.
    #[must_use]
    pub const fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the transaction description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the transaction id.
    #[must_use]
    pub fn with_reference_label(mut self, label: impl Into<String>) -> Self {
        self.reference_label = label.into();
        self
    }

    /// Sets the Merchant Category Code.
    #[must_use]
    pub fn with_merchant_category_code(mut self, mcc: impl Into<String>) -> Self {
        self.merchant_category_code = mcc.into();
        self
    }

    /// Sets the ISO 4217 numeric transaction currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the ISO 3166-1 alpha-2 country code.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Assembles the canonical BR Code field tree in the published layout order.
    #[must_use]
    pub fn field_tree(&self) -> FieldTree {
        let mut account = FieldTree::new();
        account.set_text(tags::GUI, PIX_GUI);
        account.set_text(tags::PIX_KEY, self.key.as_str());
        if let Some(description) = &self.description {
            account.set_text(tags::DESCRIPTION, description.as_str());
        }

        let mut additional = FieldTree::new();
        additional.set_text(tags::REFERENCE_LABEL, self.reference_label.as_str());

        let mut tree = FieldTree::new();
        tree.set_text(tags::PAYLOAD_FORMAT_INDICATOR, "01");
        tree.set_group(tags::MERCHANT_ACCOUNT_INFO, account);
        tree.set_text(tags::MERCHANT_CATEGORY_CODE, self.merchant_category_code.as_str());
        tree.set_text(tags::TRANSACTION_CURRENCY, self.currency.as_str());
        if let Some(amount) = self.amount {
            tree.set_text(tags::TRANSACTION_AMOUNT, amount.to_string());
        }
        tree.set_text(tags::COUNTRY_CODE, self.country.as_str());
        tree.set_text(tags::MERCHANT_NAME, self.merchant_name.as_str());
        tree.set_text(tags::MERCHANT_CITY, self.merchant_city.as_str());
        tree.set_group(tags::ADDITIONAL_DATA, additional);
        tree
    }

    /// Encodes the payload into its checksummed "copia e cola" text.
    ///
    /// # Errors
    /// Returns an encode error if any field value exceeds the two-digit
    /// length-field capacity.
    pub fn encode(&self) -> Result<String> {
        Ok(ironpix_tlv::encode(&self.field_tree())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironpix_core::field::FieldValue;

    fn canonical() -> PixPayload {
        PixPayload::new(
            "42a57095-84f3-4a42-b9fb-d08935c86f47",
            "RENATO MONTEIRO BATISTA",
            "NATAL",
        )
        .with_amount(Amount::coerce("10.00"))
    }

    #[test]
    fn test_payload_defaults() {
        let payload = PixPayload::new("key@example.com", "LOJA", "NATAL");
        assert_eq!(payload.merchant_category_code, DEFAULT_MCC);
        assert_eq!(payload.currency, CURRENCY_BRL);
        assert_eq!(payload.country, COUNTRY_BR);
        assert_eq!(payload.reference_label, AUTO_REFERENCE_LABEL);
        assert!(payload.amount.is_none());
        assert!(payload.description.is_none());
    }

    #[test]
    fn test_field_tree_order() {
        let tree = canonical().field_tree();
        let order: Vec<u8> = tree.iter().map(|(t, _)| t.value()).collect();
        assert_eq!(order, vec![0, 26, 52, 53, 54, 58, 59, 60, 62]);
    }

    #[test]
    fn test_field_tree_account_group() {
        let tree = canonical().with_description("Descricao").field_tree();
        let account = tree
            .get(tags::MERCHANT_ACCOUNT_INFO)
            .and_then(FieldValue::as_group)
            .unwrap();
        assert_eq!(
            account.get(tags::GUI).and_then(FieldValue::as_text),
            Some(PIX_GUI)
        );
        assert_eq!(
            account.get(tags::DESCRIPTION).and_then(FieldValue::as_text),
            Some("Descricao")
        );
    }

    #[test]
    fn test_field_tree_omits_amount_when_unset() {
        let tree = PixPayload::new("k", "N", "C").field_tree();
        assert!(tree.get(tags::TRANSACTION_AMOUNT).is_none());
    }

    #[test]
    fn test_encode_canonical() {
        let encoded = canonical().encode().unwrap();
        assert_eq!(
            encoded,
            "00020126580014BR.GOV.BCB.PIX013642a57095-84f3-4a42-b9fb-d08935c86f47\
             520400005303986540510.005802BR5923RENATO MONTEIRO BATISTA6005NATAL\
             62070503***6304E84C"
        );
    }

    #[test]
    fn test_encode_with_description() {
        let encoded = canonical().with_description("Descricao").encode().unwrap();
        assert_eq!(
            encoded,
            "00020126710014BR.GOV.BCB.PIX013642a57095-84f3-4a42-b9fb-d08935c86f47\
             0209Descricao520400005303986540510.005802BR5923RENATO MONTEIRO BATISTA\
             6005NATAL62070503***63045FDC"
        );
    }

    #[test]
    fn test_encode_oversize_key_fails() {
        let payload = PixPayload::new("k".repeat(120), "LOJA", "NATAL");
        assert!(payload.encode().is_err());
    }
}
