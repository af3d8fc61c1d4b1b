//! Payloads exchanged with the tokenization API.
//!
//! Field names follow the API's camelCase JSON. Unset optional fields are
//! omitted from request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Envelope wrapping every API response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub data: T,
}

/// Account type wire code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountType(pub i32);

/// Asset type wire code of a retail wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetType(pub i32);

/// Blockchain wire code, used as path segment when creating a single wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blockchain(pub i32);

/// Personal data of a customer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_iso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Body of a create customer call.
///
/// When `id` is set the customer is created under that id, the call fails if
/// it is already used.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(flatten)]
    pub details: CustomerDetails,
}

/// Body of an update customer call.
pub type UpdateCustomerAccount = CustomerDetails;

/// Customer as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccount {
    pub id: Uuid,
    #[serde(flatten)]
    pub details: CustomerDetails,
}

/// Passphrase protecting a customer's retail wallets.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAccessCredentials {
    pub passphrase: String,
    /// Only required when the API is configured for key files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file_content: Option<String>,
}

impl SimpleAccessCredentials {
    /// Credentials consisting of a passphrase only.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
            key_file_content: None,
        }
    }
}

impl std::fmt::Debug for SimpleAccessCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAccessCredentials")
            .field("passphrase", &tokenization_core::utils::Redact::from(&self.passphrase))
            .field(
                "key_file_content",
                &tokenization_core::utils::Redact::from(&self.key_file_content),
            )
            .finish()
    }
}

/// Body of an opt-in call for a tokenized asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailWalletOptIn {
    pub tokenized_asset_id: Uuid,
    pub credentials: SimpleAccessCredentials,
}

/// Retail wallet as returned by the API.
///
/// Fields the client does not model are kept in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailWallet {
    pub id: Uuid,
    pub asset_type: AssetType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// KYC details of a customer.
///
/// The accepted fields depend on the KYC provider configured for the API,
/// they are sent as given.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KycData {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl KycData {
    /// Set a field, replacing any previous value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// Body of a retail wallet access reset.
///
/// Carries the recovery material obtained from
/// [`Client::initiate_retail_wallet_recovery`](crate::Client::initiate_retail_wallet_recovery)
/// together with the new passphrase.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRetailWalletAccessCredentials {
    pub credentials: SimpleAccessCredentials,
    #[serde(flatten)]
    pub recovery: Map<String, Value>,
}

impl ResetRetailWalletAccessCredentials {
    /// Reset the passphrase using the material of `recovery`.
    ///
    /// A recovery that is not a JSON object contributes no fields.
    pub fn new(recovery: &RetailWalletSeedRecovery, credentials: SimpleAccessCredentials) -> Self {
        Self {
            credentials,
            recovery: recovery.0.as_object().cloned().unwrap_or_default(),
        }
    }
}

impl std::fmt::Debug for ResetRetailWalletAccessCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetRetailWalletAccessCredentials")
            .field("credentials", &self.credentials)
            .field("recovery", &self.recovery.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// One-time recovery material returned when a wallet recovery is initiated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RetailWalletSeedRecovery(pub Value);
