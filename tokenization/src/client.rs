use std::fmt::{Debug, Formatter};

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Method, Uri};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use tokenization_bloxxon::{
    Config, ConfigCredentialProvider, Credential, DefaultCredentialProvider, RequestSigner,
    StaticCredentialProvider, DEFAULT_ENDPOINT,
};
use tokenization_core::{Context, Error, OsEnv, ProvideCredential, Result, Signer};

use crate::models::*;

const API_PREFIX: &str = "/api/external/v1";

/// Client for the tokenization API.
///
/// The transport is owned by the client's [`Context`]; there is no shared
/// process-wide HTTP client. Cloning a client is cheap and shares the
/// transport and the resolved credential.
#[derive(Clone)]
pub struct Client {
    endpoint: String,
    signer: Signer<Credential>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for the default endpoint with a fixed api key and secret.
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            signer: Signer::new(
                default_context(),
                StaticCredentialProvider::new(api_key, api_secret),
                RequestSigner::new(),
            ),
        }
    }

    /// Create a [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get list of all customers.
    pub async fn get_customers(&self) -> Result<Vec<CustomerAccount>> {
        self.send(Method::GET, "/customers", None, None).await
    }

    /// Get customer by customer id.
    pub async fn get_customer(&self, customer_id: Uuid) -> Result<CustomerAccount> {
        self.send(Method::GET, &format!("/customers/{customer_id}"), None, None)
            .await
    }

    /// Search customers whose first name, last name or email starts with `search_text`.
    ///
    /// `take` bounds the result set, `skip` the number of results to skip.
    /// The API defaults are 50 and 0.
    pub async fn search_customers(
        &self,
        search_text: &str,
        take: u32,
        skip: u32,
    ) -> Result<Vec<CustomerAccount>> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("searchText", search_text)
            .append_pair("take", &take.to_string())
            .append_pair("skip", &skip.to_string())
            .finish();

        self.send(Method::GET, "/search", Some(query.as_str()), None)
            .await
    }

    /// Create a new customer and return its id.
    ///
    /// Fails if the email or the provided id is already used.
    pub async fn create_customer(&self, data: &CreateCustomerAccount) -> Result<Uuid> {
        self.send(Method::POST, "/customers", None, Some(json_body(data)?))
            .await
    }

    /// Update customer details and return the customer id.
    pub async fn update_customer(
        &self,
        customer_id: Uuid,
        data: &UpdateCustomerAccount,
    ) -> Result<Uuid> {
        self.send(
            Method::PUT,
            &format!("/customers/{customer_id}"),
            None,
            Some(json_body(data)?),
        )
        .await
    }

    /// Update customer KYC details.
    pub async fn update_customer_kyc_data(
        &self,
        customer_id: Uuid,
        data: &KycData,
    ) -> Result<bool> {
        self.send(
            Method::PUT,
            &format!("/customers/{customer_id}/kyc"),
            None,
            Some(json_body(data)?),
        )
        .await
    }

    /// Get all retail wallets of a customer.
    pub async fn get_retail_wallets(&self, customer_id: Uuid) -> Result<Vec<RetailWallet>> {
        self.send(
            Method::GET,
            &format!("/customers/{customer_id}/retail-wallets"),
            None,
            None,
        )
        .await
    }

    /// Create wallets on all supported blockchains for a customer.
    ///
    /// Existing wallets are returned as they are.
    pub async fn create_retail_wallets(
        &self,
        customer_id: Uuid,
        credentials: &SimpleAccessCredentials,
    ) -> Result<Vec<RetailWallet>> {
        self.send(
            Method::POST,
            &format!("/customers/{customer_id}/retail-wallets"),
            None,
            Some(json_body(credentials)?),
        )
        .await
    }

    /// Create a wallet on one blockchain for a customer.
    pub async fn create_retail_wallet(
        &self,
        customer_id: Uuid,
        credentials: &SimpleAccessCredentials,
        blockchain: Blockchain,
    ) -> Result<RetailWallet> {
        self.send(
            Method::PUT,
            &format!("/customers/{customer_id}/retail-wallets/{}", blockchain.0),
            None,
            Some(json_body(credentials)?),
        )
        .await
    }

    /// Opt a specific retail wallet in to a tokenized asset.
    pub async fn create_wallet_opt_in(
        &self,
        customer_id: Uuid,
        wallet_id: Uuid,
        data: &RetailWalletOptIn,
    ) -> Result<bool> {
        self.send(
            Method::POST,
            &format!("/customers/{customer_id}/retail-wallets/{wallet_id}/opt-in"),
            None,
            Some(json_body(data)?),
        )
        .await
    }

    /// Opt a customer in to a tokenized asset.
    pub async fn create_customer_opt_in(
        &self,
        customer_id: Uuid,
        data: &RetailWalletOptIn,
    ) -> Result<bool> {
        self.send(
            Method::POST,
            &format!("/customers/{customer_id}/opt-in"),
            None,
            Some(json_body(data)?),
        )
        .await
    }

    /// Start the retail wallet recovery and return the one-time recovery material.
    pub async fn initiate_retail_wallet_recovery(
        &self,
        customer_id: Uuid,
    ) -> Result<RetailWalletSeedRecovery> {
        self.send(
            Method::POST,
            &format!("/customers/{customer_id}/retail-wallets/recovery"),
            None,
            None,
        )
        .await
    }

    /// Reset the passphrase of a customer's retail wallets.
    pub async fn recover_retail_wallet_access(
        &self,
        customer_id: Uuid,
        data: &ResetRetailWalletAccessCredentials,
    ) -> Result<bool> {
        self.send(
            Method::PUT,
            &format!("/customers/{customer_id}/retail-wallets/recovery"),
            None,
            Some(json_body(data)?),
        )
        .await
    }

    /// Check whether `passphrase` unlocks the customer's retail wallets.
    pub async fn check_retail_wallet_passphrase(
        &self,
        customer_id: Uuid,
        passphrase: &str,
    ) -> Result<bool> {
        self.send(
            Method::POST,
            &format!("/customers/{customer_id}/retail-wallets/check-passphrase"),
            None,
            Some(json_body(&SimpleAccessCredentials::new(passphrase))?),
        )
        .await
    }

    /// Build, sign and send a request, then decode the `data` of the response.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let mut uri = format!("{}{API_PREFIX}{path}", self.endpoint);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            uri.push('?');
            uri.push_str(query);
        }

        let mut builder = http::Request::builder()
            .method(method)
            .uri(uri)
            .header(ACCEPT, "application/json");
        let body = match body {
            Some(body) => {
                builder = builder.header(CONTENT_TYPE, "application/json; charset=utf-8");
                Bytes::from(body)
            }
            None => Bytes::new(),
        };

        let mut req = builder.body(body)?;
        self.signer.sign_request(&mut req).await?;

        debug!("sending {} {}", req.method(), req.uri());
        let resp = self.signer.context().http_send(req).await?;
        let status = resp.status();
        debug!("received {status}");

        if !status.is_success() {
            return Err(Error::unexpected(format!(
                "api responded with {status}: {}",
                String::from_utf8_lossy(resp.body())
            ))
            .with_status(status));
        }

        let envelope: ApiResponse<T> = serde_json::from_slice(resp.body())
            .map_err(|e| Error::unexpected("failed to decode api response").with_source(e))?;
        Ok(envelope.data)
    }
}

fn json_body(data: &impl Serialize) -> Result<Vec<u8>> {
    serde_json::to_vec(data)
        .map_err(|e| Error::request_invalid("failed to encode request body").with_source(e))
}

#[cfg(feature = "default-context")]
fn default_context() -> Context {
    Context::new()
        .with_http_send(tokenization_http_send_reqwest::ReqwestHttpSend::default())
        .with_env(OsEnv)
}

#[cfg(not(feature = "default-context"))]
fn default_context() -> Context {
    Context::new().with_env(OsEnv)
}

/// Builder for [`Client`].
///
/// Values not set explicitly are read from the environment, see [`Config`].
#[derive(Default)]
pub struct ClientBuilder {
    config: Config,
    context: Option<Context>,
    provider: Option<Box<dyn ProvideCredential<Credential = Credential>>>,
}

impl Debug for ClientBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("context", &self.context)
            .field("provider", &self.provider)
            .finish()
    }
}

impl ClientBuilder {
    /// Set the public api key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = self.config.with_api_key(api_key);
        self
    }

    /// Set the api secret.
    pub fn api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.config = self.config.with_api_secret(api_secret);
        self
    }

    /// Set the endpoint, for example `https://localhost:4447`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config = self.config.with_endpoint(endpoint);
        self
    }

    /// Replace the whole config.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Use the given context, and so its transport and env, instead of the default one.
    pub fn context(mut self, ctx: Context) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Resolve the credential with `provider` instead of the configured key and secret.
    ///
    /// Errors returned by the provider are passed through to the failing call.
    pub fn credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the client.
    ///
    /// Fails with [`ErrorKind::ConfigInvalid`](tokenization_core::ErrorKind::ConfigInvalid)
    /// if the endpoint is not an absolute http(s) url, or if neither a
    /// credential provider nor both api key and secret are available.
    pub fn build(self) -> Result<Client> {
        let ctx = self.context.unwrap_or_else(default_context);
        let config = self.config.clone().from_env(&ctx);

        let endpoint = config.endpoint_or_default().trim_end_matches('/').to_string();
        let uri: Uri = endpoint.parse().map_err(|e| {
            Error::config_invalid(format!("invalid endpoint {endpoint:?}")).with_source(e)
        })?;
        if !matches!(uri.scheme_str(), Some("http") | Some("https")) || uri.authority().is_none()
        {
            return Err(Error::config_invalid(format!(
                "endpoint {endpoint:?} must be an absolute http(s) url"
            )));
        }

        let provider: Box<dyn ProvideCredential<Credential = Credential>> = match self.provider {
            Some(provider) => provider,
            None if config.api_key.is_some() && config.api_secret.is_some() => Box::new(
                DefaultCredentialProvider::new()
                    .push_front(ConfigCredentialProvider::new(Arc::new(self.config))),
            ),
            None => {
                return Err(Error::config_invalid(
                    "api key and api secret must be set",
                ))
            }
        };

        debug!("building client for {endpoint}");
        Ok(Client {
            endpoint,
            signer: Signer::new(ctx, provider, RequestSigner::new()),
        })
    }
}
