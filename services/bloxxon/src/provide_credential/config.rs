use async_trait::async_trait;
use std::sync::Arc;
use tokenization_core::{Context, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider loads the credential from a [`Config`].
///
/// Values missing from the config are looked up in the environment.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new provider via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        if let (Some(key), Some(secret)) = (config.api_key, config.api_secret) {
            return Ok(Some(Credential::new(key, secret)));
        }

        Ok(None)
    }
}
