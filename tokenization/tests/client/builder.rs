use http::header::AUTHORIZATION;
use pretty_assertions::assert_eq;
use tokenization::bloxxon::{
    StaticCredentialProvider, DEFAULT_ENDPOINT, TOKENIZATION_API_KEY, TOKENIZATION_API_SECRET,
    TOKENIZATION_ENDPOINT,
};
use tokenization::bloxxon::Credential;
use tokenization::{Error, ErrorKind, ProvideCredential};

use super::*;

#[derive(Debug)]
struct UnreachableVault;

#[async_trait]
impl ProvideCredential for UnreachableVault {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Err(Error::config_invalid("vault unreachable"))
    }
}

fn env_context(http: MockHttpSend, envs: &[(&str, &str)]) -> Context {
    Context::new().with_http_send(http).with_env(StaticEnv {
        envs: envs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    })
}

#[test]
fn test_build_without_credential() {
    let err = Client::builder()
        .context(test_context(MockHttpSend::ok("")))
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

    let err = Client::builder()
        .api_key(API_KEY)
        .context(test_context(MockHttpSend::ok("")))
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test]
fn test_build_rejects_invalid_endpoint() {
    for endpoint in ["not a url", "/relative/path", "ftp://some-url.de"] {
        let err = Client::builder()
            .api_key(API_KEY)
            .api_secret(SECRET)
            .endpoint(endpoint)
            .context(test_context(MockHttpSend::ok("")))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid, "endpoint {endpoint}");
    }
}

#[test]
fn test_build_defaults_and_trims_endpoint() {
    let client = Client::builder()
        .api_key(API_KEY)
        .api_secret(SECRET)
        .context(test_context(MockHttpSend::ok("")))
        .build()
        .unwrap();
    assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);

    let client = Client::builder()
        .api_key(API_KEY)
        .api_secret(SECRET)
        .endpoint("https://localhost:4447/")
        .context(test_context(MockHttpSend::ok("")))
        .build()
        .unwrap();
    assert_eq!(client.endpoint(), "https://localhost:4447");
}

#[tokio::test]
async fn test_build_from_env() -> anyhow::Result<()> {
    init_logger();
    let http = MockHttpSend::ok(r#"{"data":[]}"#);
    let ctx = env_context(
        http.clone(),
        &[
            (TOKENIZATION_API_KEY, "env-api-key"),
            (TOKENIZATION_API_SECRET, SECRET),
            (TOKENIZATION_ENDPOINT, "https://env-url.de"),
        ],
    );

    let client = Client::builder().context(ctx).build()?;
    assert_eq!(client.endpoint(), "https://env-url.de");
    client.get_customers().await?;

    let sent = http.sent();
    assert_eq!(
        sent[0].uri().to_string(),
        "https://env-url.de/api/external/v1/customers"
    );
    assert_eq!(
        sent[0].headers()[AUTHORIZATION],
        "basic env-api-key:YUNGA0gLdx5bJbm5Ym+7Q/N6ZaEUI+zyuFV0Lfob0GY="
    );
    Ok(())
}

#[tokio::test]
async fn test_explicit_values_win_over_env() -> anyhow::Result<()> {
    let http = MockHttpSend::ok(r#"{"data":[]}"#);
    let ctx = env_context(
        http.clone(),
        &[
            (TOKENIZATION_API_KEY, "env-api-key"),
            (TOKENIZATION_API_SECRET, "env-secret"),
        ],
    );

    let client = Client::builder()
        .api_key(API_KEY)
        .api_secret(SECRET)
        .endpoint(ENDPOINT)
        .context(ctx)
        .build()?;
    client.get_customers().await?;

    assert_eq!(
        http.sent()[0].headers()[AUTHORIZATION],
        "basic my-api-key:YUNGA0gLdx5bJbm5Ym+7Q/N6ZaEUI+zyuFV0Lfob0GY="
    );
    Ok(())
}

#[tokio::test]
async fn test_custom_credential_provider() -> anyhow::Result<()> {
    let http = MockHttpSend::ok(r#"{"data":[]}"#);

    let client = Client::builder()
        .endpoint(ENDPOINT)
        .context(test_context(http.clone()))
        .credential_provider(StaticCredentialProvider::new("provided-key", SECRET))
        .build()?;
    client.get_customers().await?;
    client.get_customers().await?;

    let sent = http.sent();
    assert_eq!(sent.len(), 2);
    for req in sent {
        assert_eq!(
            req.headers()[AUTHORIZATION],
            "basic provided-key:YUNGA0gLdx5bJbm5Ym+7Q/N6ZaEUI+zyuFV0Lfob0GY="
        );
    }
    Ok(())
}

#[test]
fn test_debug_redacts_secret() {
    let builder = Client::builder().api_key(API_KEY).api_secret(SECRET);
    assert!(!format!("{builder:?}").contains(SECRET));
}

#[tokio::test]
async fn test_credential_provider_error_is_returned() {
    let http = MockHttpSend::ok(r#"{"data":[]}"#);

    let client = Client::builder()
        .endpoint(ENDPOINT)
        .context(test_context(http.clone()))
        .credential_provider(UnreachableVault)
        .build()
        .unwrap();

    let err = client.get_customers().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert_eq!(err.message(), "vault unreachable");
    assert!(http.sent().is_empty());
}

#[tokio::test]
async fn test_explicit_key_with_secret_from_env() -> anyhow::Result<()> {
    let http = MockHttpSend::ok(r#"{"data":[]}"#);
    let ctx = env_context(
        http.clone(),
        &[
            (TOKENIZATION_API_KEY, "env-api-key"),
            (TOKENIZATION_API_SECRET, SECRET),
        ],
    );

    let client = Client::builder()
        .api_key(API_KEY)
        .endpoint(ENDPOINT)
        .context(ctx)
        .build()?;
    client.get_customers().await?;

    assert_eq!(
        http.sent()[0].headers()[AUTHORIZATION],
        "basic my-api-key:YUNGA0gLdx5bJbm5Ym+7Q/N6ZaEUI+zyuFV0Lfob0GY="
    );
    Ok(())
}
