//! Tokenization API request signer.
use http::header::AUTHORIZATION;
use http::HeaderValue;
use log::debug;
use tokenization_core::hash::base64_hmac_sha256;
use tokenization_core::{Context, Error, Result, SignRequest, SigningRequest};

use crate::constants::AUTH_SCHEME;
use crate::credential::Credential;

/// RequestSigner attaches the tokenization API `Authorization` header.
///
/// It is stateless: each call builds the message, computes the HMAC with a
/// fresh context and drops everything once the header is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let mut req = SigningRequest::build(parts)?;
        let signed = sign(&req, &cred.api_secret)
            .and_then(|signature| attach_auth_header(&mut req, &cred.api_key, &signature));

        // Headers live in `req` until applied, hand them back even on failure.
        req.apply(parts)?;
        signed
    }
}

/// Construct the message to sign.
///
/// ## Format
///
/// ```text
/// BodyLength + Method + Path + lowercase(Query)
/// ```
///
/// - `BodyLength` is the decimal content length, `0` without a body.
/// - `Method` and `Path` are used exactly as carried by the request.
/// - `Query` keeps its leading `?` and is the only lower-cased part.
///
/// The server verifies against this exact layout, including the lower-casing
/// applying to the query alone.
pub fn canonical_message(req: &SigningRequest) -> String {
    let query = req.query.to_lowercase();
    let body_length = req.body_length.to_string();

    let mut s = String::with_capacity(
        body_length.len() + req.method.as_str().len() + req.path.len() + query.len(),
    );
    s.push_str(&body_length);
    s.push_str(req.method.as_str());
    s.push_str(&req.path);
    s.push_str(&query);
    s
}

/// Compute the base64 encoded HMAC-SHA256 signature of the request.
///
/// An empty secret is accepted and yields a deterministic, weak signature.
pub fn sign(req: &SigningRequest, secret: &str) -> Result<String> {
    let string_to_sign = canonical_message(req);
    debug!("string to sign: {}", &string_to_sign);

    base64_hmac_sha256(secret.as_bytes(), string_to_sign.as_bytes())
}

/// Set `Authorization: basic {api_key}:{signature}` on the request.
///
/// Any existing `Authorization` header is replaced.
pub fn attach_auth_header(req: &mut SigningRequest, api_key: &str, signature: &str) -> Result<()> {
    let mut value: HeaderValue = format!("{AUTH_SCHEME} {api_key}:{signature}").parse()?;
    value.set_sensitive(true);

    req.headers.insert(AUTHORIZATION, value);
    Ok(())
}
