use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
use bytes::Bytes;
use http::header::CONTENT_LENGTH;
use http::HeaderValue;
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// It resolves the credential through its provider on first use, keeps it for
/// the lifetime of the signer and hands it to the [`SignRequest`] hook for every
/// request. Cloning a signer shares the resolved credential.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// The context this signer was built with.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Sign the request in place.
    pub async fn sign(&self, req: &mut http::request::Parts) -> Result<()> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            let loaded = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, credential.as_ref())
            .await
    }

    /// Sign a request that carries its body.
    ///
    /// `Content-Length` is set from the body before signing, so the signed
    /// length always matches what goes on the wire. A request without body
    /// and without `Content-Length` is left as is.
    pub async fn sign_request(&self, req: &mut http::Request<Bytes>) -> Result<()> {
        let len = req.body().len();
        if len > 0 || req.headers().contains_key(CONTENT_LENGTH) {
            req.headers_mut().insert(CONTENT_LENGTH, HeaderValue::from(len));
        }

        let (mut parts, body) = std::mem::take(req).into_parts();
        let signed = self.sign(&mut parts).await;
        *req = http::Request::from_parts(parts, body);
        signed
    }
}
