//! Signer for the Bloxxon tokenization API.
//!
//! Every request sent to the API carries
//!
//! ```text
//! Authorization: basic <api_key>:<base64(hmac_sha256(api_secret, message))>
//! ```
//!
//! where `message` is the body length, the method, the path and the
//! lower-cased query concatenated without separators. See [`canonical_message`].
//!
//! ```no_run
//! use tokenization_bloxxon::{RequestSigner, StaticCredentialProvider};
//! use tokenization_core::{Context, Signer};
//!
//! # async fn example() -> tokenization_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("api-key", "api-secret"),
//!     RequestSigner::new(),
//! );
//!
//! let (mut parts, _body) = http::Request::get("https://api.bloxxon.co/api/external/v1/customers")
//!     .body(())
//!     .unwrap()
//!     .into_parts();
//! signer.sign(&mut parts).await?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::*;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::{attach_auth_header, canonical_message, sign, RequestSigner};
