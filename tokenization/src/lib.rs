//! Client for the Bloxxon tokenization API.
//!
//! Every request is signed with the api secret before it leaves the process:
//! the client builds the request, hands it to the
//! [`RequestSigner`](tokenization_bloxxon::RequestSigner) pre-send hook and
//! only then passes it to the configured transport.
//!
//! ```no_run
//! use tokenization::Client;
//!
//! # async fn example() -> tokenization::Result<()> {
//! let client = Client::new("api-key", "api-secret");
//! for customer in client.get_customers().await? {
//!     println!("{}", customer.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Use [`ClientBuilder`] to point at another endpoint, inject a transport or
//! load credentials from the environment.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use tokenization_core::*;

/// Request signing for the tokenization API.
pub mod bloxxon {
    pub use tokenization_bloxxon::*;
}

mod client;
pub use client::{Client, ClientBuilder};

pub mod models;
