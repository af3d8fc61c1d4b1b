use std::mem;
use std::str::FromStr;

use http::header::CONTENT_LENGTH;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::{Error, Result};

/// Read-only signing view of an outgoing request.
///
/// Built from [`http::request::Parts`] right before sending and applied back
/// once the authentication header has been added.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method, case as stored.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// URI path, exactly as carried by the request.
    pub path: String,
    /// Raw query string including the leading `?`, or empty if there is none.
    pub query: String,
    /// Body length taken from `Content-Length`, `0` when absent.
    pub body_length: u64,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing view from http::request::Parts.
    ///
    /// `parts` is only modified once every field has been validated, so a
    /// failed build leaves the request as it was.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = parts.uri.clone().into_parts();
        let authority = uri.authority.ok_or_else(|| {
            Error::request_invalid("request without authority is invalid for signing")
        })?;
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));
        let body_length = content_length(&parts.headers)?;

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTPS),
            authority,
            path: paq.path().to_string(),
            query: match paq.query() {
                Some(q) if !q.is_empty() => format!("?{q}"),
                _ => String::new(),
            },
            body_length,

            // Take the headers out of the request to avoid copy.
            // They are returned by `apply`.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing view back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = {
                let mut paq = self.path;
                paq.push_str(&self.query);
                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }
}

fn content_length(headers: &HeaderMap) -> Result<u64> {
    let Some(v) = headers.get(CONTENT_LENGTH) else {
        return Ok(0);
    };

    v.to_str()?.trim().parse::<u64>().map_err(|e| {
        Error::request_invalid(format!("invalid content-length {v:?}")).with_source(e)
    })
}
