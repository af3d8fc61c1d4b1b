mod properties;

use http::header::CONTENT_LENGTH;
use tokenization_core::SigningRequest;

pub const SECRET: &str = "SuperS3cr3tKey";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build the signing view of a request with the given method, uri and body length.
pub fn signing_request(method: &str, uri: &str, body_length: Option<u64>) -> SigningRequest {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(len) = body_length {
        builder = builder.header(CONTENT_LENGTH, len);
    }

    let (mut parts, _) = builder
        .body(())
        .expect("request must be valid")
        .into_parts();
    SigningRequest::build(&mut parts).expect("request must be signable")
}
