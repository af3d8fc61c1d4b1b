use http::header::AUTHORIZATION;
use proptest::prelude::*;
use tokenization_bloxxon::{attach_auth_header, canonical_message, sign};
use tokenization_core::hash::base64_decode;

use super::signing_request;

fn method() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("GET"),
        Just("POST"),
        Just("PUT"),
        Just("DELETE"),
        Just("PATCH"),
    ]
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9_-]{1,12}", 0..5).prop_map(|segs| format!("/{}", segs.join("/")))
}

fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9]{1,8}=[a-zA-Z0-9]{0,8}(&[a-zA-Z0-9]{1,8}=[a-zA-Z0-9]{0,8}){0,3}"
            .prop_map(|q| format!("?{q}")),
    ]
}

fn uri(path: &str, query: &str) -> String {
    format!("https://api.bloxxon.co{path}{query}")
}

proptest! {
    /// Same request and secret always produce the same signature.
    #[test]
    fn test_sign_is_deterministic(
        m in method(),
        p in path(),
        q in query(),
        len in 0u64..10_000,
        secret in ".{0,32}",
    ) {
        let a = signing_request(m, &uri(&p, &q), Some(len));
        let b = signing_request(m, &uri(&p, &q), Some(len));

        prop_assert_eq!(sign(&a, &secret).unwrap(), sign(&b, &secret).unwrap());
    }

    /// Signatures are 32 byte digests in padded base64.
    #[test]
    fn test_signature_shape(m in method(), p in path(), len in 0u64..10_000) {
        let req = signing_request(m, &uri(&p, ""), Some(len));
        let signature = sign(&req, "secret").unwrap();

        prop_assert_eq!(signature.len(), 44);
        prop_assert_eq!(base64_decode(&signature).unwrap().len(), 32);
    }

    /// Changing the body length changes the signature.
    #[test]
    fn test_sign_sensitive_to_body_length(
        m in method(),
        p in path(),
        len in 0u64..10_000,
        delta in 1u64..1_000,
    ) {
        let a = signing_request(m, &uri(&p, ""), Some(len));
        let b = signing_request(m, &uri(&p, ""), Some(len + delta));

        prop_assert_ne!(sign(&a, "secret").unwrap(), sign(&b, "secret").unwrap());
    }

    /// Changing the path changes the signature.
    #[test]
    fn test_sign_sensitive_to_path(p in path(), extra in "[a-z0-9]{1,8}") {
        let a = signing_request("GET", &uri(&p, ""), None);
        let b = signing_request("GET", &uri(&format!("{}/{extra}", p.trim_end_matches('/')), ""), None);

        prop_assert_ne!(sign(&a, "secret").unwrap(), sign(&b, "secret").unwrap());
    }

    /// Changing the method changes the signature.
    #[test]
    fn test_sign_sensitive_to_method(p in path(), (m1, m2) in (method(), method()).prop_filter("distinct", |(a, b)| a != b)) {
        let a = signing_request(m1, &uri(&p, ""), None);
        let b = signing_request(m2, &uri(&p, ""), None);

        prop_assert_ne!(sign(&a, "secret").unwrap(), sign(&b, "secret").unwrap());
    }

    /// Changing the query (beyond letter case) changes the signature.
    #[test]
    fn test_sign_sensitive_to_query(p in path(), v1 in "[0-9]{1,6}", v2 in "[0-9]{1,6}") {
        prop_assume!(v1 != v2);
        let a = signing_request("GET", &uri(&p, &format!("?take={v1}")), None);
        let b = signing_request("GET", &uri(&p, &format!("?take={v2}")), None);

        prop_assert_ne!(sign(&a, "secret").unwrap(), sign(&b, "secret").unwrap());
    }

    /// Query letter case does not affect the signature, path letter case does.
    #[test]
    fn test_query_case_insensitive(p in "/[a-z]{1,12}", q in "[a-z]{1,8}=[a-z]{1,8}") {
        let lower = signing_request("GET", &uri(&p, &format!("?{q}")), None);
        let upper = signing_request("GET", &uri(&p, &format!("?{}", q.to_uppercase())), None);
        let upper_path = signing_request("GET", &uri(&p.to_uppercase(), &format!("?{q}")), None);

        prop_assert_eq!(sign(&lower, "secret").unwrap(), sign(&upper, "secret").unwrap());
        prop_assert_ne!(sign(&lower, "secret").unwrap(), sign(&upper_path, "secret").unwrap());
    }

    /// Different secrets produce different signatures for the same request.
    #[test]
    fn test_key_separation(p in path(), s1 in "[ -~]{0,32}", s2 in "[ -~]{0,32}") {
        prop_assume!(s1 != s2);
        let req = signing_request("GET", &uri(&p, ""), None);

        prop_assert_ne!(sign(&req, &s1).unwrap(), sign(&req, &s2).unwrap());
    }

    /// Neither the message nor the signature carries the secret.
    #[test]
    fn test_secret_never_leaks(
        m in method(),
        p in path(),
        q in query(),
        secret in "[A-Za-z0-9]{16,32}",
    ) {
        let req = signing_request(m, &uri(&p, &q), None);
        let message = canonical_message(&req);
        let signature = sign(&req, &secret).unwrap();

        prop_assert!(!contains(message.as_bytes(), secret.as_bytes()));
        prop_assert!(!contains(signature.as_bytes(), secret.as_bytes()));
    }

    /// The header is always `basic <key>:<signature>` and never carries the query.
    #[test]
    fn test_header_format(
        key in "[A-Za-z0-9-]{1,40}",
        p in path(),
        q in query(),
    ) {
        let mut req = signing_request("GET", &uri(&p, &q), None);
        let signature = sign(&req, "secret").unwrap();
        attach_auth_header(&mut req, &key, &signature).unwrap();

        let value = req.headers.get(AUTHORIZATION).unwrap().to_str().unwrap().to_string();
        prop_assert_eq!(&value, &format!("basic {key}:{signature}"));
        prop_assert!(!value.contains('?'));
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
