// OAuth 1.0a (HMAC-SHA1) request signing for user-context Twitter calls.
//
// Every request carries an `Authorization: OAuth ...` header whose signature
// covers the method, the base URL and every oauth_* and query parameter.

use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;

use crate::error::{Result, TwitterError};

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay literal; everything else is escaped.
const RFC3986: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// The four user-context secrets issued for a Twitter app.
#[derive(Clone)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl std::fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &"<redacted>")
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, RFC3986).to_string()
}

/// Per-request values that must be unique (nonce) or current (timestamp).
#[derive(Debug, Clone)]
pub struct RequestNonce {
    pub nonce: String,
    pub timestamp: i64,
}

impl RequestNonce {
    pub fn fresh() -> Self {
        Self {
            nonce: uuid::Uuid::new_v4().simple().to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

fn oauth_params(credentials: &OAuthCredentials, nonce: &RequestNonce) -> Vec<(String, String)> {
    vec![
        ("oauth_consumer_key".into(), credentials.consumer_key.clone()),
        ("oauth_nonce".into(), nonce.nonce.clone()),
        ("oauth_signature_method".into(), "HMAC-SHA1".into()),
        ("oauth_timestamp".into(), nonce.timestamp.to_string()),
        ("oauth_token".into(), credentials.access_token.clone()),
        ("oauth_version".into(), "1.0".into()),
    ]
}

/// Compute the base64 HMAC-SHA1 signature over `params` (oauth_* and request params).
pub fn signature(
    method: &str,
    base_url: &str,
    params: &[(String, String)],
    consumer_secret: &str,
    token_secret: &str,
) -> Result<String> {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(base_url),
        percent_encode(&param_string)
    );
    let signing_key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );

    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .map_err(|e| TwitterError::Signing(e.to_string()))?;
    mac.update(base_string.as_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(base64::engine::general_purpose::STANDARD.encode(digest))
}

/// Build the `Authorization` header value for a request.
pub fn authorization_header(
    credentials: &OAuthCredentials,
    method: &str,
    base_url: &str,
    query: &[(String, String)],
    nonce: &RequestNonce,
) -> Result<String> {
    let mut header_params = oauth_params(credentials, nonce);

    let mut signed_params = header_params.clone();
    signed_params.extend(query.iter().cloned());
    let sig = signature(
        method,
        base_url,
        &signed_params,
        &credentials.consumer_secret,
        &credentials.access_token_secret,
    )?;
    header_params.push(("oauth_signature".into(), sig));
    header_params.sort();

    let fields = header_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("OAuth {fields}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from Twitter's "Creating a signature" guide.
    fn documented_credentials() -> OAuthCredentials {
        OAuthCredentials {
            consumer_key: "xvz1evFS4wEEPTGEFPHBog".into(),
            consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".into(),
            access_token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".into(),
            access_token_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".into(),
        }
    }

    fn documented_nonce() -> RequestNonce {
        RequestNonce {
            nonce: "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg".into(),
            timestamp: 1318622958,
        }
    }

    fn documented_query() -> Vec<(String, String)> {
        vec![
            ("include_entities".into(), "true".into()),
            (
                "status".into(),
                "Hello Ladies + Gentlemen, a signed OAuth request!".into(),
            ),
        ]
    }

    #[test]
    fn percent_encode_follows_rfc3986() {
        assert_eq!(percent_encode("Dogs, Cats & Mice"), "Dogs%2C%20Cats%20%26%20Mice");
        assert_eq!(
            percent_encode("Hello Ladies + Gentlemen, a signed OAuth request!"),
            "Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21"
        );
        assert_eq!(percent_encode("a-b.c_d~e"), "a-b.c_d~e");
    }

    #[test]
    fn signature_matches_documented_example() {
        let creds = documented_credentials();
        let mut params = oauth_params(&creds, &documented_nonce());
        params.extend(documented_query());

        let sig = signature(
            "POST",
            "https://api.twitter.com/1.1/statuses/update.json",
            &params,
            &creds.consumer_secret,
            &creds.access_token_secret,
        )
        .unwrap();

        assert_eq!(sig, "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
    }

    #[test]
    fn header_carries_encoded_signature_and_no_query_params() {
        let header = authorization_header(
            &documented_credentials(),
            "POST",
            "https://api.twitter.com/1.1/statuses/update.json",
            &documented_query(),
            &documented_nonce(),
        )
        .unwrap();

        assert!(header.starts_with("OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\""));
        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(!header.contains("status="));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let rendered = format!("{:?}", documented_credentials());
        assert!(!rendered.contains("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn fresh_nonces_differ() {
        assert_ne!(RequestNonce::fresh().nonce, RequestNonce::fresh().nonce);
    }
}
