//! Unit tests for the access token codec

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::net::IpAddr;

use crate::errors::{DomainError, TokenError};
use crate::services::token::AccessTokenCodec;

use super::mocks::{test_codec, TEST_SECRET};

fn ip(raw: &str) -> IpAddr {
    raw.parse().unwrap()
}

#[test]
fn test_issue_and_validate() {
    let codec = test_codec();
    let now = Utc::now();

    let token = codec.issue("u1", ip("10.0.0.1"), now).unwrap();
    let claims = codec.validate(&token).unwrap();

    assert_eq!(claims.user_id, "u1");
    assert_eq!(claims.ip, "10.0.0.1");
    assert_eq!(claims.exp, (now + Duration::minutes(15)).timestamp());
}

#[test]
fn test_ipv6_claim_round_trips() {
    let codec = test_codec();

    let token = codec.issue("u1", ip("2001:db8::1"), Utc::now()).unwrap();
    let claims = codec.validate(&token).unwrap();

    assert!(claims.is_bound_to(ip("2001:db8::1")));
}

#[test]
fn test_header_uses_hs512() {
    let codec = test_codec();
    let token = codec.issue("u1", ip("10.0.0.1"), Utc::now()).unwrap();

    let header = jsonwebtoken::decode_header(&token).unwrap();
    assert_eq!(header.alg, Algorithm::HS512);
}

#[test]
fn test_expired_token_rejected() {
    let codec = test_codec();
    let token = codec
        .issue("u1", ip("10.0.0.1"), Utc::now() - Duration::minutes(20))
        .unwrap();

    assert_eq!(codec.validate(&token), Err(TokenError::TokenExpired));
}

#[test]
fn test_leeway_accepts_recently_expired_token() {
    let codec = AccessTokenCodec::new(TEST_SECRET.as_bytes(), Duration::minutes(15), 600).unwrap();
    let token = codec
        .issue("u1", ip("10.0.0.1"), Utc::now() - Duration::minutes(20))
        .unwrap();

    assert!(codec.validate(&token).is_ok());
}

#[test]
fn test_other_algorithm_rejected() {
    #[derive(Serialize)]
    struct Claims<'a> {
        user_id: &'a str,
        ip: &'a str,
        exp: i64,
    }

    let claims = Claims {
        user_id: "u1",
        ip: "10.0.0.1",
        exp: (Utc::now() + Duration::minutes(15)).timestamp(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    assert!(matches!(
        test_codec().validate(&token),
        Err(TokenError::DisallowedAlgorithm { .. })
    ));
}

#[test]
fn test_wrong_secret_rejected() {
    let other = AccessTokenCodec::new(b"another-secret", Duration::minutes(15), 0).unwrap();
    let token = other.issue("u1", ip("10.0.0.1"), Utc::now()).unwrap();

    assert_eq!(test_codec().validate(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_tampered_payload_rejected() {
    let codec = test_codec();
    let token = codec.issue("u1", ip("10.0.0.1"), Utc::now()).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let forged_payload = URL_SAFE_NO_PAD.encode(format!(
        r#"{{"user_id":"admin","ip":"10.0.0.1","exp":{}}}"#,
        (Utc::now() + Duration::minutes(15)).timestamp()
    ));
    let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

    assert_eq!(codec.validate(&forged), Err(TokenError::InvalidSignature));
}

#[test]
fn test_malformed_token_rejected() {
    let codec = test_codec();

    assert_eq!(codec.validate("not-a-jwt"), Err(TokenError::InvalidTokenFormat));
    assert_eq!(codec.validate(""), Err(TokenError::InvalidTokenFormat));
    assert_eq!(codec.validate("a.b.c"), Err(TokenError::InvalidTokenFormat));
}

#[test]
fn test_missing_claims_rejected() {
    #[derive(Serialize)]
    struct NoExpiry<'a> {
        user_id: &'a str,
        ip: &'a str,
    }

    #[derive(Serialize)]
    struct NoIp<'a> {
        user_id: &'a str,
        exp: i64,
    }

    let key = EncodingKey::from_secret(TEST_SECRET.as_bytes());
    let header = Header::new(Algorithm::HS512);
    let codec = test_codec();

    let no_exp = encode(&header, &NoExpiry { user_id: "u1", ip: "10.0.0.1" }, &key).unwrap();
    assert_eq!(codec.validate(&no_exp), Err(TokenError::InvalidTokenFormat));

    let no_ip = encode(
        &header,
        &NoIp {
            user_id: "u1",
            exp: (Utc::now() + Duration::minutes(15)).timestamp(),
        },
        &key,
    )
    .unwrap();
    assert_eq!(codec.validate(&no_ip), Err(TokenError::InvalidTokenFormat));
}

#[test]
fn test_empty_secret_refused() {
    let result = AccessTokenCodec::new(b"", Duration::minutes(15), 0);

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[test]
fn test_unrepresentable_expiry_fails_to_issue() {
    let codec = AccessTokenCodec::new(
        TEST_SECRET.as_bytes(),
        Duration::seconds(10_000_000_000_000),
        0,
    )
    .unwrap();

    let result = codec.issue("u1", ip("10.0.0.1"), Utc::now());

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenGenerationFailed))
    ));
}
