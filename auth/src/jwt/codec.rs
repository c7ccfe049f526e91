use jsonwebtoken::decode_header;
use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;
use crate::secret::SigningSecret;

/// Algorithm used for every issued token.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Algorithm family accepted on verification.
pub const ACCEPTED_ALGORITHMS: [Algorithm; 3] =
    [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Sign `claims` with `secret` as a compact JWS (HS256).
///
/// # Errors
/// * `EncodingFailed` - Claims could not be serialized or signed
pub fn encode<T: Serialize>(claims: &T, secret: &SigningSecret) -> Result<String, JwtError> {
    let header = Header::new(SIGNING_ALGORITHM);

    jsonwebtoken::encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| JwtError::EncodingFailed(e.to_string()))
}

/// Reject tokens whose header declares anything but an HMAC algorithm.
///
/// Runs before any key is tried, so a token can never pick its own
/// verification scheme.
///
/// # Returns
/// The declared HMAC algorithm
///
/// # Errors
/// * `Malformed` - Header cannot be decoded
/// * `UnsupportedAlgorithm` - Header declares a non-HMAC algorithm
pub fn ensure_hmac_algorithm(token: &str) -> Result<Algorithm, JwtError> {
    let header = decode_header(token).map_err(|e| JwtError::Malformed(e.to_string()))?;

    if ACCEPTED_ALGORITHMS.contains(&header.alg) {
        Ok(header.alg)
    } else {
        Err(JwtError::UnsupportedAlgorithm(format!("{:?}", header.alg)))
    }
}

/// Check the signature of `token` against `secret` and decode its claims.
///
/// Only the signature and structure are checked here; expiry is checked by
/// the caller against its own clock.
///
/// # Errors
/// * `InvalidSignature` - Signature does not match `secret`
/// * `UnsupportedAlgorithm` - Header algorithm differs from `algorithm`
/// * `Malformed` - Token or claims cannot be decoded
pub fn decode<T: DeserializeOwned>(
    token: &str,
    secret: &SigningSecret,
    algorithm: Algorithm,
) -> Result<T, JwtError> {
    let mut validation = Validation::new(algorithm);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    jsonwebtoken::decode::<T>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|token_data| token_data.claims)
    .map_err(map_decode_error)
}

fn map_decode_error(error: JsonWebTokenError) -> JwtError {
    match error.kind() {
        ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        ErrorKind::InvalidAlgorithm => JwtError::UnsupportedAlgorithm(error.to_string()),
        _ => JwtError::Malformed(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        uid: i64,
        role: String,
    }

    // base64url of {"typ":"JWT","alg":"RS256"}
    const RS256_HEADER: &str = "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9";
    // base64url of {"typ":"JWT","alg":"ES256"}
    const ES256_HEADER: &str = "eyJ0eXAiOiJKV1QiLCJhbGciOiJFUzI1NiJ9";
    // base64url of {"typ":"JWT","alg":"none"}
    const NONE_HEADER: &str = "eyJ0eXAiOiJKV1QiLCJhbGciOiJub25lIn0";

    fn secret(passphrase: &str) -> SigningSecret {
        SigningSecret::derive(passphrase, Utc::now())
    }

    fn claims() -> TestClaims {
        TestClaims {
            uid: 42,
            role: "cleaner".to_string(),
        }
    }

    fn with_header(token: &str, header: &str) -> String {
        let (_, rest) = token.split_once('.').unwrap();
        format!("{}.{}", header, rest)
    }

    #[test]
    fn test_encode_and_decode() {
        let secret = secret("front-desk-secret");

        let token = encode(&claims(), &secret).expect("Failed to encode token");
        assert_eq!(token.split('.').count(), 3);

        let algorithm = ensure_hmac_algorithm(&token).unwrap();
        assert_eq!(algorithm, Algorithm::HS256);

        let decoded: TestClaims = decode(&token, &secret, algorithm).unwrap();
        assert_eq!(decoded, claims());
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let token = encode(&claims(), &secret("first-secret")).unwrap();

        let result = decode::<TestClaims>(&token, &secret("second-secret"), Algorithm::HS256);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_accepts_other_hmac_algorithms() {
        let secret = secret("front-desk-secret");
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &claims(),
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        let algorithm = ensure_hmac_algorithm(&token).unwrap();
        assert_eq!(algorithm, Algorithm::HS512);

        let decoded: TestClaims = decode(&token, &secret, algorithm).unwrap();
        assert_eq!(decoded, claims());
    }

    #[test]
    fn test_rejects_asymmetric_algorithm_headers() {
        let token = encode(&claims(), &secret("front-desk-secret")).unwrap();

        for header in [RS256_HEADER, ES256_HEADER] {
            let forged = with_header(&token, header);
            let result = ensure_hmac_algorithm(&forged);
            assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
        }
    }

    #[test]
    fn test_rejects_none_algorithm_header() {
        let token = encode(&claims(), &secret("front-desk-secret")).unwrap();
        let forged = format!("{}.", with_header(&token, NONE_HEADER).rsplit_once('.').unwrap().0);

        assert!(ensure_hmac_algorithm(&forged).is_err());
    }

    #[test]
    fn test_decode_rejects_algorithm_mismatch() {
        let secret = secret("front-desk-secret");
        let token = encode(&claims(), &secret).unwrap();

        let result = decode::<TestClaims>(&token, &secret, Algorithm::HS384);
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_malformed_token() {
        assert!(matches!(
            ensure_hmac_algorithm("invalid.token.here"),
            Err(JwtError::Malformed(_))
        ));
        assert!(matches!(
            ensure_hmac_algorithm("not-a-token"),
            Err(JwtError::Malformed(_))
        ));
    }
}
