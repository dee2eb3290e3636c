use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenClass;
use super::errors::JwtError;
use super::errors::TokenRejection;

/// Token codec for issuing and verifying signed, time-bounded tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a symmetric secret. Tokens are
/// self-contained; verification needs no server-side state.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
}

impl TokenCodec {
    /// Create a new codec with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        let algorithm = Algorithm::HS256;

        // Expiry is checked against an explicit clock in `verify_at`.
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
        }
    }

    /// Issue a token for `subject` valid for `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, class: TokenClass, ttl: Duration) -> Result<String, JwtError> {
        self.issue_at(subject, class, ttl, Utc::now())
    }

    /// Issue a token for `subject` valid for `ttl` from `issued_at`.
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - `issued_at + ttl` overflows
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_at(
        &self,
        subject: &str,
        class: TokenClass,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        self.encode(&Claims::new(subject, class, issued_at, ttl)?)
    }

    /// Encode prepared claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token against the current time.
    ///
    /// # Errors
    /// See [`TokenCodec::verify_at`].
    pub fn verify(&self, token: &str, expected: TokenClass) -> Result<Claims, TokenRejection> {
        self.verify_at(token, expected, Utc::now())
    }

    /// Verify a token as of `now`.
    ///
    /// Checks run in order: structure, signature, expiry, class.
    ///
    /// # Arguments
    /// * `token` - Encoded token
    /// * `expected` - Class required by the caller's context
    /// * `now` - Instant to check expiry against
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `Malformed` - Not a decodable token or claims are missing/invalid
    /// * `BadSignature` - Signature does not match the secret
    /// * `Expired` - `now` is at or past the expiry
    /// * `WrongClass` - Valid token of the other class
    pub fn verify_at(
        &self,
        token: &str,
        expected: TokenClass,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenRejection> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenRejection::Expired);
        }

        if claims.class != expected {
            return Err(TokenRejection::WrongClass {
                expected,
                actual: claims.class,
            });
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_issue_and_verify() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue("user123", TokenClass::Access, Duration::minutes(30))
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = codec
            .verify(&token, TokenClass::Access)
            .expect("Failed to verify token");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.class, TokenClass::Access);
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_verify_expired_token() {
        let codec = TokenCodec::new(SECRET);
        let issued_at = Utc::now();
        let ttl = Duration::minutes(30);

        let token = codec
            .issue_at("user123", TokenClass::Refresh, ttl, issued_at)
            .expect("Failed to issue token");

        assert!(codec
            .verify_at(&token, TokenClass::Refresh, issued_at + Duration::minutes(29))
            .is_ok());

        let result = codec.verify_at(
            &token,
            TokenClass::Refresh,
            issued_at + ttl + Duration::seconds(1),
        );
        assert_eq!(result, Err(TokenRejection::Expired));
    }

    #[test]
    fn test_verify_token_issued_in_the_past() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue_at(
                "user123",
                TokenClass::Access,
                Duration::minutes(30),
                Utc::now() - Duration::hours(1),
            )
            .expect("Failed to issue token");

        let result = codec.verify(&token, TokenClass::Access);
        assert_eq!(result, Err(TokenRejection::Expired));
    }

    #[test]
    fn test_verify_wrong_class_both_directions() {
        let codec = TokenCodec::new(SECRET);

        let access = codec
            .issue("user123", TokenClass::Access, Duration::minutes(30))
            .unwrap();
        let refresh = codec
            .issue("user123", TokenClass::Refresh, Duration::days(7))
            .unwrap();

        assert_eq!(
            codec.verify(&access, TokenClass::Refresh),
            Err(TokenRejection::WrongClass {
                expected: TokenClass::Refresh,
                actual: TokenClass::Access,
            })
        );
        assert_eq!(
            codec.verify(&refresh, TokenClass::Access),
            Err(TokenRejection::WrongClass {
                expected: TokenClass::Access,
                actual: TokenClass::Refresh,
            })
        );
    }

    #[test]
    fn test_expiry_checked_before_class() {
        let codec = TokenCodec::new(SECRET);
        let issued_at = Utc::now() - Duration::days(8);

        let token = codec
            .issue_at("user123", TokenClass::Access, Duration::minutes(30), issued_at)
            .unwrap();

        assert_eq!(
            codec.verify(&token, TokenClass::Refresh),
            Err(TokenRejection::Expired)
        );
    }

    #[test]
    fn test_verify_malformed_token() {
        let codec = TokenCodec::new(SECRET);

        for token in ["", "invalid", "invalid.token.here", "a.b"] {
            let result = codec.verify(token, TokenClass::Access);
            assert!(
                matches!(result, Err(TokenRejection::Malformed(_))),
                "token {token:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer
            .issue("user123", TokenClass::Access, Duration::minutes(30))
            .unwrap();

        assert_eq!(
            verifier.verify(&token, TokenClass::Access),
            Err(TokenRejection::BadSignature)
        );
    }

    #[test]
    fn test_verify_tampered_payload() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("user123", TokenClass::Access, Duration::minutes(30))
            .unwrap();

        let forged_claims = Claims::new(
            "someone-else",
            TokenClass::Access,
            Utc::now(),
            Duration::minutes(30),
        )
        .unwrap();
        let forged = TokenCodec::new(b"another_secret_at_least_32_bytes!!")
            .encode(&forged_claims)
            .unwrap();

        // Original header and signature, forged payload.
        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert_eq!(
            codec.verify(&spliced, TokenClass::Access),
            Err(TokenRejection::BadSignature)
        );
    }

    #[test]
    fn test_verify_signed_token_with_unknown_class() {
        let codec = TokenCodec::new(SECRET);
        let now = Utc::now().timestamp();

        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &json!({ "sub": "user123", "type": "admin", "iat": now, "exp": now + 600 }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(
            codec.verify(&token, TokenClass::Access),
            Err(TokenRejection::Malformed(_))
        ));
    }

    #[test]
    fn test_verify_signed_token_without_expiry() {
        let codec = TokenCodec::new(SECRET);

        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &json!({ "sub": "user123", "type": "access", "iat": 0 }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(
            codec.verify(&token, TokenClass::Access),
            Err(TokenRejection::Malformed(_))
        ));
    }
}
