//! Authentication utilities library
//!
//! Provides the credential infrastructure used by the staff service:
//! - Password hashing (Argon2id)
//! - Signed, time-bounded access and refresh tokens (JWT, HS256)
//! - Authentication coordination under a token lifetime policy
//!
//! Services define their own authentication ports and adapt these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenClass, TokenCodec, TokenRejection};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("user123", TokenClass::Access, Duration::minutes(30)).unwrap();
//!
//! let claims = codec.verify(&token, TokenClass::Access).unwrap();
//! assert_eq!(claims.sub, "user123");
//!
//! // An access token is never accepted where a refresh token is required.
//! assert!(matches!(
//!     codec.verify(&token, TokenClass::Refresh),
//!     Err(TokenRejection::WrongClass { .. })
//! ));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenClass};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue tokens
//! assert!(auth.verify_password("password123", &hash));
//! let pair = auth.issue_token_pair("user123").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&pair.access_token, TokenClass::Access).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenClass;
pub use jwt::TokenCodec;
pub use jwt::TokenPolicy;
pub use jwt::TokenRejection;
pub use password::PasswordError;
pub use password::PasswordHasher;
