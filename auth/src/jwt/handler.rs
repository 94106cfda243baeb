use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Signed session token handler.
///
/// Stateless sign/verify of bearer tokens carrying [`Claims`]. Uses HS256
/// with a single symmetric secret; tokens presenting any other algorithm
/// in their header are rejected outright.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new handler with a signing secret and a fixed token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key (at least 256 bits for HS256)
    /// * `ttl` - Lifetime stamped into every generated token
    ///
    /// # Security Notes
    /// - Store secrets in environment variables or secure vaults, never in code
    /// - Rotate secrets periodically
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Sign a new token for `subject`, expiring `ttl` from now.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn generate(&self, subject: u64) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::new(subject, self.ttl);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and claims.
    ///
    /// Expiry is checked with zero leeway. Note that a verified token is not
    /// necessarily usable: callers must still check it against the active
    /// session store.
    ///
    /// # Errors
    /// * `Malformed` - Not a parseable token
    /// * `InvalidSignature` - Signature does not verify under the secret
    /// * `UnexpectedAlgorithm` - Header names an algorithm other than HS256
    /// * `Expired` - `exp` has elapsed
    /// * `InvalidClaims` - Subject claim missing or of the wrong type
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                        JwtError::UnexpectedAlgorithm
                    }
                    ErrorKind::Json(err) => JwtError::InvalidClaims(err.to_string()),
                    ErrorKind::MissingRequiredClaim(claim) => {
                        JwtError::InvalidClaims(format!("missing claim: {}", claim))
                    }
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
