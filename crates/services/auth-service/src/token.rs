//! Stateless session tokens (HS256 JWT).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, JwtConfig};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the user's email)
    pub sub: String,
    /// Granted authorities, e.g. `ROLE_USER`
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token and its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and validates session tokens with a fixed secret.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("validity", &self.validity)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn new(config: &JwtConfig) -> AppResult<Self> {
        let validity = Duration::try_hours(config.expiration_hours).ok_or_else(|| {
            AppError::configuration(format!(
                "Token validity of {} hours is out of range",
                config.expiration_hours
            ))
        })?;

        let secret = config.secret.as_bytes();
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validity,
        })
    }

    /// Issue a token with the configured validity.
    pub fn issue(&self, subject: &str, authorities: Vec<String>) -> AppResult<IssuedToken> {
        self.issue_with_validity(subject, authorities, self.validity)
    }

    /// Issue a token valid for `validity` from now.
    pub fn issue_with_validity(
        &self,
        subject: &str,
        authorities: Vec<String>,
        validity: Duration,
    ) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(validity)
            .ok_or_else(|| AppError::internal("Token expiry out of range"))?;

        let claims = Claims {
            sub: subject.to_string(),
            roles: authorities,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn validate(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AppError::InvalidToken
            })
    }
}
