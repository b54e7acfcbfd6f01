//! HS256 bearer tokens.
//!
//! Expiry is checked against the injected clock rather than by the JWT
//! library, so tests can move time.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use worldbuilder_domain::AccountId;

use crate::infrastructure::config::SigningKey;
use crate::infrastructure::ports::{ClockPort, IssuedToken, TokenError, TokenPort};

/// Lifetime of an issued token.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Account id, decimal.
    sub: String,
    iat: i64,
    exp: i64,
}

pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    clock: Arc<dyn ClockPort>,
}

impl JwtTokenIssuer {
    pub fn new(key: &SigningKey, clock: Arc<dyn ClockPort>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(key.as_bytes()),
            decoding: DecodingKey::from_secret(key.as_bytes()),
            validation,
            clock,
        }
    }
}

impl TokenPort for JwtTokenIssuer {
    fn issue(&self, account_id: AccountId) -> Result<IssuedToken, TokenError> {
        let iat = self.clock.now().timestamp();
        let exp = iat + TOKEN_TTL_SECS;
        let expires_at = DateTime::<Utc>::from_timestamp(exp, 0)
            .ok_or_else(|| TokenError::Signing(format!("expiry {exp} out of range")))?;

        let claims = Claims {
            sub: account_id.to_string(),
            iat,
            exp,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            account_id,
            token,
            expires_at,
        })
    }

    fn verify(&self, token: &str) -> Result<AccountId, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| TokenError::Invalid)?;

        // exp is whole seconds, so flooring now keeps "strictly before" exact
        if self.clock.now().timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        data.claims
            .sub
            .parse::<AccountId>()
            .map_err(|_| TokenError::Invalid)
    }
}
