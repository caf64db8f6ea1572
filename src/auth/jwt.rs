use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::Error;

pub(crate) const ISSUER: &str = "chirpy";

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub(crate) struct Claims {
    pub(crate) iss: String,
    pub(crate) sub: String,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
}

/// Issues and validates HS256 access tokens for one signing secret.
#[derive(Clone)]
pub(crate) struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AccessTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenCodec")
            .field("algorithm", &ALGORITHM)
            .finish()
    }
}

impl AccessTokenCodec {
    pub(crate) fn new(secret: &str) -> Self {
        // Only the issuing algorithm is accepted and expiry is checked with no leeway.
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub(crate) fn issue(&self, identity: Uuid, ttl: Duration) -> Result<String, Error> {
        let issued_at = Utc::now();
        let expires_at = issued_at + ttl;

        let claims = Claims {
            iss: ISSUER.into(),
            sub: identity.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(jsonwebtoken::encode(
            &Header::new(ALGORITHM),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Checks signature, algorithm, issuer and expiry, returning the raw claims.
    pub(crate) fn decode(&self, token: &str) -> Result<Claims, Error> {
        match jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => Ok(token_data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(Error::ExpiredToken),
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    Err(Error::InvalidSignature)
                }
                _ => Err(Error::MalformedToken(e)),
            },
        }
    }

    pub(crate) fn validate(&self, token: &str) -> Result<Uuid, Error> {
        let claims = self.decode(token)?;

        Uuid::parse_str(&claims.sub).map_err(Error::MalformedSubject)
    }
}
