use chrono::{Duration, Utc};
use common::settings::types::SecretSettings;
use entities::{admin, sea_orm_active_enums::AdminRole};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: Uuid,
    pub role: AdminRole,
    pub iat: i64,
    pub exp: i64,
}

pub fn issue_token(
    admin: &admin::Model,
    secret: &SecretSettings,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: admin.id,
        role: admin.role,
        iat: now.timestamp(),
        exp: (now + Duration::hours(secret.token_expiration_hours)).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.jwt_secret.as_bytes()),
    )
}

/// Signature and expiry are both checked; the role claim is informational only.
pub fn decode_token(token: &str, jwt_secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}
