//! Bearer Token Service
//!
//! Signs and verifies HS256 JWTs. Verification checks signature, expiry,
//! issuer and audience; the surviving claims become an [`Actor`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::JwtConfig;
use crate::domain::entity::{actor::Actor, user::User};
use crate::domain::value_object::{RoleSet, UserId};
use crate::domain::verifier::IdentityVerifier;
use crate::error::{AuthError, AuthResult};

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user id
    pub sub: String,
    /// User name
    pub name: String,
    /// One entry per role membership
    #[serde(default)]
    pub roles: Vec<String>,
    /// Token id
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// A signed token and when it stops being accepted
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Token issuer and verifier over one shared secret
#[derive(Clone)]
pub struct TokenService {
    config: Arc<JwtConfig>,
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> AuthResult<Self> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = config.leeway.as_secs();

        Ok(Self {
            config: Arc::new(config),
            encoding_key: Arc::new(encoding_key),
            decoding_key: Arc::new(decoding_key),
            validation: Arc::new(validation),
        })
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// Issue a token for a user as currently stored (roles included)
    pub fn issue(&self, user: &User) -> AuthResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(self.config.expiration_secs());

        let claims = Claims {
            sub: user.user_id.as_str().to_string(),
            name: user.user_name.clone(),
            roles: user.roles.codes(),
            jti: uuid::Uuid::new_v4().to_string(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = self.sign(&claims)?;

        Ok(IssuedToken { token, expires_at })
    }

    pub(crate) fn sign(&self, claims: &Claims) -> AuthResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Validate a token and return its claims
    pub fn decode(&self, token: &str) -> AuthResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

impl IdentityVerifier for TokenService {
    fn verify(&self, token: &str) -> AuthResult<Actor> {
        let claims = self.decode(token)?;

        if claims.sub.is_empty() {
            return Err(AuthError::TokenInvalid("empty subject".into()));
        }

        Ok(Actor::new(
            UserId::new(claims.sub),
            claims.name,
            RoleSet::from_codes(&claims.roles),
        ))
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .field("expiration", &self.config.expiration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::Role;

    const SECRET: &str = "test-secret-key-that-is-long-enough-for-hs256";

    fn service() -> TokenService {
        TokenService::new(JwtConfig::new(SECRET)).unwrap()
    }

    fn writer() -> User {
        User::new("wendy", RoleSet::empty().with(Role::Writer))
    }

    #[test]
    fn test_issue_and_verify() {
        let service = service();
        let user = writer();

        let issued = service.issue(&user).unwrap();
        let actor = service.verify(&issued.token).unwrap();

        assert_eq!(actor.user_id, user.user_id);
        assert_eq!(actor.user_name, "wendy");
        assert!(actor.has_role(Role::Writer));
        assert!(!actor.has_role(Role::Editor));
    }

    #[test]
    fn test_expiry_is_one_hour() {
        let service = service();
        let before = Utc::now();
        let issued = service.issue(&writer()).unwrap();

        let lifetime = issued.expires_at - before;
        assert!(lifetime <= chrono::Duration::seconds(3601));
        assert!(lifetime >= chrono::Duration::seconds(3599));

        let claims = service.decode(&issued.token).unwrap();
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_one_role_entry_per_membership() {
        let service = service();
        let user = User::new(
            "multi",
            RoleSet::empty().with(Role::Subscriber).with(Role::Editor),
        );
        let issued = service.issue(&user).unwrap();
        let claims = service.decode(&issued.token).unwrap();
        assert_eq!(claims.roles, vec!["Subscriber", "Editor"]);
    }

    #[test]
    fn test_expired_token() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "u".into(),
            name: "u".into(),
            roles: vec![],
            jti: "j".into(),
            iss: service.config().issuer.clone(),
            aud: service.config().audience.clone(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = service.sign(&claims).unwrap();

        assert!(matches!(service.verify(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret() {
        let issuer = service();
        let other =
            TokenService::new(JwtConfig::new("another-secret-key-that-is-long-enough")).unwrap();

        let issued = issuer.issue(&writer()).unwrap();
        assert!(matches!(
            other.verify(&issued.token),
            Err(AuthError::TokenInvalid(_))
        ));
    }

    #[test]
    fn test_issuer_and_audience_must_match() {
        let issuer = service();
        let issued = issuer.issue(&writer()).unwrap();

        let other_iss =
            TokenService::new(JwtConfig::new(SECRET).with_issuer("someone-else")).unwrap();
        assert!(other_iss.verify(&issued.token).is_err());

        let other_aud =
            TokenService::new(JwtConfig::new(SECRET).with_audience("other-clients")).unwrap();
        assert!(other_aud.verify(&issued.token).is_err());
    }

    #[test]
    fn test_garbage_token() {
        assert!(matches!(
            service().verify("not.a.token"),
            Err(AuthError::TokenInvalid(_))
        ));
    }

    #[test]
    fn test_unknown_roles_are_dropped() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "u-9".into(),
            name: "nine".into(),
            roles: vec!["Admin".into(), "Editor".into()],
            jti: "j".into(),
            iss: service.config().issuer.clone(),
            aud: service.config().audience.clone(),
            iat: now,
            exp: now + 60,
        };
        let token = service.sign(&claims).unwrap();
        let actor = service.verify(&token).unwrap();
        assert_eq!(actor.roles, RoleSet::empty().with(Role::Editor));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(
            TokenService::new(JwtConfig::default()),
            Err(AuthError::Config(_))
        ));
    }
}
