//! Application Configuration
//!
//! Token settings for the auth application layer.

use std::fmt;
use std::time::Duration;

use crate::error::{AuthError, AuthResult};

/// Minimum secret length before a warning is logged (HS256 key size)
const RECOMMENDED_SECRET_LEN: usize = 32;

/// Longest accepted token lifetime (30 days)
pub const MAX_EXPIRATION: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared HMAC signing secret
    pub secret: String,
    /// `iss` claim, checked on verification
    pub issuer: String,
    /// `aud` claim, checked on verification
    pub audience: String,
    /// Token lifetime from issuance
    pub expiration: Duration,
    /// Clock skew tolerance for `exp`
    pub leeway: Duration,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(), // must be set
            issuer: "cms-api".to_string(),
            audience: "cms-clients".to_string(),
            expiration: Duration::from_secs(3600), // 1 hour
            leeway: Duration::from_secs(60),
        }
    }
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::new(platform::crypto::random_secret(RECOMMENDED_SECRET_LEN))
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    pub fn with_expiration(mut self, expiration: Duration) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Token lifetime in seconds, capped at [`MAX_EXPIRATION`]
    pub fn expiration_secs(&self) -> i64 {
        self.expiration.min(MAX_EXPIRATION).as_secs() as i64
    }

    pub fn validate(&self) -> AuthResult<()> {
        if self.secret.is_empty() {
            return Err(AuthError::Config("JWT secret is not configured".into()));
        }
        if self.issuer.is_empty() || self.audience.is_empty() {
            return Err(AuthError::Config("JWT issuer and audience must be set".into()));
        }
        if self.expiration.is_zero() {
            return Err(AuthError::Config("JWT expiration must be positive".into()));
        }
        if self.expiration > MAX_EXPIRATION {
            return Err(AuthError::Config(format!(
                "JWT expiration must not exceed {} seconds",
                MAX_EXPIRATION.as_secs()
            )));
        }
        if self.secret.len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                secret_len = self.secret.len(),
                "JWT secret is shorter than recommended (32 bytes)"
            );
        }
        Ok(())
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiration", &self.expiration)
            .field("leeway", &self.leeway)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JwtConfig::default();
        assert_eq!(config.expiration, Duration::from_secs(3600));
        assert_eq!(config.issuer, "cms-api");
        assert_eq!(config.audience, "cms-clients");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_development_config_has_random_secret() {
        let a = JwtConfig::development();
        let b = JwtConfig::development();
        assert_ne!(a.secret, b.secret);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new("super-secret-value-do-not-print-me");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_builder() {
        let config = JwtConfig::new("s")
            .with_issuer("iss")
            .with_audience("aud")
            .with_expiration(Duration::from_secs(10));
        assert_eq!(config.issuer, "iss");
        assert_eq!(config.audience, "aud");
        assert_eq!(config.expiration_secs(), 10);
    }

    #[test]
    fn test_oversized_expiration_rejected() {
        let config = JwtConfig::new("0123456789abcdef0123456789abcdef")
            .with_expiration(Duration::from_secs(u64::MAX));
        assert!(matches!(config.validate(), Err(AuthError::Config(_))));
        assert_eq!(config.expiration_secs(), MAX_EXPIRATION.as_secs() as i64);

        let at_limit = config.with_expiration(MAX_EXPIRATION);
        assert!(at_limit.validate().is_ok());
    }
}
