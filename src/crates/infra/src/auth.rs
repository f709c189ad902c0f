use chrono::Utc;
use domain::auth::{TokenClaims, TokenService};
use domain::error::CatalogError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Issues and verifies HS256 bearer tokens against the process-wide
/// secret from configuration.
#[derive(Debug, Clone)]
pub struct JwtTokenService {
    jwt_secret: String,
    exp_secs: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: String,
    exp: i64,
    iat: i64,
}

impl JwtTokenService {
    pub fn new(jwt_secret: &str, exp_secs: i64) -> Self {
        Self {
            jwt_secret: jwt_secret.to_string(),
            exp_secs,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, subject: &str) -> Result<String, CatalogError> {
        let now = Utc::now().timestamp();
        let claims = JwtClaims {
            sub: subject.to_string(),
            exp: now + self.exp_secs,
            iat: now,
        };
        let key = EncodingKey::from_secret(self.jwt_secret.as_bytes());
        encode(&Header::new(Algorithm::HS256), &claims, &key)
            .map_err(|e| CatalogError::Other(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, CatalogError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| CatalogError::Other(e.to_string()))?;
        Ok(TokenClaims {
            subject: data.claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_verify_round_trip() {
        let svc = JwtTokenService::new("test_secret", 3600);
        let token = svc.issue("api-client").unwrap();
        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.subject, "api-client");
    }

    #[test]
    fn test_expired_token_rejected() {
        // past the default validation leeway
        let svc = JwtTokenService::new("test_secret", -120);
        let token = svc.issue("api-client").unwrap();
        assert!(svc.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = JwtTokenService::new("secret_a", 3600);
        let verifier = JwtTokenService::new("secret_b", 3600);
        let token = issuer.issue("api-client").unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let svc = JwtTokenService::new("test_secret", 3600);
        assert!(svc.verify("not-a-jwt").is_err());
    }
}
