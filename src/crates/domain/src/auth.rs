use crate::error::CatalogError;

/// Claims carried by a verified bearer credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: String,
}

pub trait TokenService: Send + Sync {
    fn issue(&self, subject: &str) -> Result<String, CatalogError>;
    fn verify(&self, token: &str) -> Result<TokenClaims, CatalogError>;
}
