use crate::domain::ports::AdminAuthenticator;
use crate::error::AppError;
use async_trait::async_trait;

/// Accepts exactly one fixed value. There is no identity, expiry or
/// rotation behind it.
pub struct SharedSecretAuthenticator {
    secret: String,
}

impl SharedSecretAuthenticator {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }
}

#[async_trait]
impl AdminAuthenticator for SharedSecretAuthenticator {
    async fn validate_credential(&self, credential: &str) -> Result<bool, AppError> {
        Ok(!self.secret.is_empty() && credential == self.secret)
    }
}
