use std::sync::Arc;

use crate::domain::entities::UserProfile;
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthGateway, SessionStore};

// Login use case with injected dependencies. On success the credential pair
// and profile are written to the store as one value.
pub struct LoginUseCase<G, S> {
    pub gateway: Arc<G>,
    pub store: Arc<S>,
}

impl<G, S> LoginUseCase<G, S>
where
    G: AuthGateway,
    S: SessionStore,
{
    pub async fn execute(&self, username: &str, password: &str) -> Result<UserProfile, ApiError> {
        let session = self.gateway.login(username, password).await?;
        let profile = session.profile.clone();

        self.store.set(session);
        tracing::info!(username = %profile.username, "login succeeded");

        Ok(profile)
    }
}
