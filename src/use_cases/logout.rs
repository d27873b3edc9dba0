use std::sync::Arc;

use crate::domain::ports::{AuthGateway, SessionStore};

// Logout use case. Server-side token blacklisting is best-effort: a failed
// call is logged and the local session is cleared regardless.
pub struct LogoutUseCase<G, S> {
    pub gateway: Arc<G>,
    pub store: Arc<S>,
}

impl<G, S> LogoutUseCase<G, S>
where
    G: AuthGateway,
    S: SessionStore,
{
    pub async fn execute(&self) {
        if let Err(err) = self.gateway.logout().await {
            tracing::warn!(error = %err, "server-side logout failed; clearing local session anyway");
        }

        self.store.clear();
        tracing::info!("local session cleared");
    }
}
