use std::sync::Arc;

use crate::domain::entities::{NewAccount, RegisterOutcome};
use crate::domain::errors::ApiError;
use crate::domain::ports::AuthGateway;

// Registration use case. The backend issues no tokens here; the outcome is
// returned for the UI to display and the credential store is untouched.
pub struct RegisterUseCase<G> {
    pub gateway: Arc<G>,
}

impl<G> RegisterUseCase<G>
where
    G: AuthGateway,
{
    pub async fn execute(&self, account: NewAccount) -> Result<RegisterOutcome, ApiError> {
        let outcome = self.gateway.register(&account).await?;

        if outcome.success {
            tracing::info!(username = %account.username, "registration succeeded");
        } else {
            tracing::debug!(username = %account.username, message = %outcome.message, "registration rejected");
        }

        Ok(outcome)
    }
}
