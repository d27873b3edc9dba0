use async_trait::async_trait;

use crate::domain::entities::{
    CredentialPair, NewAccount, NewFeedback, NewReservation, Page, RegisterOutcome, Reservation,
    ReservationStatus, Room, StoredSession,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthGateway, Clock, ReservationGateway, SessionStore};
use crate::interface_adapters::clients::api::ApiClient;
use crate::interface_adapters::protocol::{LoginRequest, LoginResponse, LogoutRequest};

#[async_trait]
impl<S, C> AuthGateway for ApiClient<S, C>
where
    S: SessionStore,
    C: Clock,
{
    async fn login(&self, username: &str, password: &str) -> Result<StoredSession, ApiError> {
        let response: LoginResponse = self
            .post_public("/login", &LoginRequest { username, password })
            .await?;

        Ok(StoredSession {
            credentials: CredentialPair {
                access: response.access,
                refresh: response.refresh,
            },
            profile: response.user,
        })
    }

    async fn register(&self, account: &NewAccount) -> Result<RegisterOutcome, ApiError> {
        self.post_public("/register", account).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        // Nothing to blacklist without a stored session.
        let Some(session) = self.stored_session() else {
            return Ok(());
        };

        self.post_empty(
            "/logout",
            &LogoutRequest {
                refresh: &session.credentials.refresh,
            },
        )
        .await
    }
}

#[async_trait]
impl<S, C> ReservationGateway for ApiClient<S, C>
where
    S: SessionStore,
    C: Clock,
{
    async fn list_rooms(&self, page: u32) -> Result<Page<Room>, ApiError> {
        self.get_json(&format!("/rooms/?page={page}")).await
    }

    async fn list_reservations(&self, page: u32) -> Result<Page<Reservation>, ApiError> {
        self.get_json(&format!("/reservations/?page={page}")).await
    }

    async fn create_reservation(&self, request: &NewReservation) -> Result<Reservation, ApiError> {
        // The backend forces PENDING regardless; send it explicitly so the
        // payload matches what the booking form submits.
        let body = serde_json::json!({
            "room": request.room,
            "start": request.start,
            "end": request.end,
            "purpose": request.purpose,
            "requested_capacity": request.requested_capacity,
            "status": ReservationStatus::Pending,
        });
        self.post_json("/reservations/", &body).await
    }

    async fn update_reservation(
        &self,
        id: i64,
        reservation: &Reservation,
    ) -> Result<Reservation, ApiError> {
        self.put_json(&format!("/reservations/{id}/"), reservation)
            .await
    }

    async fn cancel_reservation(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/reservations/{id}/")).await
    }

    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<(), ApiError> {
        self.post_empty("/feedback/", feedback).await
    }
}
