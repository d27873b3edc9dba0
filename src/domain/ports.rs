use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    NewAccount, NewFeedback, NewReservation, Page, RegisterOutcome, Reservation, Room,
    StoredSession,
};
use crate::domain::errors::ApiError;

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;

    fn now_epoch_seconds(&self) -> u64 {
        self.now_utc().timestamp().max(0) as u64
    }
}

// Port for the client-local session store. Implementations guard the whole
// session value with one lock: login, refresh, and logout replace or clear it
// wholesale, and a concurrent reader never sees a half-updated pair.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<StoredSession>;
    fn set(&self, session: StoredSession);
    fn clear(&self);
}

// Port for the account/session endpoints. The use cases depend on this trait,
// not the concrete reqwest client.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<StoredSession, ApiError>;
    async fn register(&self, account: &NewAccount) -> Result<RegisterOutcome, ApiError>;
    // Asks the backend to blacklist the stored refresh token.
    async fn logout(&self) -> Result<(), ApiError>;
}

// Port for the reservation, room, and feedback endpoints.
#[async_trait]
pub trait ReservationGateway: Send + Sync {
    async fn list_rooms(&self, page: u32) -> Result<Page<Room>, ApiError>;
    async fn list_reservations(&self, page: u32) -> Result<Page<Reservation>, ApiError>;
    async fn create_reservation(&self, request: &NewReservation) -> Result<Reservation, ApiError>;
    async fn update_reservation(
        &self,
        id: i64,
        reservation: &Reservation,
    ) -> Result<Reservation, ApiError>;
    async fn cancel_reservation(&self, id: i64) -> Result<(), ApiError>;
    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<(), ApiError>;
}
