use std::sync::Arc;

use crate::domain::entities::{NewReservation, Reservation};
use crate::domain::errors::ReservationError;
use crate::domain::ports::ReservationGateway;

// Reservation creation use case. Required fields are checked before any
// network call; the backend forces the initial status to PENDING.
pub struct CreateReservationUseCase<G> {
    pub gateway: Arc<G>,
}

impl<G> CreateReservationUseCase<G>
where
    G: ReservationGateway,
{
    pub async fn execute(&self, request: NewReservation) -> Result<Reservation, ReservationError> {
        validate_request(&request)?;

        let created = self.gateway.create_reservation(&request).await?;
        tracing::info!(reservation = created.id, room = created.room, "reservation created");

        Ok(created)
    }
}

fn validate_request(request: &NewReservation) -> Result<(), ReservationError> {
    if request.room <= 0 {
        return Err(ReservationError::validation("room is required"));
    }
    if request.end <= request.start {
        return Err(ReservationError::validation("end must be after start"));
    }
    if request.purpose.trim().is_empty() {
        return Err(ReservationError::validation("purpose is required"));
    }
    if request.requested_capacity == 0 {
        return Err(ReservationError::validation(
            "requested capacity must be positive",
        ));
    }

    Ok(())
}
