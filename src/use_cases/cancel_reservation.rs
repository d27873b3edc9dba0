use std::sync::Arc;

use crate::domain::entities::{Actor, Reservation, ReservationStatus};
use crate::domain::errors::ReservationError;
use crate::domain::ports::{Clock, ReservationGateway};

// Cancellation use case: requester-initiated, permitted only while the
// reservation is still PENDING. The backend removes the record; the returned
// value reflects the terminal CANCELLED state for the caller.
pub struct CancelReservationUseCase<C, G> {
    pub clock: C,
    pub gateway: Arc<G>,
}

impl<C, G> CancelReservationUseCase<C, G>
where
    C: Clock,
    G: ReservationGateway,
{
    pub async fn execute(
        &self,
        reservation: Reservation,
        actor: &Actor,
    ) -> Result<Reservation, ReservationError> {
        // Status is checked before ownership so cancelling an already-decided
        // reservation reads as a sequence violation, not a permission one.
        if reservation.status != ReservationStatus::Pending {
            return Err(ReservationError::StateConflict {
                current: reservation.status,
            });
        }
        if reservation.requester != actor.username {
            return Err(ReservationError::Forbidden);
        }

        self.gateway.cancel_reservation(reservation.id).await?;

        let mut updated = reservation;
        updated.status = ReservationStatus::Cancelled;
        updated.updated_at = self.clock.now_utc();
        tracing::info!(reservation = updated.id, "reservation cancelled");

        Ok(updated)
    }
}
