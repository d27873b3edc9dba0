use std::sync::Arc;

use crate::domain::entities::{Actor, Reservation, ReservationStatus, Role};
use crate::domain::errors::ReservationError;
use crate::domain::ports::{Clock, ReservationGateway};

// Rejection use case. Rejection short-circuits the approval sequence at the
// stage the actor owns; a reason is mandatory and the reservation is left
// untouched when it is missing.
pub struct RejectReservationUseCase<C, G> {
    pub clock: C,
    pub gateway: Arc<G>,
}

impl<C, G> RejectReservationUseCase<C, G>
where
    C: Clock,
    G: ReservationGateway,
{
    pub async fn execute(
        &self,
        reservation: Reservation,
        actor: &Actor,
        reason: &str,
    ) -> Result<Reservation, ReservationError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ReservationError::validation("rejection reason is required"));
        }

        let now = self.clock.now_utc();
        let mut updated = reservation;

        let next = match (updated.status, actor.role) {
            (ReservationStatus::Pending, Role::Lecturer) => ReservationStatus::LecturerRejected,
            (ReservationStatus::LecturerApproved, Role::Admin) => ReservationStatus::AdminRejected,
            (status, _) => {
                return Err(ReservationError::StateConflict { current: status });
            }
        };

        updated.status = next;
        updated.rejected_by = Some(actor.username.clone());
        updated.rejected_at = Some(now);
        updated.rejection_reason = Some(reason.to_string());
        updated.updated_at = now;

        let persisted = self.gateway.update_reservation(updated.id, &updated).await?;
        tracing::info!(
            reservation = persisted.id,
            status = persisted.status.as_str(),
            rejected_by = %actor.username,
            "reservation rejected"
        );

        Ok(persisted)
    }
}
