use std::sync::Arc;

use crate::domain::entities::{Actor, Reservation, ReservationStatus, Role};
use crate::domain::errors::ReservationError;
use crate::domain::ports::{Clock, ReservationGateway};

// Approval use case. A lecturer moves PENDING to LECTURER_APPROVED, an admin
// moves LECTURER_APPROVED to ADMIN_APPROVED; every other combination is a
// state conflict. The transition is persisted as a single update call.
pub struct ApproveReservationUseCase<C, G> {
    pub clock: C,
    pub gateway: Arc<G>,
}

impl<C, G> ApproveReservationUseCase<C, G>
where
    C: Clock,
    G: ReservationGateway,
{
    pub async fn execute(
        &self,
        reservation: Reservation,
        actor: &Actor,
    ) -> Result<Reservation, ReservationError> {
        let now = self.clock.now_utc();
        let mut updated = reservation;

        match (updated.status, actor.role) {
            (ReservationStatus::Pending, Role::Lecturer) => {
                updated.status = ReservationStatus::LecturerApproved;
                updated.lecturer_approved_by = Some(actor.username.clone());
                updated.lecturer_approved_at = Some(now);
            }
            (ReservationStatus::LecturerApproved, Role::Admin) => {
                updated.status = ReservationStatus::AdminApproved;
                updated.admin_approved_by = Some(actor.username.clone());
                updated.admin_approved_at = Some(now);
            }
            (status, _) => {
                return Err(ReservationError::StateConflict { current: status });
            }
        }
        updated.updated_at = now;

        let persisted = self.gateway.update_reservation(updated.id, &updated).await?;
        tracing::info!(
            reservation = persisted.id,
            status = persisted.status.as_str(),
            approver = %actor.username,
            "reservation approved"
        );

        Ok(persisted)
    }
}
