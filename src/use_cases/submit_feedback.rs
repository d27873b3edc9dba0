use std::sync::Arc;

use crate::domain::entities::{NewFeedback, Reservation, ReservationStatus};
use crate::domain::errors::ReservationError;
use crate::domain::ports::{Clock, ReservationGateway};

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;

// Feedback use case: a rating and comment may be attached only to a fully
// approved reservation whose time window has already ended.
pub struct SubmitFeedbackUseCase<C, G> {
    pub clock: C,
    pub gateway: Arc<G>,
}

impl<C, G> SubmitFeedbackUseCase<C, G>
where
    C: Clock,
    G: ReservationGateway,
{
    pub async fn execute(
        &self,
        reservation: &Reservation,
        rating: u8,
        comment: &str,
    ) -> Result<(), ReservationError> {
        if reservation.status != ReservationStatus::AdminApproved {
            return Err(ReservationError::validation(
                "feedback requires an approved reservation",
            ));
        }
        // Reservation windows are naive wall-clock times; compare against the
        // clock's naive UTC view.
        if reservation.end > self.clock.now_utc().naive_utc() {
            return Err(ReservationError::validation(
                "feedback requires the reservation to have ended",
            ));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ReservationError::validation("rating must be between 1 and 5"));
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ReservationError::validation("comment is required"));
        }

        self.gateway
            .submit_feedback(&NewFeedback {
                reservation: reservation.id,
                rating,
                comment: comment.to_string(),
            })
            .await?;
        tracing::info!(reservation = reservation.id, rating, "feedback submitted");

        Ok(())
    }
}
