// Use cases layer: session lifecycle and reservation workflows.

pub mod approve_reservation;
pub mod cancel_reservation;
pub mod create_reservation;
pub mod login;
pub mod logout;
pub mod register;
pub mod reject_reservation;
pub mod submit_feedback;

#[cfg(test)]
pub(crate) mod test_support;
