// Domain layer: core reservation and session types, ports, and rules.

pub mod claims;
pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{
    Actor, CredentialPair, NewAccount, NewFeedback, NewReservation, Page, RegisterOutcome,
    Reservation, ReservationStatus, Role, Room, RoomStatus, StoredSession, UserProfile,
};
pub use errors::{ApiError, ReservationError};
