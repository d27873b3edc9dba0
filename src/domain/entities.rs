use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// Access/refresh token pair issued by the backend on login.
// Replaced wholesale on refresh; never updated field-by-field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
    pub access: String,
    pub refresh: String,
}

// Role carried in the login response and used to gate approval stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Lecturer,
    Admin,
}

// Profile fields persisted alongside the tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub role: Role,
}

// Everything the client keeps between requests: one value, written and
// cleared wholesale so a reader never observes a half-updated pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub credentials: CredentialPair,
    pub profile: UserProfile,
}

// The user performing a workflow action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub username: String,
    pub role: Role,
}

// Reservation lifecycle states. The sequence is PENDING -> LECTURER_APPROVED
// -> ADMIN_APPROVED, with rejection or cancellation short-circuiting to a
// terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    LecturerApproved,
    AdminApproved,
    LecturerRejected,
    AdminRejected,
    Cancelled,
}

impl ReservationStatus {
    // No transition is permitted out of a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::AdminApproved | Self::LecturerRejected | Self::AdminRejected | Self::Cancelled
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::LecturerApproved => "LECTURER_APPROVED",
            Self::AdminApproved => "ADMIN_APPROVED",
            Self::LecturerRejected => "LECTURER_REJECTED",
            Self::AdminRejected => "ADMIN_REJECTED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

// Reservation record as exchanged with the backend. Start/end are naive
// wall-clock times (the booking form has no timezone); audit timestamps are
// UTC.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub requester: String,
    pub room: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub purpose: String,
    pub requested_capacity: u32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub lecturer_approved_by: Option<String>,
    #[serde(default)]
    pub lecturer_approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub admin_approved_by: Option<String>,
    #[serde(default)]
    pub admin_approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejected_by: Option<String>,
    #[serde(default)]
    pub rejected_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

// Payload for creating a reservation. The backend forces status to PENDING.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewReservation {
    pub room: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub purpose: String,
    pub requested_capacity: u32,
}

// Operational status of a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Active,
    Maintenance,
    Inactive,
}

// Room record; read-only lookup from this core's perspective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub facilities: Vec<String>,
    pub status: RoomStatus,
}

// Registration payload; the backend issues no tokens for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password1: String,
    pub password2: String,
}

// Outcome of a registration attempt, surfaced to the UI as-is.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterOutcome {
    pub success: bool,
    pub message: String,
}

// Feedback payload for a completed, approved reservation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewFeedback {
    pub reservation: i64,
    pub rating: u8,
    pub comment: String,
}

// Pagination envelope used by the room and reservation list endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}
