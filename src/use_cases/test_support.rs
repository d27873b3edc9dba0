use std::sync::Mutex;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    Actor, CredentialPair, NewAccount, NewFeedback, NewReservation, Page, RegisterOutcome,
    Reservation, ReservationStatus, Role, Room, StoredSession, UserProfile,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthGateway, Clock, ReservationGateway, SessionStore};

// Shared fixed time source (epoch seconds) for deterministic tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.0 as i64, 0).expect("valid test epoch")
    }
}

// In-memory session store mirroring the file-backed one.
#[derive(Default)]
pub(crate) struct MemorySessionStore {
    session: Mutex<Option<StoredSession>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<StoredSession> {
        self.session.lock().expect("session mutex poisoned").clone()
    }

    fn set(&self, session: StoredSession) {
        let mut guard = self.session.lock().expect("session mutex poisoned");
        *guard = Some(session);
    }

    fn clear(&self) {
        let mut guard = self.session.lock().expect("session mutex poisoned");
        *guard = None;
    }
}

// Mint an unsigned JWT-shaped token carrying only the claims this client
// reads. The signature part is opaque to the client.
pub(crate) fn make_access_token(exp: u64) -> String {
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\",\"typ\":\"JWT\"}");
    let payload = URL_SAFE_NO_PAD.encode(format!("{{\"exp\":{exp},\"username\":\"ahmad\"}}"));
    format!("{header}.{payload}.signature")
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub login: bool,
    pub register: bool,
    pub logout: bool,
    pub create: bool,
    pub update: bool,
    pub cancel: bool,
    pub feedback: bool,
}

// Recording fake for both gateway ports. Failure toggles let negative-path
// tests verify error mapping without a network.
pub(crate) struct RecordingGateway {
    failures: FailureFlags,
    created: Mutex<Vec<NewReservation>>,
    updated: Mutex<Vec<(i64, Reservation)>>,
    cancelled: Mutex<Vec<i64>>,
    feedback: Mutex<Vec<NewFeedback>>,
    logouts: Mutex<usize>,
}

impl RecordingGateway {
    pub(crate) fn new() -> Self {
        Self {
            failures: FailureFlags::default(),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
            feedback: Mutex::new(Vec::new()),
            logouts: Mutex::new(0),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn created_requests(&self) -> Vec<NewReservation> {
        self.created.lock().expect("created mutex poisoned").clone()
    }

    pub(crate) fn updated_reservations(&self) -> Vec<(i64, Reservation)> {
        self.updated.lock().expect("updated mutex poisoned").clone()
    }

    pub(crate) fn cancelled_ids(&self) -> Vec<i64> {
        self.cancelled.lock().expect("cancelled mutex poisoned").clone()
    }

    pub(crate) fn submitted_feedback(&self) -> Vec<NewFeedback> {
        self.feedback.lock().expect("feedback mutex poisoned").clone()
    }

    pub(crate) fn logout_calls(&self) -> usize {
        *self.logouts.lock().expect("logouts mutex poisoned")
    }
}

fn gateway_error() -> ApiError {
    ApiError::Status {
        status: 502,
        message: Some("gateway failed".to_string()),
    }
}

#[async_trait]
impl AuthGateway for RecordingGateway {
    async fn login(&self, username: &str, _password: &str) -> Result<StoredSession, ApiError> {
        if self.failures.login {
            return Err(gateway_error());
        }
        Ok(StoredSession {
            credentials: CredentialPair {
                access: "access-1".to_string(),
                refresh: "refresh-1".to_string(),
            },
            profile: UserProfile {
                username: username.to_string(),
                email: format!("{username}@student.univ.ac.id"),
                role: Role::Student,
            },
        })
    }

    async fn register(&self, _account: &NewAccount) -> Result<RegisterOutcome, ApiError> {
        if self.failures.register {
            return Err(gateway_error());
        }
        Ok(RegisterOutcome {
            success: true,
            message: "Account created".to_string(),
        })
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let mut guard = self.logouts.lock().expect("logouts mutex poisoned");
        *guard += 1;
        if self.failures.logout {
            return Err(gateway_error());
        }
        Ok(())
    }
}

#[async_trait]
impl ReservationGateway for RecordingGateway {
    async fn list_rooms(&self, _page: u32) -> Result<Page<Room>, ApiError> {
        Ok(Page {
            results: Vec::new(),
            count: 0,
            next: None,
            previous: None,
        })
    }

    async fn list_reservations(&self, _page: u32) -> Result<Page<Reservation>, ApiError> {
        Ok(Page {
            results: Vec::new(),
            count: 0,
            next: None,
            previous: None,
        })
    }

    async fn create_reservation(&self, request: &NewReservation) -> Result<Reservation, ApiError> {
        if self.failures.create {
            return Err(gateway_error());
        }
        let mut guard = self.created.lock().expect("created mutex poisoned");
        guard.push(request.clone());

        let created_at = DateTime::from_timestamp(1_705_588_200, 0).expect("valid test epoch");
        Ok(Reservation {
            id: 7,
            requester: "ahmad".to_string(),
            room: request.room,
            start: request.start,
            end: request.end,
            purpose: request.purpose.clone(),
            requested_capacity: request.requested_capacity,
            status: ReservationStatus::Pending,
            created_at,
            updated_at: created_at,
            lecturer_approved_by: None,
            lecturer_approved_at: None,
            admin_approved_by: None,
            admin_approved_at: None,
            rejected_by: None,
            rejected_at: None,
            rejection_reason: None,
        })
    }

    async fn update_reservation(
        &self,
        id: i64,
        reservation: &Reservation,
    ) -> Result<Reservation, ApiError> {
        if self.failures.update {
            return Err(gateway_error());
        }
        let mut guard = self.updated.lock().expect("updated mutex poisoned");
        guard.push((id, reservation.clone()));
        Ok(reservation.clone())
    }

    async fn cancel_reservation(&self, id: i64) -> Result<(), ApiError> {
        if self.failures.cancel {
            return Err(gateway_error());
        }
        let mut guard = self.cancelled.lock().expect("cancelled mutex poisoned");
        guard.push(id);
        Ok(())
    }

    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<(), ApiError> {
        if self.failures.feedback {
            return Err(gateway_error());
        }
        let mut guard = self.feedback.lock().expect("feedback mutex poisoned");
        guard.push(feedback.clone());
        Ok(())
    }
}

pub(crate) fn student() -> Actor {
    Actor {
        username: "ahmad".to_string(),
        role: Role::Student,
    }
}

pub(crate) fn lecturer() -> Actor {
    Actor {
        username: "siti".to_string(),
        role: Role::Lecturer,
    }
}

pub(crate) fn admin() -> Actor {
    Actor {
        username: "budi".to_string(),
        role: Role::Admin,
    }
}

pub(crate) fn sample_session() -> StoredSession {
    StoredSession {
        credentials: CredentialPair {
            access: "access-1".to_string(),
            refresh: "refresh-1".to_string(),
        },
        profile: UserProfile {
            username: "ahmad".to_string(),
            email: "ahmad@student.univ.ac.id".to_string(),
            role: Role::Student,
        },
    }
}

pub(crate) fn sample_account() -> NewAccount {
    NewAccount {
        username: "ahmad".to_string(),
        email: "ahmad@student.univ.ac.id".to_string(),
        first_name: "Ahmad".to_string(),
        last_name: "Rizki".to_string(),
        password1: "secret".to_string(),
        password2: "secret".to_string(),
    }
}

pub(crate) fn sample_new_reservation() -> NewReservation {
    NewReservation {
        room: 3,
        start: "2024-01-20T09:00:00".parse().expect("valid start"),
        end: "2024-01-20T11:00:00".parse().expect("valid end"),
        purpose: "Praktikum".to_string(),
        requested_capacity: 40,
    }
}

// Reservation requested by "ahmad" for 2024-01-20 09:00-11:00, in the given
// workflow state.
pub(crate) fn sample_reservation(status: ReservationStatus) -> Reservation {
    let created_at = DateTime::from_timestamp(1_705_588_200, 0).expect("valid test epoch");
    Reservation {
        id: 7,
        requester: "ahmad".to_string(),
        room: 3,
        start: "2024-01-20T09:00:00".parse().expect("valid start"),
        end: "2024-01-20T11:00:00".parse().expect("valid end"),
        purpose: "Praktikum".to_string(),
        requested_capacity: 40,
        status,
        created_at,
        updated_at: created_at,
        lecturer_approved_by: None,
        lecturer_approved_at: None,
        admin_approved_by: None,
        admin_approved_at: None,
        rejected_by: None,
        rejected_at: None,
        rejection_reason: None,
    }
}
