use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::entities::StoredSession;
use crate::domain::ports::SessionStore;

// File-backed session store: one JSON document holding tokens and profile,
// the client-side analogue of the browser's key-value store. The in-memory
// copy is authoritative for the running process; disk writes are best-effort
// and failures are logged rather than surfaced. All access goes through one
// mutex, so login/refresh/logout replace the session atomically with respect
// to concurrent reads.
pub struct FileSessionStore {
    path: PathBuf,
    cached: Mutex<Option<StoredSession>>,
}

impl FileSessionStore {
    // Open the store, loading a previously persisted session if one exists.
    // A missing or unreadable file starts the store unauthenticated.
    pub fn open(path: PathBuf) -> Self {
        let cached = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<StoredSession>(&bytes) {
                Ok(session) => Some(session),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "discarding unreadable session file");
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            path,
            cached: Mutex::new(cached),
        }
    }

    fn persist(&self, session: &StoredSession) {
        match serde_json::to_vec(session) {
            Ok(bytes) => {
                if let Err(err) = fs::write(&self.path, bytes) {
                    tracing::warn!(path = %self.path.display(), error = %err, "failed to persist session");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode session");
            }
        }
    }

    // A poisoned lock only means another thread panicked mid-update; the
    // session value itself is always whole, so recover the guard.
    fn lock_cached(&self) -> std::sync::MutexGuard<'_, Option<StoredSession>> {
        self.cached
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn remove_file(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to remove session file");
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<StoredSession> {
        self.lock_cached().clone()
    }

    fn set(&self, session: StoredSession) {
        let mut guard = self.lock_cached();
        self.persist(&session);
        *guard = Some(session);
    }

    fn clear(&self) {
        let mut guard = self.lock_cached();
        self.remove_file();
        *guard = None;
    }
}
