use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::claims;
use crate::domain::entities::{CredentialPair, StoredSession};
use crate::domain::errors::ApiError;
use crate::domain::ports::{Clock, SessionStore};
use crate::interface_adapters::protocol::{ErrorBody, RefreshRequest, RefreshResponse};

// Authenticated reqwest client for the reservation backend. Attaches the
// bearer token to every request, refreshes an expired access token before
// sending, and retries exactly once after an unpredicted 401.
pub struct ApiClient<S, C> {
    http: reqwest::Client,
    base_url: String,
    store: Arc<S>,
    clock: C,
}

impl<S, C> ApiClient<S, C>
where
    S: SessionStore,
    C: Clock,
{
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        store: Arc<S>,
        clock: C,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            store,
            clock,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Send one bodyless request with the session guard applied.
    pub async fn request(&self, method: Method, path: &str) -> Result<Response, ApiError> {
        self.send(method, path, None::<&Value>).await
    }

    // Send one request with the session guard applied. Transport failures on
    // the request itself propagate unchanged; only a 401 triggers the single
    // refresh-and-resend cycle. The retry is a second explicit dispatch, so
    // its scope is this call alone and a second 401 is returned as-is.
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + Sync,
    {
        let token = self.current_access_token().await?;
        let response = self
            .dispatch(method.clone(), path, body, token.as_deref())
            .await
            .map_err(ApiError::Network)?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        // The expiry could not be predicted client-side (e.g. server-side
        // revocation): exchange the refresh token and resend the original
        // request with the new access token.
        tracing::debug!(%path, "received 401; attempting token refresh");
        let access = self.refresh_credentials().await?;
        self.dispatch(method, path, body, Some(access.as_str()))
            .await
            .map_err(ApiError::Network)
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<Response, reqwest::Error>
    where
        B: Serialize + Sync,
    {
        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await
    }

    // Return the access token to attach, refreshing first when its expiry
    // claim has already passed. No stored session means the request goes out
    // unauthenticated and the backend decides.
    async fn current_access_token(&self) -> Result<Option<String>, ApiError> {
        let Some(session) = self.store.get() else {
            return Ok(None);
        };

        if claims::is_expired(&session.credentials.access, self.clock.now_epoch_seconds()) {
            tracing::debug!("access token expired; refreshing before request");
            return Ok(Some(self.refresh_credentials().await?));
        }

        Ok(Some(session.credentials.access))
    }

    // Exchange the refresh token for a new credential pair. Any failure here
    // is terminal: local credentials are cleared and SessionExpired raised.
    // The new pair is written back in a single set so no reader observes a
    // fresh access token next to a stale refresh token.
    async fn refresh_credentials(&self) -> Result<String, ApiError> {
        let Some(session) = self.store.get() else {
            return Err(ApiError::SessionExpired);
        };

        match self
            .exchange_refresh_token(&session.credentials.refresh)
            .await
        {
            Ok(exchanged) => {
                let refresh = exchanged.refresh.unwrap_or(session.credentials.refresh);
                let access = exchanged.access.clone();
                self.store.set(StoredSession {
                    credentials: CredentialPair {
                        access: exchanged.access,
                        refresh,
                    },
                    profile: session.profile,
                });
                tracing::info!("access token refreshed");
                Ok(access)
            }
            Err(err) => {
                tracing::warn!(error = %err, "refresh exchange failed; clearing session");
                self.store.clear();
                Err(ApiError::SessionExpired)
            }
        }
    }

    // The refresh exchange itself is a bare call: no bearer header, no retry.
    async fn exchange_refresh_token(
        &self,
        refresh: &str,
    ) -> Result<RefreshResponse, reqwest::Error> {
        self.http
            .post(self.url("/token/refresh/"))
            .json(&RefreshRequest { refresh })
            .send()
            .await?
            .error_for_status()?
            .json::<RefreshResponse>()
            .await
    }

    // Unauthenticated POST for login/register; never touches the session.
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::Network)?;
        Self::decode(response).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).await?;
        Self::decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Self::decode(response).await
    }

    pub async fn post_empty<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + Sync,
    {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path).await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    pub(crate) fn stored_session(&self) -> Option<StoredSession> {
        self.store.get()
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    // Keep the upstream status and message so callers can present 4xx
    // failures meaningfully.
    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
