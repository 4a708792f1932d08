//! Visitor sessions and the carts they own.
//!
//! Every request carries a `mx_session` cookie. When it is missing or not a
//! UUID a fresh id is minted, stored in the request extensions, and sent back
//! with `Set-Cookie`. Handlers pull the id with the [`SessionId`] extractor
//! and look their cart up in the [`CartStore`].

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{FromRequestParts, Request},
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
        request::Parts,
    },
    middleware::Next,
    response::Response,
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{error::AppError, services::cart_service::Cart};

pub const SESSION_COOKIE: &str = "mx_session";

const CART_IDLE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

pub async fn ensure_session(mut request: Request, next: Next) -> Response {
    let existing = session_from_cookies(request.headers());
    let session = existing.unwrap_or_else(|| SessionId(Uuid::new_v4()));
    request.extensions_mut().insert(session);

    let mut response = next.run(request).await;

    if existing.is_none() {
        let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", session.0);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
        tracing::debug!(session = %session.0, "new visitor session");
    }
    response
}

pub fn session_from_cookies(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
        .map(SessionId)
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionId>()
            .copied()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("session middleware is not installed")))
    }
}

struct CartEntry {
    cart: Arc<Mutex<Cart>>,
    last_seen: Instant,
}

/// Carts keyed by session. Each cart has its own lock so concurrent requests
/// from one visitor serialize while different visitors never contend.
#[derive(Clone, Default)]
pub struct CartStore {
    carts: Arc<Mutex<HashMap<SessionId, CartEntry>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the session's cart, or an empty one. Never creates an entry,
    /// so read-only pages from cookieless clients leave the store alone.
    pub async fn snapshot(&self, session: SessionId) -> Cart {
        match self.existing(session).await {
            Some(cart) => cart.lock().await.clone(),
            None => Cart::new(),
        }
    }

    /// The session's cart if one was created.
    pub async fn existing(&self, session: SessionId) -> Option<Arc<Mutex<Cart>>> {
        let mut carts = self.carts.lock().await;
        carts.get_mut(&session).map(|entry| {
            entry.last_seen = Instant::now();
            entry.cart.clone()
        })
    }

    /// Returns the session's cart, creating an empty one on first use.
    pub async fn cart(&self, session: SessionId) -> Arc<Mutex<Cart>> {
        let now = Instant::now();
        let mut carts = self.carts.lock().await;
        if let Some(entry) = carts.get_mut(&session) {
            entry.last_seen = now;
            return entry.cart.clone();
        }

        carts.retain(|_, entry| now.duration_since(entry.last_seen) < CART_IDLE_TTL);
        let cart = Arc::new(Mutex::new(Cart::new()));
        carts.insert(
            session,
            CartEntry {
                cart: cart.clone(),
                last_seen: now,
            },
        );
        cart
    }

    pub async fn session_count(&self) -> usize {
        self.carts.lock().await.len()
    }
}
