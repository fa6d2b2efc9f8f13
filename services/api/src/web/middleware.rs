//! services/api/src/web/middleware.rs
//!
//! Identity resolution for every request, and a guard for routes that need a
//! signed-in user.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

use word_of_the_day_core::{ActorId, User, VisitorId};

use crate::web::state::AppState;

pub const SESSION_COOKIE: &str = "session";
pub const VISITOR_HEADER: &str = "x-visitor-id";

const MAX_VISITOR_ID_CHARS: usize = 128;

/// Who is making the request. Inserted into the request extensions by [`identify`].
#[derive(Debug, Clone, Default)]
pub struct Identity {
    pub user: Option<User>,
    pub visitor: Option<VisitorId>,
}

impl Identity {
    /// The reaction owner: the user when signed in, otherwise the visitor.
    pub fn actor(&self) -> Option<ActorId> {
        ActorId::resolve(self.user.as_ref(), self.visitor.as_ref())
    }
}

fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())?
        .split(';')
        .find_map(|c| c.trim().strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .filter(|token| !token.is_empty())
}

fn visitor_id(headers: &HeaderMap) -> Option<VisitorId> {
    headers
        .get(VISITOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.chars().count() <= MAX_VISITOR_ID_CHARS)
        .map(VisitorId::new)
}

/// Resolves the session cookie and the visitor header into an [`Identity`].
///
/// An unknown or expired session is treated as anonymous rather than rejected.
pub async fn identify(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let user = match session_token(req.headers()) {
        Some(token) => match state.auth.validate_auth_session(token).await {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Ignoring invalid auth session: {:?}", e);
                None
            }
        },
        None => None,
    };
    let visitor = visitor_id(req.headers());

    req.extensions_mut().insert(Identity { user, visitor });
    next.run(req).await
}

/// Rejects the request with 401 unless [`identify`] found a signed-in user.
pub async fn require_user(req: Request, next: Next) -> Result<Response, StatusCode> {
    let signed_in = req
        .extensions()
        .get::<Identity>()
        .is_some_and(|identity| identity.user.is_some());
    if !signed_in {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(req).await)
}
