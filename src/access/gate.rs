//! Render-or-redirect authorization for protected views.

use crate::store::SessionUser;

use super::routes::{home_route_for, Role, Route};

/// What a protected view should do with the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Render,
    Redirect(Route),
}

/// Decide whether a view may render.
///
/// No session always redirects to Login. With a session, a view that
/// requires no particular role renders; a role mismatch redirects to the
/// session role's own home (an unrecognized stored role lands on Login).
pub fn authorize(session: Option<&SessionUser>, required_role: Option<Role>) -> GateOutcome {
    let Some(user) = session else {
        return GateOutcome::Redirect(Route::Login);
    };

    match required_role {
        Some(required) if user.role != required.as_str() => {
            GateOutcome::Redirect(home_route_for(&user.role))
        }
        _ => GateOutcome::Render,
    }
}
