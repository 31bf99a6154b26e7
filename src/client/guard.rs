//! Route guard for protected screens.
//!
//! [`evaluate`] checks "resolved" before "authenticated". A reload with a valid
//! persisted session therefore shows a loading placeholder until the restore
//! settles, never a redirect to the login screen.

use dioxus::prelude::*;

use crate::{
    client::{
        components::Loading,
        router::Route,
        session::Session,
        store::session::use_session,
    },
    model::user::Role,
};

/// Outcome of guarding one screen for the current session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Restore has not settled, show a placeholder and wait
    Pending,
    /// Nobody is logged in, send the user to the login screen
    Redirecting,
    /// Logged in with a role outside the allow-list
    Forbidden,
    Granted,
}

/// Decides access to a screen allow-listed to `allowed` (empty admits any role)
pub fn evaluate(session: &Session, allowed: &[Role]) -> Access {
    if !session.is_resolved() {
        return Access::Pending;
    }

    let Some(identity) = session.identity() else {
        return Access::Redirecting;
    };

    if !identity.role.is_allowed(allowed) {
        return Access::Forbidden;
    }

    Access::Granted
}

/// Renders `children` only when [`evaluate`] grants access
///
/// Re-evaluated whenever the session is replaced, so logging out from a
/// guarded screen redirects immediately.
#[component]
pub fn Protected(#[props(default)] roles: Vec<Role>, children: Element) -> Element {
    let session = use_session();
    let state = session.state;
    let navigator = use_navigator();

    let access = evaluate(&state.read(), &roles);

    use_effect(use_reactive!(|access| {
        if access == Access::Redirecting {
            navigator.replace(Route::Login {});
        }
    }));

    match access {
        Access::Pending | Access::Redirecting => rsx!(Loading {}),
        Access::Forbidden => rsx!(
            div { class: "flex justify-center p-6",
                div { role: "alert", class: "alert alert-error max-w-xl",
                    div {
                        h3 { class: "font-bold", "Acceso denegado" }
                        p { "No tienes permisos para ver esta sección." }
                    }
                }
            }
        ),
        Access::Granted => rsx!({ children }),
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, Access};
    use crate::{
        client::session::{Credential, Session},
        model::user::{Role, UserDto},
    };

    fn session_for(role: Role) -> Session {
        Session::authenticated(
            UserDto {
                id: "u1".to_string(),
                email: "user@chuflay.edu".to_string(),
                role,
                full_name: "Usuario".to_string(),
                is_active: true,
                colegio_id: None,
            },
            Credential::new("token").unwrap(),
        )
    }

    #[test]
    /// Expect Pending while unresolved, whatever the allow-list
    fn test_evaluate_pending_before_redirect() {
        let session = Session::pending();

        assert_eq!(evaluate(&session, &[]), Access::Pending);
        assert_eq!(evaluate(&session, &[Role::SchoolAdmin]), Access::Pending);
    }

    #[test]
    /// Expect Redirecting once resolved without an identity
    fn test_evaluate_redirect_when_anonymous() {
        assert_eq!(evaluate(&Session::anonymous(), &[]), Access::Redirecting);
        assert_eq!(
            evaluate(&Session::anonymous(), &[Role::Parent]),
            Access::Redirecting
        );
    }

    #[test]
    /// Expect a parent on a school-admin screen to be Forbidden, not redirected
    fn test_evaluate_forbidden_for_role_outside_allow_list() {
        let session = session_for(Role::Parent);

        assert_eq!(evaluate(&session, &[Role::SchoolAdmin]), Access::Forbidden);
    }

    #[test]
    /// Expect Granted for allow-listed roles and for an empty allow-list
    fn test_evaluate_granted() {
        let session = session_for(Role::SchoolAdmin);

        assert_eq!(evaluate(&session, &[Role::SchoolAdmin]), Access::Granted);
        assert_eq!(evaluate(&session, &[]), Access::Granted);
    }

    #[test]
    /// Expect a guarded screen to move straight from Pending to its final state
    fn test_evaluate_transitions_from_pending() {
        let allowed = [Role::SchoolAdmin];
        let mut session = Session::pending();
        let first = evaluate(&session, &allowed);

        session = session_for(Role::SchoolAdmin);
        let second = evaluate(&session, &allowed);

        assert_eq!((first, second), (Access::Pending, Access::Granted));

        session = Session::anonymous();
        assert_eq!(evaluate(&session, &allowed), Access::Redirecting);
    }
}
