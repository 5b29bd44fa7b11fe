use tracing::debug;

use super::matcher::RouteMatch;
use super::route::LOGIN_PATH;
use crate::session::SessionStore;

/// What the guard resolved a navigation attempt to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed to its target.
    Proceed,
    /// Abandon the target and navigate here instead.
    Redirect(String),
}

/// The global before-navigation guard.
///
/// Invoked for every navigation attempt with the resolved target, the route
/// being navigated away from, and a continuation. The continuation is an
/// `FnOnce`, so it is invoked exactly once per attempt.
///
/// The decision is pure and synchronous: a protected target plus a
/// logged-out session redirects to the login path; everything else proceeds.
pub fn before_each<F>(to: &RouteMatch, _from: Option<&RouteMatch>, session: &SessionStore, next: F)
where
    F: FnOnce(GuardDecision),
{
    let requires_auth = to.requires_auth();
    let authenticated = session.is_authenticated();

    if requires_auth && !authenticated {
        debug!(
            "Blocking unauthenticated navigation to '{}', redirecting to '{}'.",
            to.path, LOGIN_PATH
        );
        next(GuardDecision::Redirect(LOGIN_PATH.to_string()));
    } else {
        next(GuardDecision::Proceed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::models::User;
    use crate::navigation::route::route_table;
    use crate::navigation::RouteTable;
    use crate::session::SessionStore;
    use crate::storage::memory_storage::MemoryStorage;

    fn session() -> SessionStore {
        SessionStore::restore(Arc::new(MemoryStorage::new())).unwrap()
    }

    fn decide(path: &str, session: &SessionStore) -> GuardDecision {
        let table = RouteTable::new(route_table());
        let to = table.resolve(path).unwrap();
        let mut decision = None;
        before_each(&to, None, session, |d| decision = Some(d));
        decision.expect("guard must invoke the continuation")
    }

    /// A logged-out session is redirected away from protected routes only.
    #[test]
    fn test_blocks_unauthenticated_protected_navigation() {
        let session = session();
        assert_eq!(decide("/dashboard", &session), GuardDecision::Redirect("/".to_string()));
        assert_eq!(
            decide("/visualization/3", &session),
            GuardDecision::Redirect("/".to_string())
        );
        assert_eq!(decide("/", &session), GuardDecision::Proceed);
        assert_eq!(decide("/register", &session), GuardDecision::Proceed);
    }

    /// A logged-in session proceeds everywhere.
    #[test]
    fn test_allows_authenticated_navigation() {
        let session = session();
        session.login(User::new("adam")).unwrap();
        assert_eq!(decide("/dashboard", &session), GuardDecision::Proceed);
        assert_eq!(decide("/visualization/3", &session), GuardDecision::Proceed);
        assert_eq!(decide("/", &session), GuardDecision::Proceed);
    }
}
