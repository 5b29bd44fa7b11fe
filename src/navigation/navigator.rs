use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use super::guard::{before_each, GuardDecision};
use super::matcher::{RouteMatch, RouteTable};
use super::route::View;
use crate::session::SessionStore;

/// Redirect chains longer than this are treated as a route table defect
/// instead of looping forever.
const MAX_REDIRECT_HOPS: usize = 8;

/// Where a navigation attempt landed.
#[derive(Serialize, Debug, Clone)]
pub struct Navigation {
    /// Final, normalized location.
    pub location: String,
    pub name: Option<&'static str>,
    pub view: Option<View>,
    pub params: HashMap<String, String>,
    /// The originally requested path, present when the navigation was
    /// redirected away from it (by a route redirect or the guard).
    pub redirected_from: Option<String>,
}

/// Resolves navigation attempts against the route table, running the guard
/// on each hop and tracking the current location.
///
/// The session is an explicit dependency handed in at construction; the
/// navigator reads it through the guard and never mutates it.
pub struct Navigator {
    table: RouteTable,
    session: Arc<SessionStore>,
    current: RwLock<Option<RouteMatch>>,
}

impl Navigator {
    pub fn new(table: RouteTable, session: Arc<SessionStore>) -> Self {
        Navigator {
            table,
            session,
            current: RwLock::new(None),
        }
    }

    /// The route the navigator currently sits on, if any navigation has
    /// succeeded yet.
    pub fn current(&self) -> Option<RouteMatch> {
        self.current.read().clone()
    }

    /// Navigates to `path`.
    ///
    /// Declared route redirects (the wildcard catch-all) and guard redirects
    /// are followed until a target proceeds; the result reports the final
    /// location and, when it differs, the originally requested path.
    pub fn navigate(&self, path: &str) -> Result<Navigation, String> {
        let mut target = path.to_string();
        let mut redirected = false;

        for _ in 0..MAX_REDIRECT_HOPS {
            let to = self
                .table
                .resolve(&target)
                .ok_or_else(|| format!("No route matches '{}'", target))?;

            if let Some(redirect) = to.redirect {
                debug!("Route '{}' redirects to '{}'.", to.path, redirect);
                target = redirect.to_string();
                redirected = true;
                continue;
            }

            let from = self.current.read().clone();
            let mut decision = None;
            before_each(&to, from.as_ref(), &self.session, |d| decision = Some(d));

            match decision.expect("guard invokes its continuation") {
                GuardDecision::Proceed => {
                    let navigation = Navigation {
                        location: to.path.clone(),
                        name: to.name,
                        view: to.view,
                        params: to.params.clone(),
                        redirected_from: redirected.then(|| path.to_string()),
                    };
                    *self.current.write() = Some(to);
                    return Ok(navigation);
                }
                GuardDecision::Redirect(next_target) => {
                    target = next_target;
                    redirected = true;
                }
            }
        }

        Err(format!("Too many redirects while navigating to '{}'", path))
    }
}
