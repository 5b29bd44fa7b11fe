//! Route table, path matching, and the auth navigation guard.
//!
//! This is the client-side routing contract of the application: a static
//! route tree resolved per navigation, with a guard that redirects
//! unauthenticated navigations away from protected views.

pub mod guard;
pub mod matcher;
pub mod navigator;
pub mod route;

pub use guard::{before_each, GuardDecision};
pub use matcher::{MatchedRecord, RouteMatch, RouteTable};
pub use navigator::{Navigation, Navigator};
pub use route::{route_table, RouteEntry, View, LOGIN_PATH};
