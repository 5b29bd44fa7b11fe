use serde::Serialize;

/// Path every guard rejection and the wildcard catch-all redirect to.
pub const LOGIN_PATH: &str = "/";

/// The views the host application renders. Rendering itself is the host's
/// job; this layer only decides which view a navigation lands on.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Dashboard,
    DashboardHome,
    Visualization,
}

/// A node in the static route tree.
///
/// `requires_auth` is inherited by match: a navigation is protected if any
/// entry in its matched chain sets it, so children of a protected entry are
/// protected without repeating the flag.
#[derive(Debug, Default)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: Option<View>,
    pub requires_auth: bool,
    pub redirect: Option<&'static str>,
    pub children: Vec<RouteEntry>,
}

/// The application route table, defined once at startup.
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        RouteEntry {
            path: "/",
            name: Some("Login"),
            view: Some(View::Login),
            ..Default::default()
        },
        RouteEntry {
            path: "/register",
            name: Some("Register"),
            view: Some(View::Register),
            ..Default::default()
        },
        RouteEntry {
            path: "/dashboard",
            name: Some("Dashboard"),
            view: Some(View::Dashboard),
            requires_auth: true,
            children: vec![
                RouteEntry {
                    path: "",
                    name: Some("DashboardHome"),
                    view: Some(View::DashboardHome),
                    ..Default::default()
                },
                // Absolute path kept for URL compatibility. Still a
                // dashboard child, so its matched chain carries the parent's
                // auth requirement.
                RouteEntry {
                    path: "/visualization/:id",
                    name: Some("Visualization"),
                    view: Some(View::Visualization),
                    ..Default::default()
                },
            ],
            ..Default::default()
        },
        // Anything unmatched lands on the login page.
        RouteEntry {
            path: "/*",
            redirect: Some(LOGIN_PATH),
            ..Default::default()
        },
    ]
}
