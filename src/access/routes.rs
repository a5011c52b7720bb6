//! Roles, routes, and the role→route mapping.

use serde::{Deserialize, Serialize};

use crate::store::SessionUser;

/// The three recognized account roles.
///
/// Stored role values stay plain strings; this enum is for required-role
/// checks and route mapping, where an unrecognized string has to degrade
/// rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
            Role::Manager => "manager",
        }
    }

    /// Parse a stored role string. Unknown values are `None`, not an error.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "customer" => Some(Role::Customer),
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every navigable destination in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Login,
    Signup,
    CustomerDashboard,
    CustomerPersonal,
    CustomerEvent,
    CustomerFood,
    AdminDashboard,
    AdminManagers,
    AdminAssignments,
    AdminShifts,
    AdminStaff,
    AdminAnalytics,
    ManagerDashboard,
    ManagerShifts,
    ManagerPersonal,
    ManagerDuties,
    ManagerCustomers,
    ManagerEvents,
}

impl Route {
    /// Canonical path of this destination.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::CustomerDashboard => "/customer",
            Route::CustomerPersonal => "/customer/personal",
            Route::CustomerEvent => "/customer/event",
            Route::CustomerFood => "/customer/food",
            Route::AdminDashboard => "/admin",
            Route::AdminManagers => "/admin/managers",
            Route::AdminAssignments => "/admin/assignments",
            Route::AdminShifts => "/admin/shifts",
            Route::AdminStaff => "/admin/staff",
            Route::AdminAnalytics => "/admin/analytics",
            Route::ManagerDashboard => "/manager",
            Route::ManagerShifts => "/manager/shifts",
            Route::ManagerPersonal => "/manager/personal",
            Route::ManagerDuties => "/manager/duties",
            Route::ManagerCustomers => "/manager/customers",
            Route::ManagerEvents => "/manager/events",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// The canonical dashboard for a stored role string; Login for anything
/// unrecognized.
///
/// This mapping lives here and only here; the gate, the router's default
/// redirect, and the post-auth redirect all call it, so the three cannot
/// drift apart.
pub fn home_route_for(role: &str) -> Route {
    match Role::from_str(role) {
        Some(Role::Customer) => Route::CustomerDashboard,
        Some(Role::Admin) => Route::AdminDashboard,
        Some(Role::Manager) => Route::ManagerDashboard,
        None => Route::Login,
    }
}

/// Where `/` lands: the session's home when authenticated, Login otherwise.
pub fn default_route(session: Option<&SessionUser>) -> Route {
    match session {
        Some(user) => home_route_for(&user.role),
        None => Route::Login,
    }
}

/// Where a successful login or signup lands.
pub fn post_auth_route(user: &SessionUser) -> Route {
    home_route_for(&user.role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_role(role: &str) -> SessionUser {
        SessionUser {
            id: "1".into(),
            email: "x@example.com".into(),
            role: role.into(),
            name: "X".into(),
            phone: None,
            address: None,
            department: None,
            status: None,
        }
    }

    #[test]
    fn test_role_string_round_trip() {
        for role in [Role::Customer, Role::Admin, Role::Manager] {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_str("superuser"), None);
        assert_eq!(Role::from_str("Admin"), None);
    }

    #[test]
    fn test_home_route_per_role() {
        assert_eq!(home_route_for("customer"), Route::CustomerDashboard);
        assert_eq!(home_route_for("admin"), Route::AdminDashboard);
        assert_eq!(home_route_for("manager"), Route::ManagerDashboard);
        assert_eq!(home_route_for("intern"), Route::Login);
    }

    #[test]
    fn test_default_route_follows_session() {
        assert_eq!(default_route(None), Route::Login);
        let user = session_with_role("manager");
        assert_eq!(default_route(Some(&user)), Route::ManagerDashboard);
    }

    #[test]
    fn test_post_auth_route_agrees_with_home_route() {
        for role in ["customer", "admin", "manager", "unknown"] {
            let user = session_with_role(role);
            assert_eq!(post_auth_route(&user), home_route_for(role));
        }
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::AdminAnalytics.path(), "/admin/analytics");
        assert_eq!(Route::ManagerDuties.path(), "/manager/duties");
        assert_eq!(Route::CustomerFood.to_string(), "/customer/food");
    }
}
