use crate::{client::router::Route, model::user::Role};

/// One entry of the authenticated navigation bar
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

impl NavItem {
    fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }
}

/// Menu entries shown to `role`, in display order
pub fn navigation(role: Role) -> Vec<NavItem> {
    match role {
        Role::GlobalAdmin => vec![
            NavItem::new("Estadísticas", Route::GlobalDashboard {}),
            NavItem::new("Colegios", Route::Schools {}),
            NavItem::new("Usuarios", Route::Users {}),
        ],
        Role::SchoolAdmin => vec![
            NavItem::new("Panel", Route::Dashboard {}),
            NavItem::new("Estudiantes", Route::Students {}),
            NavItem::new("Actividades", Route::Activities {}),
            NavItem::new("Inscripciones", Route::Enrollments {}),
            NavItem::new("Pagos", Route::Payments {}),
            NavItem::new("Notificaciones", Route::Notifications {}),
            NavItem::new("Marketplace", Route::Marketplace {}),
        ],
        Role::Parent => vec![
            NavItem::new("Panel", Route::Dashboard {}),
            NavItem::new("Mis hijos", Route::Students {}),
            NavItem::new("Actividades", Route::Activities {}),
            NavItem::new("Inscripciones", Route::Enrollments {}),
            NavItem::new("Pagos", Route::Payments {}),
            NavItem::new("Notificaciones", Route::Notifications {}),
            NavItem::new("Marketplace", Route::Marketplace {}),
        ],
        Role::Vendor => vec![
            NavItem::new("Panel", Route::Dashboard {}),
            NavItem::new("Marketplace", Route::Marketplace {}),
            NavItem::new("Notificaciones", Route::Notifications {}),
        ],
        Role::Student | Role::Teacher => vec![
            NavItem::new("Panel", Route::Dashboard {}),
            NavItem::new("Notificaciones", Route::Notifications {}),
        ],
    }
}

/// Where a freshly logged in `role` lands
pub fn home_route(role: Role) -> Route {
    match role {
        Role::GlobalAdmin => Route::GlobalDashboard {},
        _ => Route::Dashboard {},
    }
}

#[cfg(test)]
mod tests {
    use super::{home_route, navigation};
    use crate::{client::router::Route, model::user::Role};

    #[test]
    /// Expect every role to get a non-empty menu that starts at its home screen
    fn test_navigation_starts_at_home() {
        for role in Role::ALL {
            let items = navigation(role);

            assert!(!items.is_empty());
            assert_eq!(items[0].route, home_route(role));
        }
    }

    #[test]
    /// Expect global screens only in the global administrator's menu
    fn test_navigation_global_entries() {
        let has_schools = |role| {
            navigation(role)
                .iter()
                .any(|item| item.route == Route::Schools {})
        };

        assert!(has_schools(Role::GlobalAdmin));
        assert!(!has_schools(Role::SchoolAdmin));
        assert!(!has_schools(Role::Parent));
    }

    #[test]
    /// Expect parents to see their children under the students screen
    fn test_navigation_parent_labels() {
        let items = navigation(Role::Parent);

        assert!(items
            .iter()
            .any(|item| item.label == "Mis hijos" && item.route == Route::Students {}));
    }

    #[test]
    /// Expect vendors to reach the marketplace but not student records
    fn test_navigation_vendor_entries() {
        let items = navigation(Role::Vendor);

        assert!(items.iter().any(|item| item.route == Route::Marketplace {}));
        assert!(!items.iter().any(|item| item.route == Route::Students {}));
    }
}
