use dioxus::prelude::*;

use crate::{
    client::{components::auth::AuthNavbar, guard::Protected, router::Route},
    model::user::Role,
};

/// Shell of every screen under `/app`, any logged in role may enter
#[component]
pub fn AuthLayout() -> Element {
    rsx!(
        AuthNavbar {}
        Protected {
            Outlet::<Route> {}
        }
    )
}

/// Shell of the platform administration screens under `/global`
#[component]
pub fn GlobalLayout() -> Element {
    rsx!(
        AuthNavbar {}
        Protected { roles: vec![Role::GlobalAdmin],
            Outlet::<Route> {}
        }
    )
}
