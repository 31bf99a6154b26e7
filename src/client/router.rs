use dioxus::prelude::*;

use crate::client::{
    components::{
        auth::{AuthLayout, GlobalLayout},
        Navbar,
    },
    routes::{
        auth::{Activities, Dashboard, Enrollments, Marketplace, Notifications, Payments, Students},
        global::{GlobalDashboard, Schools, Users},
        Home, Login, NotFound, Register,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/registro")]
    Register {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },

    #[end_layout]

    #[nest("/app")]

        #[layout(AuthLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/estudiantes")]
        Students {},

        #[route("/actividades")]
        Activities {},

        #[route("/inscripciones")]
        Enrollments {},

        #[route("/pagos")]
        Payments {},

        #[route("/notificaciones")]
        Notifications {},

        #[route("/marketplace")]
        Marketplace {},

        #[end_layout]

    #[end_nest]

    #[nest("/global")]

        #[layout(GlobalLayout)]

        #[route("/")]
        GlobalDashboard {},

        #[route("/colegios")]
        Schools {},

        #[route("/usuarios")]
        Users {},
}
