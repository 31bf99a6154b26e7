use dioxus::prelude::*;

use crate::client::router::Route;

pub const APP_VERSION: &str = "v0.1.0-Alpha.1";

#[component]
pub fn ChuflayTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl font-semibold",
                    "Chuflay"
                }
                p { class: "text-xs",
                    "{APP_VERSION}"
                }
            }
        }
    )
}
