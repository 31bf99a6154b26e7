use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            {children}
        }
    )
}

/// Page heading with an optional action area on the right
#[component]
pub fn PageHeader(title: String, subtitle: Option<String>, children: Element) -> Element {
    rsx!(
        div { class: "flex flex-wrap items-center justify-between gap-4 mb-4",
            div {
                h1 { class: "text-2xl font-semibold", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "text-sm opacity-70", "{subtitle}" }
                }
            }
            div { class: "flex gap-2",
                {children}
            }
        }
    )
}
