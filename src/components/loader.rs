use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader", role: "status",
            div { class: "spinner" }
            span { class: "loader-text", "Searching..." }
        }
    }
}
