use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    query: String,
    on_change: EventHandler<String>,
    on_submit: EventHandler<()>,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-container",
            input {
                class: "search-input",
                r#type: "text",
                aria_label: "Search books by title",
                placeholder: "Enter book title (e.g. 'Harry Potter')...",
                value: "{props.query}",
                oninput: move |evt| props.on_change.call(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        props.on_submit.call(());
                    }
                }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| props.on_submit.call(()),
                "Search"
            }
        }
    }
}
