use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use views::BookFinder;

mod catalog;
mod components;
mod search;
mod views;
mod utils;

use catalog::OpenLibraryClient;
use utils::SearchConfig;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialize logger: {err}");
    }

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title("Book Finder")
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SearchConfig::default);

    // The HTTP client is built once for the whole session
    let client = use_hook(move || OpenLibraryClient::new(&config));

    match client {
        Err(err) => {
            tracing::error!("failed to create catalog client: {}", err);

            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                div { class: "error-container",
                    div { class: "error-banner",
                        "⚠️ Could not start the catalog client: {err}"
                    }
                }
            }
        }
        Ok(client) => {
            use_context_provider(|| client);

            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                BookFinder {}
            }
        }
    }
}
