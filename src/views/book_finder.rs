use dioxus::prelude::*;

use crate::catalog::OpenLibraryClient;
use crate::components::{list_key, BookCard, Loader, SearchInput};
use crate::search::{DebounceTicket, Debouncer, SearchController, SearchRequest};
use crate::utils::SearchConfig;

const BOOK_FINDER_CSS: Asset = asset!("/assets/styling/book_finder.css");

/// Run a request in the background and fold its outcome into the controller.
/// Requests already in flight are never cancelled.
fn dispatch(
    mut controller: Signal<SearchController>,
    client: OpenLibraryClient,
    request: Option<SearchRequest>,
) {
    let Some(request) = request else {
        return;
    };
    spawn(async move {
        let outcome = request.execute(&client).await;
        controller.write().complete(&request, outcome);
    });
}

/// Cancel the pending debounce task and arm a new one for `ticket`.
fn arm_debounce(
    mut controller: Signal<SearchController>,
    mut debouncer: Signal<Debouncer<Task>>,
    client: OpenLibraryClient,
    ticket: DebounceTicket,
) {
    let task = spawn(async move {
        tokio::time::sleep(ticket.delay).await;
        let request = controller.write().fire(ticket);
        dispatch(controller, client, request);
    });
    debouncer.write().replace(task);
}

#[component]
pub fn BookFinder() -> Element {
    let client = use_context::<OpenLibraryClient>();
    let config = use_context::<SearchConfig>();

    let mut controller = use_signal(move || SearchController::new(config));
    let debouncer = use_signal(Debouncer::<Task>::new);

    let on_change = {
        let client = client.clone();
        move |text: String| {
            if controller.write().set_query(text) {
                let ticket = controller.write().on_query_change();
                arm_debounce(controller, debouncer, client.clone(), ticket);
            }
        }
    };

    let on_submit = move |_: ()| {
        let request = controller.write().search_immediately();
        dispatch(controller, client.clone(), request);
    };

    let ctrl = controller.read();
    let state = ctrl.state();
    let query_blank = ctrl.query().trim().is_empty();
    let show_error = state.has_error() && !state.loading;
    let show_hint = !state.loading && !state.has_error() && state.results.is_empty() && query_blank;
    let show_grid = !state.loading && !state.results.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: BOOK_FINDER_CSS }
        div { class: "finder-container",
            div { class: "finder-header",
                h1 { "📚 Book Finder" }
                p { class: "finder-subtitle",
                    "Search titles from the Open Library. Try “Pride and Prejudice”, “Harry Potter”, etc."
                }
            }

            div { class: "finder-search",
                SearchInput {
                    query: ctrl.query().to_string(),
                    on_change: on_change,
                    on_submit: on_submit,
                }
                p { class: "finder-help",
                    "Auto-search is enabled while typing (debounced). Press Enter or click Search for an immediate request."
                }
            }

            div { class: "finder-results",
                if state.loading {
                    Loader {}
                }
                if show_error {
                    p { class: "finder-error", "{state.error}" }
                }
                if show_hint {
                    p { class: "finder-hint", "Start typing a book title to search the Open Library." }
                }
                if show_grid {
                    div { class: "books-grid",
                        {state.results.iter().map(|record| {
                            let key = list_key(record);
                            rsx! {
                                BookCard { key: "{key}", record: record.clone() }
                            }
                        })}
                    }
                }
            }

            footer { class: "finder-footer", "Data from Open Library · Built with Dioxus" }
        }
    }
}
