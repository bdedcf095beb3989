use crate::env_variable_utils::get_app_name;
use crate::gallery::api::load_page;
use crate::gallery::components::{
    ErrorPanel, LoadingSkeletons, PaginationBar, SearchBar, VideoGrid,
};
use crate::gallery::state::{GalleryAction, GalleryState, LoadStatus};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <GalleryApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-100">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-red-600 hover:underline">
                        {"Go back to the gallery"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

/// Parses the `page` query parameter. Missing or invalid values mean page 1.
pub fn parse_page_param(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

fn current_url() -> Option<web_sys::Url> {
    let href = web_sys::window()?.location().href().ok()?;
    web_sys::Url::new(&href).ok()
}

fn get_page_param() -> u32 {
    let raw = current_url().and_then(|url| url.search_params().get("page"));
    parse_page_param(raw.as_deref())
}

fn get_query_param() -> Option<String> {
    current_url().and_then(|url| url.search_params().get("q"))
}

/// Query string carrying the gallery's page and committed search.
pub fn search_string(page: u32, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        format!("?page={}", page)
    } else {
        format!("?page={}&q={}", page, urlencoding::encode(query))
    }
}

// Mirrors page and query into the address bar, replacing the current history
// entry.
fn update_url_params(page: u32, query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let search = search_string(page, query);
    if window.location().search().ok().as_deref() == Some(search.as_str()) {
        return;
    }

    if let Ok(history) = window.history() {
        if let Err(e) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&search))
        {
            log::warn!("Failed to update URL: {:?}", e);
        }
    }
}

#[function_component(GalleryApp)]
pub fn gallery_app() -> Html {
    let app_name = use_state(get_app_name);
    let gallery = use_reducer(|| {
        GalleryState::new(get_page_param(), get_query_param().unwrap_or_default())
    });
    let request_counter = use_mut_ref(|| 0u64);

    // Every call gets a fresh request id; only the newest result is kept.
    let load = {
        let dispatcher = gallery.dispatcher();
        let request_counter = request_counter.clone();
        Callback::from(move |page: u32| {
            let request = {
                let mut counter = request_counter.borrow_mut();
                *counter += 1;
                *counter
            };
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load_page(page, request, dispatcher).await;
            });
        })
    };

    // Initial load
    {
        let load = load.clone();
        let page = gallery.page;
        use_effect_with((), move |_| {
            load.emit(page);
            || ()
        });
    }

    {
        let page = gallery.page;
        let query = gallery.query.clone();
        use_effect_with((page, query), move |(page, query)| {
            update_url_params(*page, query);
            || ()
        });
    }

    let on_search = {
        let dispatcher = gallery.dispatcher();
        Callback::from(move |query: String| {
            dispatcher.dispatch(GalleryAction::QueryChanged(query));
        })
    };

    let on_page_change = {
        let load = load.clone();
        Callback::from(move |page: u32| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            load.emit(page);
        })
    };

    let on_retry = {
        let load = load.clone();
        let page = gallery.page;
        Callback::from(move |_: MouseEvent| load.emit(page))
    };

    let visible_videos = gallery.visible_videos();

    let content = if let Some(message) = gallery.error() {
        // Previously loaded videos stay visible below the error.
        html! {
            <>
                <ErrorPanel message={message.to_string()} on_retry={on_retry} />
                {
                    if gallery.videos.is_empty() {
                        html! {}
                    } else {
                        html! { <VideoGrid videos={visible_videos} /> }
                    }
                }
            </>
        }
    } else if gallery.videos.is_empty() && gallery.status != LoadStatus::Ready {
        html! { <LoadingSkeletons /> }
    } else {
        html! { <VideoGrid videos={visible_videos} dimmed={gallery.is_loading()} /> }
    };

    html! {
        <div class="min-h-screen bg-gray-100">
            <header class="bg-white shadow-sm">
                <div class="max-w-7xl mx-auto px-4 py-4 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <h1 class="text-2xl font-bold text-red-600">{ (*app_name).clone() }</h1>
                    <SearchBar query={gallery.query.clone()} on_search={on_search} />
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 py-8">
                { content }

                {
                    if let Some(pagination) = gallery.pagination {
                        html! {
                            <>
                                <PaginationBar
                                    pagination={pagination}
                                    disabled={gallery.is_loading()}
                                    on_page_change={on_page_change}
                                />
                                {
                                    if let Some(total) = pagination.total_items {
                                        html! {
                                            <p class="text-center text-sm text-gray-500 mt-4">
                                                { format!("{} videos in total", total) }
                                            </p>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </main>
        </div>
    }
}
