use crate::gallery::debounce::{BrowserScheduler, Debouncer, SEARCH_DEBOUNCE_MS};
use crate::models::{PageSlot, PaginationInfo, Video};
use crate::utils::{
    channel_url, format_duration, format_published_time, format_view_count, video_url,
};
use chrono::{DateTime, Utc};
use web_sys::{HtmlImageElement, HtmlInputElement};
use yew::prelude::*;

const SKELETON_COUNT: usize = 8;

const PLACEHOLDER_THUMBNAIL: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='320' height='180'%3E%3Crect width='100%25' height='100%25' fill='%23d1d5db'/%3E%3C/svg%3E";

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub on_search: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub now: DateTime<Utc>,
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub videos: Vec<Video>,
    #[prop_or_default]
    pub dimmed: bool,
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: String,
    pub on_retry: Callback<MouseEvent>,
}

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: PaginationInfo,
    pub disabled: bool,
    pub on_page_change: Callback<u32>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(|| props.query.clone());
    let debouncer = use_mut_ref(|| Debouncer::new(BrowserScheduler, SEARCH_DEBOUNCE_MS));

    // Live search: commit the input once typing pauses.
    let on_input = {
        let current_input = current_input.clone();
        let debouncer = debouncer.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value.clone());

            let on_search = on_search.clone();
            debouncer
                .borrow_mut()
                .call(move || on_search.emit(input_value));
        })
    };

    // Enter or the button commits right away.
    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        let debouncer = debouncer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            debouncer.borrow_mut().cancel();
            on_search.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex w-full max-w-xl">
            <input
                type="text"
                class="flex-grow px-4 py-2 border border-gray-300 rounded-l-full focus:outline-none focus:ring-2 focus:ring-red-500"
                placeholder="Search videos..."
                value={(*current_input).clone()}
                oninput={on_input}
            />
            <button
                type="submit"
                class="px-6 py-2 bg-red-600 text-white rounded-r-full hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500"
            >
                {"Search"}
            </button>
        </form>
    }
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let watch_url = video_url(&video.id);

    let on_thumbnail_error = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
            if img.src() != PLACEHOLDER_THUMBNAIL {
                img.set_src(PLACEHOLDER_THUMBNAIL);
            }
        }
    });

    let thumbnail = video
        .thumbnail
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());

    html! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden transition-transform duration-300 hover:shadow-xl hover:-translate-y-1">
            <a href={watch_url.clone()} target="_blank" class="block">
                <div class="relative">
                    <img
                        src={thumbnail}
                        alt={video.title.clone()}
                        class="w-full h-48 object-cover"
                        onerror={on_thumbnail_error}
                    />
                    <div class="absolute bottom-2 right-2 bg-black bg-opacity-70 text-white text-xs px-2 py-1 rounded">
                        { format_duration(video.duration.as_deref()) }
                    </div>
                </div>
            </a>
            <div class="p-4">
                <a href={watch_url} target="_blank" class="block">
                    <h3 class="font-semibold text-gray-800 mb-2 line-clamp-2 hover:text-red-600">
                        { &video.title }
                    </h3>
                </a>
                <a href={channel_url(&video.channel_id)} target="_blank" class="text-sm text-gray-600 hover:text-red-600">
                    { &video.channel_title }
                </a>
                <div class="flex items-center mt-2 text-xs text-gray-500">
                    <span class="mr-3">{ format!("{} views", format_view_count(video.view_count)) }</span>
                    {
                        if video.like_count.is_some() {
                            html! {
                                <span class="mr-3">{ format!("{} likes", format_view_count(video.like_count)) }</span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <span>{ format_published_time(video.published_at.as_deref(), props.now) }</span>
                </div>
            </div>
        </div>
    }
}

fn card_key(index: usize, video_id: &str) -> String {
    format!("{index}-{video_id}")
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    if props.videos.is_empty() {
        return html! { <NoResults /> };
    }

    let now = Utc::now();
    let classes = classes!(
        "grid",
        "grid-cols-1",
        "sm:grid-cols-2",
        "lg:grid-cols-3",
        "xl:grid-cols-4",
        "gap-6",
        props.dimmed.then_some("opacity-50")
    );

    // Ids can repeat within a page, so the position is part of the key.
    html! {
        <div class={classes}>
            { for props.videos.iter().enumerate().map(|(index, video)| html! {
                <VideoCard key={card_key(index, &video.id)} video={video.clone()} now={now} />
            })}
        </div>
    }
}

#[function_component(LoadingSkeletons)]
pub fn loading_skeletons() -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            { for (0..SKELETON_COUNT).map(|_| html! {
                <div class="bg-white rounded-lg shadow-md overflow-hidden">
                    <div class="skeleton animate-pulse bg-gray-300 h-48 w-full"></div>
                    <div class="p-4">
                        <div class="skeleton animate-pulse bg-gray-300 h-4 w-3/4 mb-3 rounded"></div>
                        <div class="skeleton animate-pulse bg-gray-300 h-4 w-1/2 rounded"></div>
                    </div>
                </div>
            })}
        </div>
    }
}

#[function_component(NoResults)]
pub fn no_results() -> Html {
    html! {
        <div class="text-center py-10">
            <h2 class="text-2xl font-semibold text-gray-700">{"No videos found"}</h2>
            <p class="text-gray-500 mt-2">{"Try a different search term"}</p>
        </div>
    }
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let message = if props.message.is_empty() {
        "Please try again later".to_string()
    } else {
        props.message.clone()
    };

    html! {
        <div class="text-center py-10">
            <div class="text-red-500 text-5xl mb-4">{"⚠"}</div>
            <h2 class="text-2xl font-semibold text-gray-700">{"Failed to load videos"}</h2>
            <p class="text-gray-500 mt-2">{ message }</p>
            <button
                onclick={props.on_retry.clone()}
                class="mt-4 px-6 py-2 bg-red-600 text-white rounded-full hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500 focus:ring-opacity-50"
            >
                {"Retry"}
            </button>
        </div>
    }
}

fn nav_button_class(enabled: bool) -> &'static str {
    if enabled {
        "px-4 py-2 mx-1 rounded bg-white text-gray-700 hover:bg-gray-100"
    } else {
        "px-4 py-2 mx-1 rounded bg-gray-200 text-gray-400 cursor-not-allowed"
    }
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let current = props.pagination.current();
    let previous = props.pagination.previous_target();
    let next = props.pagination.next_target();

    let go_to = |page: Option<u32>| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(page) = page {
                on_page_change.emit(page);
            }
        })
    };

    html! {
        <div class="flex flex-wrap justify-center items-center mt-8">
            <button
                class={nav_button_class(previous.is_some())}
                disabled={previous.is_none() || props.disabled}
                onclick={go_to(previous)}
            >
                {"‹ Previous"}
            </button>
            { for props.pagination.page_range().into_iter().map(|slot| match slot {
                PageSlot::Ellipsis => html! {
                    <span class="px-4 py-2 mx-1 text-gray-700">{"..."}</span>
                },
                PageSlot::Page(page) if page == current => html! {
                    <button class="px-4 py-2 mx-1 rounded bg-red-600 text-white" aria-current="page">
                        { page }
                    </button>
                },
                PageSlot::Page(page) => html! {
                    <button
                        class="px-4 py-2 mx-1 rounded bg-white text-gray-700 hover:bg-gray-100"
                        disabled={props.disabled}
                        onclick={go_to(Some(page))}
                    >
                        { page }
                    </button>
                },
            })}
            <button
                class={nav_button_class(next.is_some())}
                disabled={next.is_none() || props.disabled}
                onclick={go_to(next)}
            >
                {"Next ›"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_card_keys_are_unique_for_repeated_ids() {
        let ids = ["a", "b", "a", "a"];
        let keys: HashSet<String> = ids
            .iter()
            .enumerate()
            .map(|(index, id)| card_key(index, id))
            .collect();
        assert_eq!(keys.len(), ids.len());
    }
}
