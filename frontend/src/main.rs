mod console_logger;
mod env_variable_utils;
mod errors;
mod gallery;
mod models;
mod router;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, API_BASE_URL};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_logger::init(is_debug_mode());

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        *API_BASE_URL,
        is_debug_mode()
    );

    yew::Renderer::<App>::new().render();
}
