mod components;
mod config;
mod pages;
mod services;
mod state;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::pages::home::Home;

#[function_component(App)]
fn app() -> Html {
    let config = AppConfig::from_env();

    html! {
        <div id="app">
            <Home config={config} />
        </div>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
