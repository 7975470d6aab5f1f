mod components;
mod config;
mod pages;
mod services;
mod store;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div id="app">
            <components::header::Header />
            <pages::home::Home />
        </div>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
