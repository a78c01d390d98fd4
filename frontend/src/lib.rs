pub mod components;
pub mod config;
pub mod embed;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
    embed_page::{EmbedPage, SpinWheelEmbedPage},
    home::Home,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/embed")] Embed,
    #[at("/embed/spin-wheel")] EmbedSpinWheel,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Home /> },
        Route::Embed => html! { <EmbedPage /> },
        Route::EmbedSpinWheel => html! { <SpinWheelEmbedPage /> },
    }
}
