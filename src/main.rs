use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod content;
mod showcase {
    pub mod controller;
    pub mod language;
    pub mod listener;
    pub mod media;
    pub mod player;
    pub mod schedule;
    pub mod state;
    pub mod swap;
    pub mod visibility;
    pub mod volume;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod contact_form;
    pub mod earnings_calculator;
    pub mod faq_accordion;
    pub mod floating_orbs;
    pub mod glass_card;
    pub mod language_slider;
    pub mod price_calculator;
    pub mod scroll_spy;
    pub mod tech_marquee;
    pub mod theme_switch;
}
mod pages {
    pub mod landing;
    pub mod privacy;
}

use pages::{landing::Landing, privacy::PrivacyPolicy};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Unknown route, falling back to Landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {} landing", config::AGENCY_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/privacy"), Some(Route::Privacy));
        assert_eq!(Route::recognize("/does-not-exist"), Some(Route::NotFound));
    }
}
