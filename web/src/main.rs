use dioxus::prelude::*;

use ui::views::{Home, Share};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/share")]
    Share {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Navbar layout wrapping every route.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        nav { class: "navbar",
            span { class: "navbar__brand", "Stridelog" }
            div { class: "navbar__links",
                Link { class: "navbar__link", to: Route::Home {}, "Home" }
                Link { class: "navbar__link", to: Route::Share {}, "Share" }
            }
        }
        Outlet::<Route> {}
    }
}
