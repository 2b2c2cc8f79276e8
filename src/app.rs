use dioxus::prelude::*;

use crate::context::get_page_config;
use crate::pages::Landing;
use crate::runtime::use_page_handle;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The intro page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, the theme variables, page context and routing.
#[component]
pub fn App() -> Element {
    let page = use_page_handle(get_page_config);
    use_context_provider(|| page);

    // The only writer of the theme variables
    let theme_css = page.theme.read().to_root_css();

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {theme_css} }
        Router::<Route> {}
    }
}
