use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod reveal;
mod session;
mod storage;
mod theme;
mod components {
    pub mod auth_shell;
    pub mod dashboard_layout;
    pub mod floating_action_button;
    pub mod footer;
    pub mod global_style;
    pub mod icon;
    pub mod layout;
    pub mod navbar;
    pub mod page_hero;
}
mod sections {
    pub mod cta;
    pub mod faq;
    pub mod features;
    pub mod hero;
    pub mod pricing;
    pub mod projects;
    pub mod testimonials;
}
mod pages {
    pub mod contact;
    pub mod dashboard;
    pub mod dashboard_projects;
    pub mod dashboard_settings;
    pub mod faq;
    pub mod features;
    pub mod home;
    pub mod login;
    pub mod not_found;
    pub mod pricing;
    pub mod projects;
    pub mod register;
    pub mod testimonials;
}

use components::global_style::GlobalStyle;
use pages::{
    contact::Contact,
    dashboard::Dashboard,
    dashboard_projects::DashboardProjects,
    dashboard_settings::DashboardSettings,
    faq::Faq,
    features::Features,
    home::Home,
    login::Login,
    not_found::NotFound,
    pricing::Pricing,
    projects::Projects,
    register::Register,
    testimonials::Testimonials,
};
use session::SessionProvider;
use theme::ThemeProvider;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/features")]
    Features,
    #[at("/pricing")]
    Pricing,
    #[at("/testimonials")]
    Testimonials,
    #[at("/projects")]
    Projects,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/projects")]
    DashboardProjects,
    #[at("/dashboard/settings")]
    DashboardSettings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Maps a content href onto a route. External links, fragments and unknown
/// paths stay plain anchors.
pub fn internal_route(href: &str) -> Option<Route> {
    if !href.starts_with('/') || href.starts_with("//") {
        return None;
    }
    let path = href.split(['?', '#']).next().unwrap_or(href);
    match Route::recognize(path)? {
        Route::NotFound => None,
        route => Some(route),
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Features => {
            info!("Rendering Features page");
            html! { <Features /> }
        }
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        }
        Route::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <Testimonials /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Register => {
            info!("Rendering Register page");
            html! { <Register /> }
        }
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <Dashboard /> }
        }
        Route::DashboardProjects => {
            info!("Rendering Dashboard Projects page");
            html! { <DashboardProjects /> }
        }
        Route::DashboardSettings => {
            info!("Rendering Dashboard Settings page");
            html! { <DashboardSettings /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <SessionProvider>
                <BrowserRouter>
                    <GlobalStyle />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </SessionProvider>
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_path() {
        let table = [
            ("/", Route::Home),
            ("/features", Route::Features),
            ("/pricing", Route::Pricing),
            ("/testimonials", Route::Testimonials),
            ("/projects", Route::Projects),
            ("/faq", Route::Faq),
            ("/contact", Route::Contact),
            ("/login", Route::Login),
            ("/register", Route::Register),
            ("/dashboard", Route::Dashboard),
            ("/dashboard/projects", Route::DashboardProjects),
            ("/dashboard/settings", Route::DashboardSettings),
        ];
        for (path, route) in table {
            assert_eq!(Route::recognize(path), Some(route.clone()), "{}", path);
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        for path in ["/nope", "/dashboard/billing", "/features/extra"] {
            assert_eq!(Route::recognize(path), Some(Route::NotFound), "{}", path);
        }
    }

    #[test]
    fn internal_route_keeps_known_paths_only() {
        assert_eq!(internal_route("/pricing"), Some(Route::Pricing));
        assert_eq!(internal_route("/faq#billing"), Some(Route::Faq));
        assert_eq!(internal_route("https://twitter.com/cortex"), None);
        assert_eq!(internal_route("//cdn.example.com/x"), None);
        assert_eq!(internal_route("#features"), None);
        assert_eq!(internal_route("/missing"), None);
    }
}
