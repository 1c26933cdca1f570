use log::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub fn not_found_message(path: &str) -> String {
    format!("404 Error: User attempted to access non-existent route: {}", path)
}

/// Remembers the last missing path that was reported so re-renders of the
/// same navigation stay quiet.
#[derive(Debug, Default)]
pub struct NotFoundLog {
    last: Option<String>,
}

impl NotFoundLog {
    /// Returns the message to log when `path` differs from the last one seen.
    pub fn record(&mut self, path: &str) -> Option<String> {
        if self.last.as_deref() == Some(path) {
            return None;
        }
        self.last = Some(path.to_string());
        Some(not_found_message(path))
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    let log = use_mut_ref(NotFoundLog::default);

    use_effect_with_deps(
        move |path| {
            if let Some(message) = log.borrow_mut().record(path) {
                error!("{}", message);
            }
            || ()
        },
        path,
    );

    html! {
        <div class="not-found">
            <style>
            {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--muted);
                    text-align: center;
                    animation: page-in 0.4s ease-out;
                }
                .not-found h1 { font-size: 2.25rem; font-weight: 700; margin: 0 0 1rem; }
                .not-found p { font-size: 1.25rem; color: var(--muted-foreground); margin: 0 0 1rem; }
                .not-found a { color: var(--primary); text-decoration: underline; }
            "#}
            </style>
            <div>
                <h1>{"404"}</h1>
                <p>{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Home}>{"Return to Home"}</Link<Route>>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_path() {
        assert_eq!(
            not_found_message("/nope"),
            "404 Error: User attempted to access non-existent route: /nope"
        );
    }

    #[test]
    fn same_path_is_reported_once() {
        let mut log = NotFoundLog::default();
        assert_eq!(log.record("/nope"), Some(not_found_message("/nope")));
        assert_eq!(log.record("/nope"), None);
        assert_eq!(log.record("/nope"), None);
    }

    #[test]
    fn each_new_path_is_reported() {
        let mut log = NotFoundLog::default();
        assert!(log.record("/nope").is_some());
        assert_eq!(log.record("/gone"), Some(not_found_message("/gone")));
    }

    #[test]
    fn returning_to_an_earlier_path_reports_again() {
        let mut log = NotFoundLog::default();
        assert!(log.record("/nope").is_some());
        assert!(log.record("/gone").is_some());
        assert_eq!(log.record("/nope"), Some(not_found_message("/nope")));
    }
}
