use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::icon::{Icon, IconName};

const SHOW_AFTER_PX: f64 = 300.0;

pub fn is_shown(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

fn scroll_to_top() {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scroll-to-top button that pops in once the page has been scrolled.
#[function_component(FloatingActionButton)]
pub fn floating_action_button() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <style>
            {r#"
                .fab {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 50;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 999px;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.25);
                    cursor: pointer;
                    animation: fab-pop 0.35s cubic-bezier(0.34, 1.56, 0.64, 1);
                    transition: transform 0.2s ease;
                }
                .fab:hover { transform: scale(1.1); }
                @keyframes fab-pop {
                    from { opacity: 0; transform: scale(0) translateY(20px); }
                    to { opacity: 1; transform: scale(1) translateY(0); }
                }
            "#}
            </style>
            if is_shown(scroll_y) {
                <button class="fab" {onclick} aria-label="Scroll to top">
                    <Icon name={IconName::ArrowUp} size={24} />
                </button>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_only_after_scrolling_down() {
        assert!(!is_shown(0.0));
        assert!(!is_shown(SHOW_AFTER_PX));
        assert!(is_shown(SHOW_AFTER_PX + 1.0));
    }
}
