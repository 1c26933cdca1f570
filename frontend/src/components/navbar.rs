use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::content::hooks::use_content;
use crate::content::model::{NavItem, SiteConfig};
use crate::session::use_session;
use crate::theme::{use_theme, Theme};
use crate::{internal_route, Route};

/// Past this many pixels the bar gets its frosted background.
const SCROLLED_AFTER_PX: f64 = 20.0;

#[derive(Properties, PartialEq)]
pub struct HrefLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Routes internal hrefs through the router and leaves anything else as a
/// plain anchor.
#[function_component(HrefLink)]
pub fn href_link(props: &HrefLinkProps) -> Html {
    match internal_route(&props.href) {
        Some(route) => html! {
            <Link<Route> to={route} classes={props.class.clone()}>{ for props.children.iter() }</Link<Route>>
        },
        None => html! {
            <a href={props.href.clone()} class={props.class.clone()}>{ for props.children.iter() }</a>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub item: NavItem,
    pub active: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let class = classes!("nav-link", props.class.clone(), props.active.then(|| "active"));
    html! {
        <HrefLink href={props.item.href.clone()} {class}>{&props.item.label}</HrefLink>
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();
    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.toggle())
    };
    let icon = match theme.theme() {
        Theme::Dark => IconName::Sun,
        Theme::Light => IconName::Moon,
    };

    html! {
        <button class="btn btn-ghost btn-icon theme-toggle" {onclick} aria-label="Toggle theme">
            <Icon name={icon} />
        </button>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav_items = use_content::<Vec<NavItem>>();
    let site = use_content::<SiteConfig>();
    let session = use_session();
    let current = use_route::<Route>();
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            current.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let is_active = |item: &NavItem| {
        let route = internal_route(&item.href);
        route.is_some() && route == current
    };

    let actions = if session.is_authenticated() {
        html! {
            <Link<Route> to={Route::Dashboard} classes="btn btn-hero">{"Dashboard"}</Link<Route>>
        }
    } else {
        html! {
            <>
                <Link<Route> to={Route::Login} classes="btn btn-ghost">{"Sign In"}</Link<Route>>
                <Link<Route> to={Route::Register} classes="btn btn-hero">{"Get Started"}</Link<Route>>
            </>
        }
    };

    html! {
        <>
            <style>
            {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    transition: all 0.3s ease;
                    animation: nav-drop 0.5s ease-out;
                }
                @keyframes nav-drop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    background: color-mix(in srgb, var(--background) 80%, transparent);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                }
                .nav-content { display: flex; align-items: center; justify-content: space-between; }
                .nav-logo { font-weight: 700; font-size: 1.25rem; }
                .nav-links { display: flex; gap: 0.25rem; }
                .nav-link {
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: var(--muted-foreground);
                    transition: color 0.2s ease, background 0.2s ease;
                }
                .nav-link:hover { color: var(--primary); }
                .nav-link.active { color: var(--primary); background: rgba(59, 130, 246, 0.1); }
                .nav-actions { display: flex; align-items: center; gap: 0.75rem; }
                .burger-menu { display: none; }
                .mobile-menu {
                    position: fixed;
                    inset: 0 0 0 auto;
                    width: 100%;
                    max-width: 24rem;
                    z-index: 60;
                    background: var(--background);
                    border-left: 1px solid var(--border);
                    padding: 5rem 1.5rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                }
                .mobile-menu.open { transform: translateX(0); }
                .mobile-menu .nav-link { font-size: 1.1rem; padding: 0.75rem 1rem; }
                .mobile-menu-actions { margin-top: auto; display: flex; flex-direction: column; gap: 0.75rem; }
                .mobile-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 55;
                    background: color-mix(in srgb, var(--background) 80%, transparent);
                    backdrop-filter: blur(4px);
                }
                @media (max-width: 1024px) {
                    .nav-links, .nav-actions .desktop-only { display: none; }
                    .burger-menu { display: inline-flex; }
                }
            "#}
            </style>
            <nav class={classes!("top-nav", (scroll_y > SCROLLED_AFTER_PX).then(|| "scrolled"))}>
                <div class="container nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="text-gradient">{&site.name}</span>
                    </Link<Route>>

                    <div class="nav-links">
                        { for nav_items.iter().map(|item| html! {
                            <NavLink key={item.id.clone()} item={item.clone()} active={is_active(item)} />
                        }) }
                    </div>

                    <div class="nav-actions">
                        <ThemeToggle />
                        <div class="desktop-only nav-actions">{actions.clone()}</div>
                        <button class="btn btn-ghost btn-icon burger-menu" onclick={toggle_menu} aria-label="Menu">
                            <Icon name={if *menu_open { IconName::X } else { IconName::Menu }} />
                        </button>
                    </div>
                </div>
            </nav>

            if *menu_open {
                <div class="mobile-overlay" onclick={close_menu.clone()}></div>
            }
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for nav_items.iter().map(|item| html! {
                    <div key={item.id.clone()} onclick={close_menu.clone()}>
                        <NavLink item={item.clone()} active={is_active(item)} />
                    </div>
                }) }
                <div class="mobile-menu-actions" onclick={close_menu}>{actions}</div>
            </div>
        </>
    }
}
