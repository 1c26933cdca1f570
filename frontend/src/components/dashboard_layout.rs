use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::components::navbar::ThemeToggle;
use crate::session::use_session;
use crate::Route;

const SIDEBAR_ITEMS: [(IconName, &str, Route); 3] = [
    (IconName::LayoutDashboard, "Dashboard", Route::Dashboard),
    (IconName::FolderKanban, "Projects", Route::DashboardProjects),
    (IconName::Settings, "Settings", Route::DashboardSettings),
];

#[derive(Properties, PartialEq)]
struct SidebarNavProps {
    expanded: bool,
    #[prop_or_default]
    on_navigate: Callback<MouseEvent>,
}

#[function_component(SidebarNav)]
fn sidebar_nav(props: &SidebarNavProps) -> Html {
    let current = use_route::<Route>();

    html! {
        <nav class="sidebar-nav">
            { for SIDEBAR_ITEMS.iter().map(|(icon, label, route)| {
                let active = current.as_ref() == Some(route);
                html! {
                    <div key={*label} onclick={props.on_navigate.clone()}>
                        <Link<Route> to={route.clone()} classes={classes!("sidebar-link", active.then(|| "active"))}>
                            <Icon name={*icon} />
                            if props.expanded {
                                <span>{*label}</span>
                            }
                        </Link<Route>>
                    </div>
                }
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Shell for the signed-in area. Visitors without a session are sent to the
/// login page.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let sidebar_open = use_state(|| true);
    let mobile_open = use_state(|| false);

    let Some(identity) = session.identity().cloned() else {
        info!("No session, redirecting to login");
        return html! { <Redirect<Route> to={Route::Login} /> };
    };

    let sign_out = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Leave the dashboard first so its session guard does not redirect to login.
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
                session.logout().await;
            });
        })
    };

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };
    let open_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(true))
    };
    let close_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(false))
    };
    let avatar = identity.avatar_or_default();

    html! {
        <div class="dashboard">
            <style>
            {r#"
                .dashboard { min-height: 100vh; display: flex; background: var(--background); }
                .sidebar {
                    display: flex;
                    flex-direction: column;
                    background: var(--card);
                    border-right: 1px solid var(--border);
                    width: 256px;
                    transition: width 0.2s ease;
                }
                .sidebar.collapsed { width: 80px; }
                .sidebar-header { height: 4rem; display: flex; align-items: center; padding: 0 1rem; border-bottom: 1px solid var(--border); font-weight: 700; }
                .sidebar-nav { flex: 1; padding: 0.75rem; display: flex; flex-direction: column; gap: 0.25rem; }
                .sidebar-link {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.625rem 0.75rem;
                    border-radius: 8px;
                    color: var(--muted-foreground);
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .sidebar-link:hover { background: var(--muted); color: var(--foreground); }
                .sidebar-link.active { background: var(--primary); color: var(--primary-foreground); }
                .sidebar-section { padding: 0.75rem; border-top: 1px solid var(--border); }
                .sidebar-user { display: flex; align-items: center; gap: 0.75rem; padding: 0.5rem 0.75rem; margin-bottom: 0.5rem; min-width: 0; }
                .sidebar-user p { margin: 0; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
                .avatar { width: 2rem; height: 2rem; border-radius: 999px; border: 1px solid var(--border); }
                .sign-out { width: 100%; justify-content: flex-start; color: var(--muted-foreground); }
                .sign-out:hover { color: #ef4444; }
                .chevron { transition: transform 0.2s ease; }
                .chevron.flipped { transform: rotate(180deg); }
                .dashboard-body { flex: 1; display: flex; flex-direction: column; min-width: 0; }
                .dashboard-topbar {
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 1.5rem;
                    border-bottom: 1px solid var(--border);
                    background: var(--card);
                }
                .dashboard-topbar .topbar-right { margin-left: auto; display: flex; align-items: center; gap: 0.75rem; }
                .dashboard-main { flex: 1; padding: 1.5rem; overflow: auto; animation: page-in 0.3s ease-out; }
                .mobile-sidebar {
                    position: fixed;
                    inset: 0 auto 0 0;
                    width: 18rem;
                    z-index: 50;
                    background: var(--card);
                    border-right: 1px solid var(--border);
                    display: flex;
                    flex-direction: column;
                }
                .mobile-only { display: none; }
                @media (max-width: 1024px) {
                    .sidebar { display: none; }
                    .mobile-only { display: inline-flex; }
                }
            "#}
            </style>

            <aside class={classes!("sidebar", (!*sidebar_open).then(|| "collapsed"))}>
                <div class="sidebar-header">
                    <Link<Route> to={Route::Dashboard} classes="text-gradient">
                        { if *sidebar_open { "Cortex Digital" } else { "CD" } }
                    </Link<Route>>
                </div>
                <SidebarNav expanded={*sidebar_open} />
                <div class="sidebar-section">
                    if *sidebar_open {
                        <div class="sidebar-user">
                            <img class="avatar" src={avatar.clone()} alt={identity.name.clone()} />
                            <div>
                                <p>{&identity.name}</p>
                                <p class="muted">{&identity.email}</p>
                            </div>
                        </div>
                    }
                    <button class="btn btn-ghost sign-out" onclick={sign_out.clone()}>
                        <Icon name={IconName::LogOut} />
                        if *sidebar_open { {"Sign Out"} }
                    </button>
                </div>
                <div class="sidebar-section">
                    <button class="btn btn-ghost btn-block" onclick={toggle_sidebar} aria-label="Toggle sidebar">
                        <Icon name={IconName::ChevronRight} class={classes!("chevron", sidebar_open.then(|| "flipped"))} />
                    </button>
                </div>
            </aside>

            if *mobile_open {
                <div class="mobile-overlay" onclick={close_mobile.clone()}></div>
                <aside class="mobile-sidebar">
                    <div class="sidebar-header">
                        <Link<Route> to={Route::Dashboard} classes="text-gradient">{"Cortex Digital"}</Link<Route>>
                        <button class="btn btn-ghost btn-icon" style="margin-left: auto;" onclick={close_mobile.clone()}>
                            <Icon name={IconName::X} />
                        </button>
                    </div>
                    <SidebarNav expanded={true} on_navigate={close_mobile} />
                    <div class="sidebar-section">
                        <button class="btn btn-ghost sign-out" onclick={sign_out}>
                            <Icon name={IconName::LogOut} />{"Sign Out"}
                        </button>
                    </div>
                </aside>
            }

            <div class="dashboard-body">
                <header class="dashboard-topbar">
                    <button class="btn btn-ghost btn-icon mobile-only" onclick={open_mobile} aria-label="Open menu">
                        <Icon name={IconName::Menu} />
                    </button>
                    <div class="topbar-right">
                        <ThemeToggle />
                        <img class="avatar" src={avatar} alt={identity.name.clone()} />
                    </div>
                </header>
                <main class="dashboard-main">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}
