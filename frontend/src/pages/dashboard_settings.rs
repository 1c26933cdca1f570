use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::icon::{Icon, IconName};
use crate::pages::dashboard::enter_style;
use crate::session::use_session;
use crate::theme::{use_theme, Theme};

/// (title, description, on by default)
const NOTIFICATION_SETTINGS: [(&str, &str, bool); 3] = [
    ("Email Notifications", "Receive email updates", true),
    ("Push Notifications", "Receive push notifications", true),
    ("Marketing Emails", "Receive marketing updates", false),
];

#[derive(Properties, PartialEq)]
struct SwitchProps {
    title: AttrValue,
    description: AttrValue,
    initially_on: bool,
}

#[function_component(SettingSwitch)]
fn setting_switch(props: &SwitchProps) -> Html {
    let on = use_state(|| props.initially_on);
    let onclick = {
        let on = on.clone();
        Callback::from(move |_: MouseEvent| on.set(!*on))
    };

    html! {
        <div class="setting-row">
            <div>
                <p class="setting-title">{&props.title}</p>
                <p class="muted">{&props.description}</p>
            </div>
            <button
                type="button"
                role="switch"
                aria-checked={on.to_string()}
                class={classes!("switch", (*on).then(|| "on"))}
                {onclick}
            >
                <span class="switch-thumb"></span>
            </button>
        </div>
    }
}

#[function_component(DashboardSettings)]
pub fn dashboard_settings() -> Html {
    let session = use_session();
    let theme = use_theme();
    let identity = session.identity().cloned();
    let (name, email, avatar) = identity
        .map(|i| (i.name.clone(), i.email.clone(), i.avatar_or_default()))
        .unwrap_or_default();

    let theme_option = |option: Theme, icon: IconName, label: &'static str| {
        let onclick = {
            let theme = theme.clone();
            Callback::from(move |_: MouseEvent| theme.set(option))
        };
        html! {
            <button type="button" class={classes!("theme-option", (theme.theme() == option).then(|| "selected"))} {onclick}>
                <Icon name={icon} size={24} />
                <span>{label}</span>
            </button>
        }
    };

    html! {
        <DashboardLayout>
            <style>
            {r#"
                .settings-page { max-width: 48rem; display: flex; flex-direction: column; gap: 1.5rem; }
                .settings-page h1 { font-size: 1.5rem; font-weight: 700; margin: 0 0 0.25rem; }
                .settings-page p { margin: 0; }
                .settings-card { padding: 1.5rem; }
                .settings-card-title { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; color: var(--primary); }
                .settings-card-title h2 { font-size: 1.125rem; font-weight: 600; margin: 0; color: var(--foreground); }
                .profile-row { display: flex; align-items: center; gap: 1.5rem; margin-bottom: 1.5rem; }
                .profile-row img { width: 5rem; height: 5rem; border-radius: 999px; border: 2px solid var(--border); }
                .theme-options { display: flex; gap: 1rem; margin-top: 1rem; }
                .theme-option {
                    flex: 1;
                    padding: 1rem;
                    border-radius: 12px;
                    border: 2px solid var(--border);
                    background: none;
                    color: var(--foreground);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .theme-option:hover { border-color: rgba(59, 130, 246, 0.5); }
                .theme-option.selected { border-color: var(--primary); background: rgba(59, 130, 246, 0.05); }
                .setting-row { display: flex; justify-content: space-between; align-items: center; padding: 0.5rem 0; }
                .setting-row + .setting-row { margin-top: 0.75rem; }
                .setting-title { font-weight: 500; }
                .switch { width: 2.75rem; height: 1.5rem; border-radius: 999px; border: none; background: var(--muted); position: relative; cursor: pointer; transition: background 0.2s ease; }
                .switch.on { background: var(--primary); }
                .switch-thumb { position: absolute; top: 0.125rem; left: 0.125rem; width: 1.25rem; height: 1.25rem; border-radius: 999px; background: #fff; transition: transform 0.2s ease; }
                .switch.on .switch-thumb { transform: translateX(1.25rem); }
            "#}
            </style>
            <div class="settings-page">
                <div style={enter_style(0.0)}>
                    <h1>{"Settings"}</h1>
                    <p class="muted">{"Manage your account preferences"}</p>
                </div>

                <section class="card settings-card" style={enter_style(0.1)}>
                    <div class="settings-card-title"><Icon name={IconName::User} /><h2>{"Profile"}</h2></div>
                    <div class="profile-row">
                        <img src={avatar} alt={name.clone()} />
                        <button type="button" class="btn btn-outline">{"Change Avatar"}</button>
                    </div>
                    <div class="grid grid-2">
                        <div class="form-field">
                            <label for="name">{"Full Name"}</label>
                            <input id="name" type="text" value={name} />
                        </div>
                        <div class="form-field">
                            <label for="email">{"Email"}</label>
                            <input id="email" type="email" value={email} />
                        </div>
                    </div>
                    <button type="button" class="btn btn-hero">{"Save Changes"}</button>
                </section>

                <section class="card settings-card" style={enter_style(0.2)}>
                    <div class="settings-card-title"><Icon name={IconName::Sun} /><h2>{"Appearance"}</h2></div>
                    <p class="muted">{"Choose your preferred theme"}</p>
                    <div class="theme-options">
                        {theme_option(Theme::Light, IconName::Sun, "Light")}
                        {theme_option(Theme::Dark, IconName::Moon, "Dark")}
                    </div>
                </section>

                <section class="card settings-card" style={enter_style(0.3)}>
                    <div class="settings-card-title"><Icon name={IconName::Bell} /><h2>{"Notifications"}</h2></div>
                    { for NOTIFICATION_SETTINGS.iter().map(|(title, description, on)| html! {
                        <SettingSwitch key={*title} title={*title} description={*description} initially_on={*on} />
                    }) }
                </section>

                <section class="card settings-card" style={enter_style(0.4)}>
                    <div class="settings-card-title"><Icon name={IconName::Shield} /><h2>{"Security"}</h2></div>
                    <div class="form-field">
                        <label for="current-password">{"Current Password"}</label>
                        <input id="current-password" type="password" />
                    </div>
                    <div class="form-field">
                        <label for="new-password">{"New Password"}</label>
                        <input id="new-password" type="password" />
                    </div>
                    <div class="form-field">
                        <label for="confirm-password">{"Confirm Password"}</label>
                        <input id="confirm-password" type="password" />
                    </div>
                    <button type="button" class="btn btn-outline">{"Update Password"}</button>
                </section>
            </div>
        </DashboardLayout>
    }
}
