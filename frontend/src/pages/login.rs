use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::auth_shell::AuthShell;
use crate::session::{use_session, MIN_PASSWORD_LEN};
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    if session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let onsubmit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }
            let session = session.clone();
            let navigator = navigator.clone();
            let (email, password) = ((*email).clone(), (*password).clone());
            let error = error.clone();
            let is_loading = is_loading.clone();
            is_loading.set(true);
            error.set(None);
            spawn_local(async move {
                match session.login(email, password).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        info!("Sign in rejected: {}", e);
                        error.set(Some(e.to_string()));
                        is_loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <AuthShell
            title="Welcome back"
            subtitle="Sign in to your account to continue"
            aside_title="Build the future"
            aside_text="Manage your projects, track progress and collaborate with your team, all in one place."
        >
            <form {onsubmit}>
                <div class="form-field">
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        value={(*email).clone()}
                        oninput={let email = email.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                </div>
                <div class="form-field">
                    <label for="password">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        value={(*password).clone()}
                        oninput={let password = password.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            password.set(input.value());
                        }}
                    />
                    <span class="form-hint">{format!("At least {} characters", MIN_PASSWORD_LEN)}</span>
                </div>
                if let Some(message) = (*error).as_ref() {
                    <div class="error-message">{message}</div>
                }
                <button type="submit" class="btn btn-hero btn-lg btn-block" disabled={*is_loading}>
                    if *is_loading {
                        <span class="loading-spinner"></span>{" Signing in..."}
                    } else {
                        {"Sign In"}
                    }
                </button>
            </form>
            <p class="auth-switch">
                {"Don't have an account? "}
                <Link<Route> to={Route::Register}>{"Sign up"}</Link<Route>>
            </p>
        </AuthShell>
    }
}
