use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::auth_shell::AuthShell;
use crate::session::{use_session, MIN_PASSWORD_LEN};
use crate::Route;

fn bind(field: &UseStateHandle<String>) -> Callback<InputEvent> {
    let field = field.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        field.set(input.value());
    })
}

#[function_component(Register)]
pub fn register() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    if session.is_authenticated() && success.is_none() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let onsubmit = {
        let session = session.clone();
        let (name, email, password) = (name.clone(), email.clone(), password.clone());
        let (error, success, is_loading) = (error.clone(), success.clone(), is_loading.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }
            let session = session.clone();
            let navigator = navigator.clone();
            let (name, email, password) = ((*name).clone(), (*email).clone(), (*password).clone());
            let (error, success, is_loading) = (error.clone(), success.clone(), is_loading.clone());
            is_loading.set(true);
            error.set(None);
            spawn_local(async move {
                match session.register(email, password, name).await {
                    Ok(identity) => {
                        success.set(Some(format!("Account created! Welcome to Cortex Digital, {}.", identity.name)));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        info!("Registration rejected: {}", e);
                        error.set(Some(format!("Could not create account. {}", e)));
                        is_loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <AuthShell
            title="Create an account"
            subtitle="Start your free 14-day trial today"
            aside_title="Join thousands of teams"
            aside_text="Get started in minutes. No credit card required, cancel anytime."
        >
            <form {onsubmit}>
                <div class="form-field">
                    <label for="name">{"Full Name"}</label>
                    <input id="name" type="text" placeholder="John Doe" value={(*name).clone()} oninput={bind(&name)} />
                </div>
                <div class="form-field">
                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" placeholder="you@example.com" value={(*email).clone()} oninput={bind(&email)} />
                </div>
                <div class="form-field">
                    <label for="password">{"Password"}</label>
                    <input id="password" type="password" placeholder="••••••••" value={(*password).clone()} oninput={bind(&password)} />
                    <span class="form-hint">{format!("At least {} characters", MIN_PASSWORD_LEN)}</span>
                </div>
                {
                    if let Some(message) = (*error).as_ref() {
                        html! { <div class="error-message">{message}</div> }
                    } else if let Some(message) = (*success).as_ref() {
                        html! { <div class="success-message">{message}</div> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="btn btn-hero btn-lg btn-block" disabled={*is_loading}>
                    if *is_loading {
                        <span class="loading-spinner"></span>{" Creating account..."}
                    } else {
                        {"Create Account"}
                    }
                </button>
            </form>
            <p class="auth-switch">
                {"Already have an account? "}
                <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
            </p>
        </AuthShell>
    }
}
