use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AuthShellProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub aside_title: AttrValue,
    pub aside_text: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Two-column frame shared by the sign-in and sign-up forms.
#[function_component(AuthShell)]
pub fn auth_shell(props: &AuthShellProps) -> Html {
    html! {
        <div class="auth-page">
            <style>
            {r#"
                .auth-page { min-height: 100vh; display: flex; animation: page-in 0.4s ease-out; }
                .auth-form-side { flex: 1; display: flex; align-items: center; justify-content: center; padding: 2rem; }
                .auth-form { width: 100%; max-width: 28rem; }
                .auth-form .nav-logo { display: inline-block; margin-bottom: 2rem; font-size: 1.5rem; font-weight: 700; }
                .auth-form h1 { font-size: 1.875rem; font-weight: 700; margin: 0 0 0.5rem; }
                .auth-form > p { color: var(--muted-foreground); margin: 0 0 2rem; }
                .auth-switch { margin-top: 1.5rem; text-align: center; color: var(--muted-foreground); font-size: 0.9rem; }
                .auth-switch a { color: var(--primary); font-weight: 500; }
                .auth-aside {
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 3rem;
                    background: linear-gradient(135deg, rgba(59, 130, 246, 0.15), var(--surface-sunken));
                    border-left: 1px solid var(--border);
                    text-align: center;
                }
                .auth-aside h2 { font-size: 2rem; font-weight: 700; margin: 0 0 1rem; }
                .auth-aside p { color: var(--muted-foreground); max-width: 24rem; margin: 0 auto; }
                .loading-spinner {
                    display: inline-block;
                    width: 18px;
                    height: 18px;
                    border: 3px solid rgba(255, 255, 255, 0.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                @media (max-width: 1024px) {
                    .auth-aside { display: none; }
                }
            "#}
            </style>
            <div class="auth-form-side">
                <div class="auth-form">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="text-gradient">{"Cortex Digital"}</span>
                    </Link<Route>>
                    <h1>{&props.title}</h1>
                    <p>{&props.subtitle}</p>
                    { for props.children.iter() }
                </div>
            </div>
            <div class="auth-aside">
                <div>
                    <h2 class="text-gradient">{&props.aside_title}</h2>
                    <p>{&props.aside_text}</p>
                </div>
            </div>
        </div>
    }
}
