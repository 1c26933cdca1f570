use yew::prelude::*;

#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    html! {
        <style>
        {r#"
            :root, html.dark {
                --background: #0b0d12;
                --foreground: #f5f7fa;
                --card: #12151c;
                --muted: #1b1f29;
                --muted-foreground: #9aa3b2;
                --border: #252a36;
                --primary: #3b82f6;
                --primary-foreground: #ffffff;
                --surface-sunken: #090b0f;
            }
            html.light {
                --background: #ffffff;
                --foreground: #0b0d12;
                --card: #f7f8fa;
                --muted: #eef0f4;
                --muted-foreground: #5b6474;
                --border: #e2e5eb;
                --primary: #2563eb;
                --primary-foreground: #ffffff;
                --surface-sunken: #f2f4f7;
            }
            * { box-sizing: border-box; }
            body {
                margin: 0;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                background: var(--background);
                color: var(--foreground);
                transition: background 0.3s ease, color 0.3s ease;
            }
            a { color: inherit; text-decoration: none; }
            .container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
            .site-main { flex: 1; }
            .site-layout { min-height: 100vh; display: flex; flex-direction: column; animation: page-in 0.4s ease-out; }
            @keyframes page-in {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .text-gradient {
                background: linear-gradient(45deg, var(--primary), #7EB2FF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .muted { color: var(--muted-foreground); }
            .section { padding: 6rem 0; position: relative; overflow: hidden; }
            .section.sunken { background: var(--surface-sunken); }
            .section-header { max-width: 48rem; margin-bottom: 4rem; }
            .section-header.align-center { text-align: center; margin-left: auto; margin-right: auto; }
            .section-header.align-right { text-align: right; margin-left: auto; }
            .section-badge {
                display: block;
                color: var(--primary);
                font-weight: 600;
                font-size: 0.875rem;
                text-transform: uppercase;
                letter-spacing: 0.08em;
                margin-bottom: 1rem;
            }
            .section-title { font-size: clamp(1.875rem, 4vw, 3rem); font-weight: 700; margin: 0 0 1.5rem; }
            .section-description { color: var(--muted-foreground); font-size: 1.125rem; margin: 0; }
            .text-reveal-word { display: inline-block; margin-right: 0.25em; }
            .card {
                background: var(--card);
                border: 1px solid var(--border);
                border-radius: 16px;
                box-shadow: 0 4px 24px rgba(0, 0, 0, 0.12);
                transition: border-color 0.3s ease, transform 0.3s ease, box-shadow 0.3s ease;
            }
            .card.hoverable:hover { border-color: rgba(59, 130, 246, 0.3); transform: translateY(-8px); }
            .grid { display: grid; gap: 1.5rem; }
            .grid-2 { grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
            .grid-3 { grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
            .grid-4 { grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }
            .btn {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                border-radius: 10px;
                padding: 0.625rem 1.25rem;
                font-weight: 600;
                font-size: 0.95rem;
                cursor: pointer;
                border: 1px solid transparent;
                background: none;
                color: var(--foreground);
                transition: all 0.2s ease;
            }
            .btn:disabled { opacity: 0.6; cursor: not-allowed; }
            .btn-lg { padding: 0.875rem 1.75rem; font-size: 1.05rem; }
            .btn-block { width: 100%; }
            .btn-hero {
                background: linear-gradient(135deg, var(--primary), #60a5fa);
                color: var(--primary-foreground);
                box-shadow: 0 8px 24px rgba(59, 130, 246, 0.35);
            }
            .btn-hero:hover { transform: translateY(-2px); box-shadow: 0 12px 32px rgba(59, 130, 246, 0.45); }
            .btn-outline { border-color: var(--border); }
            .btn-outline:hover { border-color: var(--primary); color: var(--primary); }
            .btn-ghost:hover { background: var(--muted); }
            .btn-icon { padding: 0.5rem; border-radius: 999px; }
            .badge-pill {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.5rem 1rem;
                border-radius: 999px;
                background: rgba(59, 130, 246, 0.1);
                border: 1px solid rgba(59, 130, 246, 0.2);
                color: var(--primary);
                font-size: 0.875rem;
                font-weight: 500;
            }
            .form-field { display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1.25rem; }
            .form-field label { font-size: 0.9rem; font-weight: 500; }
            .form-field input, .form-field textarea {
                background: var(--card);
                border: 1px solid var(--border);
                border-radius: 10px;
                padding: 0.75rem 1rem;
                color: var(--foreground);
                font-size: 1rem;
            }
            .form-field input:focus, .form-field textarea:focus { outline: none; border-color: var(--primary); }
            .form-hint { font-size: 0.75rem; color: var(--muted-foreground); }
            .error-message { color: #ef4444; margin-bottom: 1rem; }
            .success-message { color: #22c55e; margin-bottom: 1rem; }
            .page-hero { padding: 8rem 0 4rem; text-align: center; }
            .page-hero h1 { font-size: clamp(2.25rem, 6vw, 3.75rem); font-weight: 700; margin: 0 0 1.5rem; }
            .page-hero p { color: var(--muted-foreground); font-size: 1.125rem; max-width: 48rem; margin: 0 auto; }
        "#}
        </style>
    }
}
