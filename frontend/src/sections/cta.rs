use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::reveal::{Preset, ScrollReveal, TextReveal};
use crate::Route;

const TRUST_BADGES: [&str; 3] = ["No credit card required", "14-day free trial", "Cancel anytime"];

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    html! {
        <section class="section cta-section">
            <style>
            {r#"
                .cta-section { background: linear-gradient(135deg, rgba(59, 130, 246, 0.05), var(--background), rgba(59, 130, 246, 0.05)); text-align: center; }
                .cta-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 50rem;
                    height: 50rem;
                    transform: translate(-50%, -50%);
                    border-radius: 999px;
                    background: rgba(59, 130, 246, 0.1);
                    filter: blur(150px);
                }
                .cta-content { position: relative; z-index: 1; max-width: 56rem; margin: 0 auto; }
                .cta-content h2 { font-size: clamp(1.875rem, 5vw, 3.75rem); font-weight: 700; margin: 2rem 0 1.5rem; }
                .cta-content > p { font-size: 1.2rem; color: var(--muted-foreground); max-width: 42rem; margin: 0 auto 2.5rem; }
                .cta-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                .trust-badges { margin-top: 3rem; display: flex; flex-wrap: wrap; justify-content: center; gap: 1.5rem; color: var(--muted-foreground); font-size: 0.875rem; }
            "#}
            </style>
            <div class="cta-glow"></div>
            <div class="container">
                <ScrollReveal class="cta-content" preset={Preset::SlideUp}>
                    <div class="badge-pill">
                        <Icon name={IconName::Sparkles} size={16} />
                        <span>{"Start your journey today"}</span>
                    </div>
                    <h2>
                        <TextReveal text="Ready to Transform Your Business?" highlight_words={vec!["Business?".to_string()]} delay={0.1} />
                    </h2>
                    <p>{"Join thousands of companies already using Cortex Digital to scale their operations and drive growth."}</p>
                    <div class="cta-actions">
                        <Link<Route> to={Route::Register} classes="btn btn-hero btn-lg">
                            {"Get Started Free"}<Icon name={IconName::ArrowRight} />
                        </Link<Route>>
                        <Link<Route> to={Route::Contact} classes="btn btn-outline btn-lg">{"Talk to Sales"}</Link<Route>>
                    </div>
                    <div class="trust-badges">
                        { for TRUST_BADGES.iter().map(|badge| html! { <span key={*badge}>{format!("✓ {}", badge)}</span> }) }
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}
