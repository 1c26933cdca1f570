use yew::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::components::navbar::HrefLink;
use crate::content::hooks::use_content;
use crate::content::model::HeroContent;
use crate::reveal::preset::{state_style, VisualState};
use crate::reveal::Counter;

pub const DEFAULT_VIDEO_URL: &str =
    "https://videos.pexels.com/video-files/3129671/3129671-uhd_2560_1440_30fps.mp4";

enum StatValue {
    Counted { to: f64, decimals: usize, suffix: &'static str },
    Fixed(&'static str),
}

const STATS: [(StatValue, &str); 4] = [
    (StatValue::Counted { to: 10.0, decimals: 0, suffix: "K+" }, "Active Users"),
    (StatValue::Counted { to: 99.9, decimals: 1, suffix: "%" }, "Uptime"),
    (StatValue::Counted { to: 50.0, decimals: 0, suffix: "+" }, "Countries"),
    (StatValue::Fixed("24/7"), "Support"),
];

/// Remote hero video if one is set, the stock clip otherwise.
pub fn video_url(hero: &HeroContent) -> &str {
    hero.background_video
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_VIDEO_URL)
}

fn rise(offset: f64) -> VisualState {
    VisualState { opacity: 0.0, y: offset, ..VisualState::SHOWN }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let hero = use_content::<HeroContent>();
    // The hero is above the fold, so it animates on mount instead of on scroll.
    let mounted = use_state_eq(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }
    let at_rest = |hidden: VisualState| if *mounted { VisualState::SHOWN } else { hidden };

    html! {
        <section class="hero">
            <style>
            {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding-top: 5rem;
                    text-align: center;
                }
                .hero-video { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; z-index: 0; }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: color-mix(in srgb, var(--background) 80%, transparent);
                    backdrop-filter: blur(2px);
                }
                .hero-glow {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 999px;
                    filter: blur(120px);
                    background: rgba(59, 130, 246, 0.3);
                    z-index: 1;
                }
                .hero-content { position: relative; z-index: 10; max-width: 56rem; margin: 0 auto; }
                .hero h1 { font-size: clamp(2.25rem, 7vw, 4.5rem); font-weight: 700; letter-spacing: -0.02em; margin: 2rem 0 1.5rem; }
                .hero-subtitle { font-size: 1.2rem; color: var(--muted-foreground); max-width: 42rem; margin: 0 auto 2.5rem; line-height: 1.6; }
                .hero-ctas { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                .hero-stats { margin-top: 4rem; display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                .hero-stat-value { font-size: 2.25rem; font-weight: 700; }
                .hero-stat-label { font-size: 0.875rem; color: var(--muted-foreground); margin-top: 0.25rem; }
                @media (max-width: 640px) {
                    .hero-stats { grid-template-columns: repeat(2, 1fr); }
                }
            "#}
            </style>

            <video class="hero-video" autoplay=true loop=true muted=true playsinline=true>
                <source src={video_url(&hero).to_string()} type="video/mp4" />
            </video>
            <div class="hero-overlay"></div>
            <div class="hero-glow" style="top: 25%; left: 25%;"></div>
            <div class="hero-glow" style="bottom: 25%; right: 25%; opacity: 0.7;"></div>

            <div class="container hero-content">
                <div class="badge-pill" style={state_style(at_rest(rise(20.0)), 0.5, 0.0)}>
                    <Icon name={IconName::Sparkles} size={16} />
                    <span>{"Introducing Cortex Digital Platform"}</span>
                    <Icon name={IconName::ArrowRight} size={16} />
                </div>

                <h1 style={state_style(at_rest(rise(30.0)), 0.6, 0.1)}>
                    {&hero.title}{" "}
                    <span class="text-gradient">{&hero.highlight}</span>
                </h1>

                <p class="hero-subtitle" style={state_style(at_rest(rise(30.0)), 0.6, 0.2)}>
                    {&hero.subtitle}
                </p>

                <div class="hero-ctas" style={state_style(at_rest(rise(30.0)), 0.6, 0.3)}>
                    <HrefLink href={hero.cta.href.clone()} class="btn btn-hero btn-lg">
                        {&hero.cta.label}
                        <Icon name={IconName::ArrowRight} />
                    </HrefLink>
                    <HrefLink href={hero.secondary_cta.href.clone()} class="btn btn-outline btn-lg">
                        <Icon name={IconName::Play} />
                        {&hero.secondary_cta.label}
                    </HrefLink>
                </div>

                <div class="hero-stats">
                    { for STATS.iter().enumerate().map(|(index, (value, label))| {
                        let hidden = VisualState { opacity: 0.0, scale: 0.8, ..VisualState::SHOWN };
                        html! {
                            <div key={*label} style={state_style(at_rest(hidden), 0.4, 0.6 + index as f64 * 0.1)}>
                                <div class="hero-stat-value text-gradient">
                                    { match value {
                                        StatValue::Counted { to, decimals, suffix } => html! {
                                            <Counter to={*to} decimals={*decimals} suffix={*suffix} />
                                        },
                                        StatValue::Fixed(text) => html! { {*text} },
                                    } }
                                </div>
                                <div class="hero-stat-label">{*label}</div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data;

    #[test]
    fn missing_or_blank_video_uses_stock_clip() {
        let mut hero = data::hero();
        hero.background_video = None;
        assert_eq!(video_url(&hero), DEFAULT_VIDEO_URL);
        hero.background_video = Some("  ".into());
        assert_eq!(video_url(&hero), DEFAULT_VIDEO_URL);
        hero.background_video = Some("https://cdn.example.com/intro.mp4".into());
        assert_eq!(video_url(&hero), "https://cdn.example.com/intro.mp4");
    }
}
