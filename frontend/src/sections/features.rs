use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::hooks::use_content;
use crate::content::model::Feature;
use crate::reveal::{Align, Preset, SectionHeader, StaggerContainer, StaggerItem};

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = &props.feature;
    html! {
        <div class="card hoverable feature-card">
            <div class="feature-icon">
                <Icon name={feature.icon} size={24} />
            </div>
            <h3>{&feature.title}</h3>
            <p class="muted">{&feature.description}</p>
        </div>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let features = use_content::<Vec<Feature>>();

    html! {
        <section class="section sunken">
            <style>
            {r#"
                .feature-card { height: 100%; padding: 1.5rem; }
                .feature-card h3 { font-size: 1.125rem; font-weight: 600; margin: 0 0 0.5rem; }
                .feature-card p { font-size: 0.875rem; line-height: 1.6; margin: 0; }
                .feature-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 12px;
                    background: rgba(59, 130, 246, 0.1);
                    color: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                    transition: background 0.3s ease;
                }
                .feature-card:hover .feature-icon { background: rgba(59, 130, 246, 0.2); }
            "#}
            </style>
            <div class="container">
                <SectionHeader
                    badge="Features"
                    title="Everything You Need to"
                    highlight="Scale"
                    description="Built for modern teams who demand performance, security, and seamless collaboration."
                    align={Align::Center}
                />
                <StaggerContainer class="grid grid-3">
                    { for features.into_iter().map(|feature| html_nested! {
                        <StaggerItem key={feature.id.clone()} preset={Preset::Scale}>
                            <FeatureCard feature={feature.clone()} />
                        </StaggerItem>
                    }) }
                </StaggerContainer>
            </div>
        </section>
    }
}
