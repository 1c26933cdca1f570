use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::content::hooks::use_content;
use crate::content::model::PricingPlan;
use crate::reveal::{Align, Preset, SectionHeader, StaggerContainer, StaggerItem};
use crate::Route;

const ENTERPRISE_PLAN_ID: &str = "enterprise";

/// Enterprise buyers talk to sales, everyone else signs up.
pub fn plan_route(plan: &PricingPlan) -> Route {
    if plan.id == ENTERPRISE_PLAN_ID {
        Route::Contact
    } else {
        Route::Register
    }
}

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    plan: PricingPlan,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let plan = &props.plan;
    let button = if plan.highlighted { "btn btn-hero btn-lg btn-block" } else { "btn btn-outline btn-lg btn-block" };

    html! {
        <div class={classes!("card", "pricing-card", plan.highlighted.then(|| "highlighted"), (!plan.highlighted).then(|| "hoverable"))}>
            if plan.highlighted {
                <span class="popular-badge">
                    <Icon name={IconName::Sparkles} size={12} />{"Most Popular"}
                </span>
            }
            <h3>{&plan.name}</h3>
            <p class="muted">{&plan.description}</p>
            <div class="pricing-price">
                <span class="price">{&plan.price}</span>
                <span class="muted">{&plan.period}</span>
            </div>
            <Link<Route> to={plan_route(plan)} classes={button}>{&plan.cta}</Link<Route>>
            <ul class="pricing-features">
                { for plan.features.iter().map(|feature| html! {
                    <li>
                        <span class="check"><Icon name={IconName::Check} size={12} /></span>
                        <span class="muted">{feature}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let plans = use_content::<Vec<PricingPlan>>();

    html! {
        <section class="section">
            <style>
            {r#"
                .pricing-grid { align-items: stretch; }
                .pricing-card { position: relative; height: 100%; padding: 2rem; }
                .pricing-card.highlighted { border-color: var(--primary); box-shadow: 0 0 40px rgba(59, 130, 246, 0.3); transform: scale(1.05); z-index: 1; }
                .pricing-card h3 { font-size: 1.25rem; font-weight: 600; margin: 0 0 0.5rem; }
                .popular-badge {
                    position: absolute;
                    top: -0.9rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    padding: 0.375rem 1rem;
                    border-radius: 999px;
                    background: linear-gradient(135deg, var(--primary), #60a5fa);
                    color: var(--primary-foreground);
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .pricing-price { margin: 1.5rem 0; }
                .pricing-price .price { font-size: 2.25rem; font-weight: 700; }
                .pricing-features { list-style: none; padding: 0; margin: 2rem 0 0; display: flex; flex-direction: column; gap: 0.75rem; font-size: 0.875rem; }
                .pricing-features li { display: flex; align-items: center; gap: 0.75rem; }
                .pricing-features .check {
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 999px;
                    background: rgba(59, 130, 246, 0.1);
                    color: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
            "#}
            </style>
            <div class="container">
                <SectionHeader
                    badge="Pricing"
                    title="Simple, Transparent"
                    highlight="Pricing"
                    description="Start free, scale as you grow. No hidden fees, no surprises."
                    align={Align::Center}
                />
                <StaggerContainer class="grid grid-3 pricing-grid" stagger={0.15}>
                    { for plans.into_iter().map(|plan| {
                        let preset = if plan.highlighted { Preset::Scale } else { Preset::SlideUp };
                        html_nested! {
                            <StaggerItem key={plan.id.clone()} {preset}>
                                <PricingCard plan={plan.clone()} />
                            </StaggerItem>
                        }
                    }) }
                </StaggerContainer>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data;

    #[test]
    fn only_enterprise_goes_to_contact() {
        for plan in data::pricing() {
            let expected = if plan.id == "enterprise" { Route::Contact } else { Route::Register };
            assert_eq!(plan_route(&plan), expected);
        }
    }
}
