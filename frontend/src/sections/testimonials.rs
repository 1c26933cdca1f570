use yew::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::content::hooks::use_content;
use crate::content::model::Testimonial;
use crate::reveal::{Align, Preset, SectionHeader, StaggerContainer, StaggerItem};

/// Cards slide in from alternating sides.
pub fn card_preset(index: usize) -> Preset {
    if index % 2 == 0 {
        Preset::SlideLeft
    } else {
        Preset::SlideRight
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = &props.testimonial;
    html! {
        <div class="card hoverable testimonial-card">
            <span class="testimonial-quote"><Icon name={IconName::Quote} size={40} /></span>
            <div class="testimonial-stars">
                { for (0..testimonial.stars()).map(|_| html! { <Icon name={IconName::Star} size={16} class="star" /> }) }
            </div>
            <p>{format!("\"{}\"", testimonial.content)}</p>
            <div class="testimonial-author">
                <img src={testimonial.avatar.clone()} alt={testimonial.name.clone()} />
                <div>
                    <h4>{&testimonial.name}</h4>
                    <p class="muted">{format!("{}, {}", testimonial.role, testimonial.company)}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let testimonials = use_content::<Vec<Testimonial>>();

    html! {
        <section class="section sunken">
            <style>
            {r#"
                .testimonial-card { position: relative; height: 100%; padding: 2rem; }
                .testimonial-quote { position: absolute; top: 1.5rem; right: 1.5rem; color: rgba(59, 130, 246, 0.15); }
                .testimonial-stars { display: flex; gap: 0.25rem; margin-bottom: 1rem; color: var(--primary); }
                .testimonial-stars .star { fill: currentColor; }
                .testimonial-card > p { line-height: 1.6; margin: 0 0 1.5rem; }
                .testimonial-author { display: flex; align-items: center; gap: 1rem; }
                .testimonial-author img { width: 3rem; height: 3rem; border-radius: 999px; object-fit: cover; border: 2px solid var(--border); }
                .testimonial-author h4 { margin: 0; font-weight: 600; }
                .testimonial-author p { margin: 0; font-size: 0.875rem; }
            "#}
            </style>
            <div class="container">
                <SectionHeader
                    badge="Testimonials"
                    title="Loved by Teams"
                    highlight="Worldwide"
                    description="See what our customers have to say about their experience with Cortex Digital."
                    align={Align::Center}
                />
                <StaggerContainer class="grid grid-2" stagger={0.12}>
                    { for testimonials.into_iter().enumerate().map(|(index, testimonial)| html_nested! {
                        <StaggerItem key={testimonial.id.clone()} preset={card_preset(index)}>
                            <TestimonialCard testimonial={testimonial.clone()} />
                        </StaggerItem>
                    }) }
                </StaggerContainer>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_alternate_starting_left() {
        let presets: Vec<Preset> = (0..4).map(card_preset).collect();
        assert_eq!(presets, vec![Preset::SlideLeft, Preset::SlideRight, Preset::SlideLeft, Preset::SlideRight]);
    }
}
