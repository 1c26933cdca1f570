use yew::prelude::*;

use crate::reveal::{Preset, ScrollReveal};

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub badge: AttrValue,
    pub title: AttrValue,
    pub highlight: AttrValue,
    pub description: AttrValue,
}

/// Banner at the top of every public sub-page.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero">
            <div class="container">
                <ScrollReveal preset={Preset::SlideUp} threshold={0.0}>
                    <span class="section-badge">{&props.badge}</span>
                    <h1>{&props.title}{" "}<span class="text-gradient">{&props.highlight}</span></h1>
                    <p>{&props.description}</p>
                </ScrollReveal>
            </div>
        </section>
    }
}
