use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::page_hero::PageHero;
use crate::sections::cta::CtaSection;
use crate::sections::features::FeaturesSection;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <Layout>
            <PageHero
                badge="Features"
                title="Powerful Features for"
                highlight="Modern Teams"
                description="Everything you need to build, deploy, and scale your applications with confidence."
            />
            <FeaturesSection />
            <CtaSection />
        </Layout>
    }
}
