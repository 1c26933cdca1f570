use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::page_hero::PageHero;
use crate::sections::cta::CtaSection;
use crate::sections::projects::ProjectsSection;

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <Layout>
            <PageHero
                badge="Portfolio"
                title="Our Recent"
                highlight="Projects"
                description="Explore the innovative solutions we've delivered for our clients."
            />
            <ProjectsSection />
            <CtaSection />
        </Layout>
    }
}
