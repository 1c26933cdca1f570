use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::page_hero::PageHero;
use crate::sections::cta::CtaSection;
use crate::sections::faq::FaqSection;

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <Layout>
            <PageHero
                badge="Support"
                title="Frequently Asked"
                highlight="Questions"
                description="Find answers to common questions about our platform and services."
            />
            <FaqSection />
            <CtaSection />
        </Layout>
    }
}
