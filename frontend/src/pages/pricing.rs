use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::page_hero::PageHero;
use crate::sections::cta::CtaSection;
use crate::sections::faq::FaqSection;
use crate::sections::pricing::PricingSection;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <Layout>
            <PageHero
                badge="Pricing"
                title="Choose Your"
                highlight="Plan"
                description="Start free, upgrade when you're ready. No hidden fees."
            />
            <PricingSection />
            <FaqSection />
            <CtaSection />
        </Layout>
    }
}
