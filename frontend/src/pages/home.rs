use yew::prelude::*;

use crate::components::layout::Layout;
use crate::sections::cta::CtaSection;
use crate::sections::faq::FaqSection;
use crate::sections::features::FeaturesSection;
use crate::sections::hero::HeroSection;
use crate::sections::pricing::PricingSection;
use crate::sections::projects::ProjectsSection;
use crate::sections::testimonials::TestimonialsSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Layout>
            <HeroSection />
            <FeaturesSection />
            <ProjectsSection />
            <TestimonialsSection />
            <PricingSection />
            <FaqSection />
            <CtaSection />
        </Layout>
    }
}
