use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::page_hero::PageHero;
use crate::sections::cta::CtaSection;
use crate::sections::testimonials::TestimonialsSection;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <Layout>
            <PageHero
                badge="Testimonials"
                title="What Our Clients"
                highlight="Say"
                description="Discover why teams around the world trust Cortex Digital."
            />
            <TestimonialsSection />
            <CtaSection />
        </Layout>
    }
}
