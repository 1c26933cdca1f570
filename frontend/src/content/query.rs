use std::fmt;

/// One query per content type. The GROQ projections return documents shaped
/// like the matching static record, so remote and fallback values decode into
/// the same Rust type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentQuery {
    SiteConfig,
    Navigation,
    Hero,
    Features,
    Pricing,
    Testimonials,
    Faqs,
    Projects,
    Contact,
}

impl ContentQuery {
    pub const ALL: [ContentQuery; 9] = [
        ContentQuery::SiteConfig,
        ContentQuery::Navigation,
        ContentQuery::Hero,
        ContentQuery::Features,
        ContentQuery::Pricing,
        ContentQuery::Testimonials,
        ContentQuery::Faqs,
        ContentQuery::Projects,
        ContentQuery::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContentQuery::SiteConfig => "siteConfig",
            ContentQuery::Navigation => "navigation",
            ContentQuery::Hero => "hero",
            ContentQuery::Features => "features",
            ContentQuery::Pricing => "pricing",
            ContentQuery::Testimonials => "testimonials",
            ContentQuery::Faqs => "faqs",
            ContentQuery::Projects => "projects",
            ContentQuery::Contact => "contact",
        }
    }

    pub fn groq(self) -> &'static str {
        match self {
            ContentQuery::SiteConfig => r#"*[_type == "siteConfig"][0]{
                name,
                tagline,
                description
            }"#,
            ContentQuery::Navigation => r#"*[_type == "navigation"][0].items[]{
                _key,
                label,
                href,
                children[]{
                    _key,
                    label,
                    href
                }
            }"#,
            ContentQuery::Hero => r#"*[_type == "hero"][0]{
                title,
                highlight,
                subtitle,
                "backgroundVideo": backgroundVideo.asset->url,
                cta { label, href },
                secondaryCta { label, href }
            }"#,
            ContentQuery::Features => r#"*[_type == "feature"] | order(order asc){
                _id,
                icon,
                title,
                description
            }"#,
            ContentQuery::Pricing => r#"*[_type == "pricingPlan"] | order(order asc){
                _id,
                name,
                price,
                period,
                description,
                features,
                highlighted,
                cta
            }"#,
            ContentQuery::Testimonials => r#"*[_type == "testimonial"]{
                _id,
                name,
                role,
                company,
                content,
                "avatar": avatar.asset->url,
                rating
            }"#,
            ContentQuery::Faqs => r#"*[_type == "faq"] | order(order asc){
                _id,
                question,
                answer
            }"#,
            ContentQuery::Projects => r#"*[_type == "project"]{
                _id,
                title,
                category,
                description,
                "image": image.asset->url,
                tags
            }"#,
            ContentQuery::Contact => r#"*[_type == "contactInfo"][0]{
                email,
                phone,
                address,
                socials[]{
                    platform,
                    url,
                    icon
                }
            }"#,
        }
    }
}

impl fmt::Display for ContentQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
