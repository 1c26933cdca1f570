use serde::{Deserialize, Serialize};

use crate::components::icon::IconName;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(alias = "_key", alias = "_id")]
    pub id: String,
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub children: Vec<NavItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    #[serde(default)]
    pub background_video: Option<String>,
    pub cta: Link,
    pub secondary_cta: Link,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(alias = "_id")]
    pub id: String,
    pub icon: IconName,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub avatar: String,
    pub rating: u8,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    pub fn stars(&self) -> u8 {
        self.rating.min(Self::MAX_RATING)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(alias = "_id")]
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: IconName,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}
