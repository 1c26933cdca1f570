use futures::future::LocalBoxFuture;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::content::data;
use crate::content::model::*;
use crate::content::query::ContentQuery;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content source is not configured")]
    Unconfigured,
    #[error("request failed: {0}")]
    Network(String),
    #[error("content source answered with status {0}")]
    Status(u16),
    #[error("could not decode {query} content: {source}")]
    Decode {
        query: ContentQuery,
        #[source]
        source: serde_json::Error,
    },
    #[error("content source returned no {0} content")]
    Empty(ContentQuery),
}

/// Anything that can answer a content query with the raw JSON result.
/// `Ok(None)` means the source answered but had nothing for the query.
pub trait ContentSource {
    fn fetch(&self, query: ContentQuery) -> LocalBoxFuture<'_, Result<Option<Value>, ContentError>>;
}

/// Whether a successfully decoded value still counts as "nothing there".
pub trait Blank {
    fn is_blank(&self) -> bool {
        false
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for SiteConfig {}
impl Blank for HeroContent {}
impl Blank for ContactInfo {}

/// A content type with a fixed query and a static fallback.
pub trait ContentRecord: Blank + Clone + PartialEq + DeserializeOwned + 'static {
    const QUERY: ContentQuery;

    fn fallback() -> Self;
}

macro_rules! content_record {
    ($ty:ty, $query:ident, $fallback:path) => {
        impl ContentRecord for $ty {
            const QUERY: ContentQuery = ContentQuery::$query;

            fn fallback() -> Self {
                $fallback()
            }
        }
    };
}

content_record!(SiteConfig, SiteConfig, data::site_config);
content_record!(Vec<NavItem>, Navigation, data::navigation);
content_record!(HeroContent, Hero, data::hero);
content_record!(Vec<Feature>, Features, data::features);
content_record!(Vec<PricingPlan>, Pricing, data::pricing);
content_record!(Vec<Testimonial>, Testimonials, data::testimonials);
content_record!(Vec<Faq>, Faqs, data::faqs);
content_record!(Vec<Project>, Projects, data::projects);
content_record!(ContactInfo, Contact, data::contact);

/// Runs `query` against `source` and decodes the whole result. Nothing is
/// merged with the fallback: the caller gets a complete remote value or an
/// error.
pub async fn fetch_record<T>(source: &dyn ContentSource, query: ContentQuery) -> Result<T, ContentError>
where
    T: Blank + DeserializeOwned,
{
    let value = match source.fetch(query).await? {
        Some(Value::Null) | None => return Err(ContentError::Empty(query)),
        Some(value) => value,
    };
    let record: T = serde_json::from_value(value).map_err(|source| ContentError::Decode { query, source })?;
    if record.is_blank() {
        return Err(ContentError::Empty(query));
    }
    Ok(record)
}

/// Resolves `query` to the remote value when one is available, otherwise to
/// `fallback`. Never fails: every failure path is logged and degrades to the
/// fallback.
pub async fn resolve<T>(source: Option<&dyn ContentSource>, query: ContentQuery, fallback: T) -> T
where
    T: Blank + DeserializeOwned,
{
    let Some(source) = source else {
        info!("Content source not configured, using static {} content", query);
        return fallback;
    };

    match fetch_record(source, query).await {
        Ok(record) => record,
        Err(ContentError::Empty(_)) => {
            info!("No remote {} content, using static fallback", query);
            fallback
        }
        Err(e) => {
            warn!("Failed to fetch {} content, using fallback: {}", query, e);
            fallback
        }
    }
}

pub async fn resolve_record<T: ContentRecord>(source: Option<&dyn ContentSource>) -> T {
    resolve(source, T::QUERY, T::fallback()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::Cell;

    enum Reply {
        Value(Value),
        Nothing,
        Fail,
    }

    struct FakeSource {
        reply: Reply,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(reply: Reply) -> Self {
            Self { reply, calls: Cell::new(0) }
        }
    }

    impl ContentSource for FakeSource {
        fn fetch(&self, _query: ContentQuery) -> LocalBoxFuture<'_, Result<Option<Value>, ContentError>> {
            self.calls.set(self.calls.get() + 1);
            let result = match &self.reply {
                Reply::Value(v) => Ok(Some(v.clone())),
                Reply::Nothing => Ok(None),
                Reply::Fail => Err(ContentError::Network("connection refused".into())),
            };
            Box::pin(async move { result })
        }
    }

    #[test]
    fn unconfigured_source_yields_every_fallback() {
        assert_eq!(block_on(resolve_record::<SiteConfig>(None)), data::site_config());
        assert_eq!(block_on(resolve_record::<Vec<NavItem>>(None)), data::navigation());
        assert_eq!(block_on(resolve_record::<HeroContent>(None)), data::hero());
        assert_eq!(block_on(resolve_record::<Vec<Feature>>(None)), data::features());
        assert_eq!(block_on(resolve_record::<Vec<PricingPlan>>(None)), data::pricing());
        assert_eq!(block_on(resolve_record::<Vec<Testimonial>>(None)), data::testimonials());
        assert_eq!(block_on(resolve_record::<Vec<Faq>>(None)), data::faqs());
        assert_eq!(block_on(resolve_record::<Vec<Project>>(None)), data::projects());
        assert_eq!(block_on(resolve_record::<ContactInfo>(None)), data::contact());
    }

    #[test]
    fn absent_result_falls_back() {
        let source = FakeSource::new(Reply::Nothing);
        let hero: HeroContent = block_on(resolve_record(Some(&source)));
        assert_eq!(hero, data::hero());
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn null_and_empty_results_fall_back() {
        let null = FakeSource::new(Reply::Value(Value::Null));
        assert_eq!(block_on(resolve_record::<ContactInfo>(Some(&null))), data::contact());

        let empty = FakeSource::new(Reply::Value(json!([])));
        assert_eq!(block_on(resolve_record::<Vec<Faq>>(Some(&empty))), data::faqs());
    }

    #[test]
    fn network_failure_falls_back() {
        let source = FakeSource::new(Reply::Fail);
        let plans: Vec<PricingPlan> = block_on(resolve_record(Some(&source)));
        assert_eq!(plans, data::pricing());
    }

    #[test]
    fn malformed_result_falls_back_whole() {
        // Missing `subtitle` and the CTAs: nothing from the partial record leaks through.
        let source = FakeSource::new(Reply::Value(json!({
            "title": "Remote title",
            "highlight": "Remote highlight"
        })));
        let hero: HeroContent = block_on(resolve_record(Some(&source)));
        assert_eq!(hero, data::hero());
    }

    #[test]
    fn remote_result_replaces_fallback() {
        let source = FakeSource::new(Reply::Value(json!([
            { "_id": "abc", "question": "Remote?", "answer": "Yes." }
        ])));
        let faqs: Vec<Faq> = block_on(resolve_record(Some(&source)));
        assert_eq!(
            faqs,
            vec![Faq { id: "abc".into(), question: "Remote?".into(), answer: "Yes.".into() }]
        );
    }

    #[test]
    fn remote_feature_with_unknown_icon_still_decodes() {
        let source = FakeSource::new(Reply::Value(json!([
            { "_id": "f1", "icon": "Rocket", "title": "Launch", "description": "Fast." }
        ])));
        let features: Vec<Feature> = block_on(resolve_record(Some(&source)));
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].icon, crate::components::icon::IconName::Unknown);
    }

    #[test]
    fn fetch_record_reports_empty() {
        let source = FakeSource::new(Reply::Value(json!([])));
        let result = block_on(fetch_record::<Vec<Project>>(&source, ContentQuery::Projects));
        assert!(matches!(result, Err(ContentError::Empty(ContentQuery::Projects))));
    }
}
