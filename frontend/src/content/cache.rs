use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use futures::future::LocalBoxFuture;
use serde_json::Value;

use crate::content::query::ContentQuery;
use crate::content::resolver::{ContentError, ContentSource};

pub const STALE_AFTER_MINUTES: i64 = 5;

struct CacheEntry {
    value: Value,
    fetched_at: DateTime<Utc>,
}

/// Wraps a source and answers repeated queries from memory until the cached
/// answer goes stale. Only successful non-empty answers are remembered.
pub struct CachedSource<S> {
    inner: S,
    stale_after: Duration,
    entries: RefCell<HashMap<ContentQuery, CacheEntry>>,
}

impl<S: ContentSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self::with_stale_time(inner, Duration::minutes(STALE_AFTER_MINUTES))
    }

    pub fn with_stale_time(inner: S, stale_after: Duration) -> Self {
        Self {
            inner,
            stale_after,
            entries: RefCell::new(HashMap::new()),
        }
    }

    fn fresh(&self, query: ContentQuery, now: DateTime<Utc>) -> Option<Value> {
        let entries = self.entries.borrow();
        let entry = entries.get(&query)?;
        (now - entry.fetched_at < self.stale_after).then(|| entry.value.clone())
    }

    pub async fn fetch_at(&self, query: ContentQuery, now: DateTime<Utc>) -> Result<Option<Value>, ContentError> {
        if let Some(value) = self.fresh(query, now) {
            return Ok(Some(value));
        }
        let result = self.inner.fetch(query).await?;
        match &result {
            Some(value) if !value.is_null() => {
                self.entries.borrow_mut().insert(
                    query,
                    CacheEntry { value: value.clone(), fetched_at: now },
                );
            }
            _ => {
                self.entries.borrow_mut().remove(&query);
            }
        }
        Ok(result)
    }
}

impl<S: ContentSource> ContentSource for CachedSource<S> {
    fn fetch(&self, query: ContentQuery) -> LocalBoxFuture<'_, Result<Option<Value>, ContentError>> {
        Box::pin(self.fetch_at(query, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::Cell;

    struct CountingSource {
        calls: Cell<usize>,
        answer: Option<Value>,
    }

    impl ContentSource for CountingSource {
        fn fetch(&self, _query: ContentQuery) -> LocalBoxFuture<'_, Result<Option<Value>, ContentError>> {
            self.calls.set(self.calls.get() + 1);
            let answer = self.answer.clone();
            Box::pin(async move { Ok(answer) })
        }
    }

    fn counting(answer: Option<Value>) -> CachedSource<CountingSource> {
        CachedSource::new(CountingSource { calls: Cell::new(0), answer })
    }

    #[test]
    fn fresh_answer_is_served_from_memory() {
        let cache = counting(Some(json!({"name": "x"})));
        let start = Utc::now();

        block_on(cache.fetch_at(ContentQuery::SiteConfig, start)).unwrap();
        let again = block_on(cache.fetch_at(ContentQuery::SiteConfig, start + Duration::minutes(4))).unwrap();

        assert_eq!(again, Some(json!({"name": "x"})));
        assert_eq!(cache.inner.calls.get(), 1);
    }

    #[test]
    fn stale_answer_is_refetched() {
        let cache = counting(Some(json!([1, 2])));
        let start = Utc::now();

        block_on(cache.fetch_at(ContentQuery::Faqs, start)).unwrap();
        block_on(cache.fetch_at(ContentQuery::Faqs, start + Duration::minutes(STALE_AFTER_MINUTES))).unwrap();

        assert_eq!(cache.inner.calls.get(), 2);
    }

    #[test]
    fn queries_are_cached_separately() {
        let cache = counting(Some(json!([])));
        let now = Utc::now();

        block_on(cache.fetch_at(ContentQuery::Faqs, now)).unwrap();
        block_on(cache.fetch_at(ContentQuery::Projects, now)).unwrap();

        assert_eq!(cache.inner.calls.get(), 2);
    }

    #[test]
    fn missing_answers_are_not_remembered() {
        let cache = counting(None);
        let now = Utc::now();

        block_on(cache.fetch_at(ContentQuery::Hero, now)).unwrap();
        block_on(cache.fetch_at(ContentQuery::Hero, now)).unwrap();

        assert_eq!(cache.inner.calls.get(), 2);
    }
}
