use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::content::configured_source;
use crate::content::resolver::{resolve_record, ContentRecord, ContentSource};

/// The remote lookup for `T`, or `None` when there is no source to ask.
fn remote_fetch<T: ContentRecord>(source: Option<Rc<dyn ContentSource>>) -> Option<impl Future<Output = T>> {
    let source = source?;
    Some(async move { resolve_record::<T>(Some(source.as_ref())).await })
}

/// Yields the static record right away and swaps in the remote record, whole,
/// once it resolves. Answers that land after unmount are dropped.
#[hook]
pub fn use_content<T: ContentRecord>() -> T {
    let record = use_state(T::fallback);

    {
        let record = record.clone();
        use_effect_with_deps(
            move |_| {
                let mounted = Rc::new(Cell::new(true));
                if let Some(fetch) = remote_fetch::<T>(configured_source()) {
                    let mounted = mounted.clone();
                    spawn_local(async move {
                        let resolved = fetch.await;
                        if mounted.get() && resolved != *record {
                            record.set(resolved);
                        }
                    });
                }
                move || mounted.set(false)
            },
            (),
        );
    }

    (*record).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data;
    use crate::content::model::Faq;
    use crate::content::query::ContentQuery;
    use crate::content::resolver::ContentError;
    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;
    use serde_json::{json, Value};

    struct OneFaq;

    impl ContentSource for OneFaq {
        fn fetch(&self, _query: ContentQuery) -> LocalBoxFuture<'_, Result<Option<Value>, ContentError>> {
            Box::pin(async {
                Ok(Some(json!([{
                    "_id": "faq-remote",
                    "question": "Remote?",
                    "answer": "Yes.",
                    "order": 1
                }])))
            })
        }
    }

    #[test]
    fn nothing_is_fetched_without_a_source() {
        assert!(remote_fetch::<Vec<Faq>>(None).is_none());
    }

    #[test]
    fn configured_source_replaces_the_fallback() {
        let source: Rc<dyn ContentSource> = Rc::new(OneFaq);
        let fetch = remote_fetch::<Vec<Faq>>(Some(source)).expect("source is configured");
        let faqs = block_on(fetch);
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].question, "Remote?");
        assert_ne!(faqs, data::faqs());
    }
}
