pub mod cache;
pub mod data;
pub mod hooks;
pub mod model;
pub mod query;
pub mod resolver;
pub mod sanity;

use std::rc::Rc;

use log::info;

use crate::config;
use cache::CachedSource;
use resolver::ContentSource;
use sanity::SanityClient;

thread_local! {
    static SOURCE: Option<Rc<dyn ContentSource>> = shared_source();
}

fn shared_source() -> Option<Rc<dyn ContentSource>> {
    let Some(client) = SanityClient::from_config(&config::sanity_config()) else {
        info!("Content source not configured, serving static content");
        return None;
    };
    Some(Rc::new(CachedSource::new(client)))
}

/// The shared remote source, or `None` when no content project is configured.
pub fn configured_source() -> Option<Rc<dyn ContentSource>> {
    SOURCE.with(|source| source.clone())
}
