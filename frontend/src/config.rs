pub const PLACEHOLDER_PROJECT_ID: &str = "your-project-id";
pub const DEFAULT_DATASET: &str = "production";
pub const SANITY_API_VERSION: &str = "2024-01-01";

#[cfg(debug_assertions)]
pub fn use_cdn() -> bool {
    false  // Hit the live API when running locally so edits show up immediately
}

#[cfg(not(debug_assertions))]
pub fn use_cdn() -> bool {
    true
}

/// Headless content source settings, baked in at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
}

impl SanityConfig {
    /// A placeholder or blank project id means nobody connected a project yet.
    pub fn is_configured(&self) -> bool {
        let project_id = self.project_id.trim();
        !project_id.is_empty() && project_id != PLACEHOLDER_PROJECT_ID
    }
}

pub fn sanity_config() -> SanityConfig {
    SanityConfig {
        project_id: option_env!("SANITY_PROJECT_ID")
            .unwrap_or(PLACEHOLDER_PROJECT_ID)
            .to_string(),
        dataset: option_env!("SANITY_DATASET")
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DATASET)
            .to_string(),
        api_version: SANITY_API_VERSION.to_string(),
        use_cdn: use_cdn(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_project(project_id: &str) -> SanityConfig {
        SanityConfig {
            project_id: project_id.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: SANITY_API_VERSION.to_string(),
            use_cdn: true,
        }
    }

    #[test]
    fn placeholder_and_blank_ids_are_unconfigured() {
        assert!(!with_project("").is_configured());
        assert!(!with_project("   ").is_configured());
        assert!(!with_project(PLACEHOLDER_PROJECT_ID).is_configured());
    }

    #[test]
    fn real_project_id_is_configured() {
        assert!(with_project("abc123xy").is_configured());
    }
}
