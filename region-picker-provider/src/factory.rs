//! Source factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::RegionSource;
use crate::types::{SourceConfig, SourceType};

#[cfg(feature = "memory")]
use crate::providers::MemoryRegionSource;
#[cfg(feature = "rest")]
use crate::providers::RestRegionSource;

/// Creates a [`RegionSource`] from the given configuration.
///
/// The concrete source type is determined by the [`SourceConfig`] variant.
/// The returned source is wrapped in `Arc<dyn RegionSource>` so it can be
/// shared with fetch tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use region_picker_provider::{create_source, RequestContext, SourceConfig, LevelSpec};
///
/// let source = create_source(SourceConfig::Rest {
///     api: RequestContext::new("https://api.example.org/api").with_auth_token("token"),
///     levels: LevelSpec::default_chain(),
/// }).unwrap();
/// ```
pub fn create_source(config: SourceConfig) -> Result<Arc<dyn RegionSource>> {
    match config {
        #[cfg(feature = "rest")]
        SourceConfig::Rest { api, levels } => Ok(Arc::new(RestRegionSource::new(api, levels)?)),
        #[cfg(feature = "memory")]
        SourceConfig::Memory { dataset_path } => {
            let source = match dataset_path {
                Some(path) => MemoryRegionSource::from_path(&path)?,
                None => MemoryRegionSource::bundled()?,
            };
            Ok(Arc::new(source))
        }
    }
}

/// Returns every source type enabled via feature flags.
pub fn available_sources() -> Vec<SourceType> {
    vec![
        #[cfg(feature = "rest")]
        SourceType::Rest,
        #[cfg(feature = "memory")]
        SourceType::Memory,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "memory")]
    #[test]
    fn memory_config_uses_bundled_dataset() {
        let source = create_source(SourceConfig::Memory { dataset_path: None });
        assert!(
            matches!(&source, Ok(s) if s.id() == "memory"),
            "memory source not created"
        );
    }

    #[cfg(feature = "rest")]
    #[test]
    fn rest_config_builds_rest_source() {
        let source = create_source(SourceConfig::Rest {
            api: crate::types::RequestContext::new("http://127.0.0.1:1"),
            levels: Vec::new(),
        });
        assert!(
            matches!(&source, Ok(s) if s.id() == "rest"
                && s.endpoint(crate::types::HierarchyLevel::Village) == "villages"),
            "rest source not created"
        );
    }

    #[test]
    fn available_sources_follow_features() {
        let sources = available_sources();
        #[cfg(feature = "rest")]
        assert!(sources.contains(&SourceType::Rest));
        #[cfg(feature = "memory")]
        assert!(sources.contains(&SourceType::Memory));
        let _ = sources;
    }
}
