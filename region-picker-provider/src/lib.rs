//! # region-picker-provider
//!
//! Region option sources for cascading location pickers
//! (province → regency → district → village).
//!
//! ## Supported Sources
//!
//! | Source | Feature Flag | Backing |
//! |--------|-------------|---------|
//! | REST list endpoints | `rest` | `GET {base}/{endpoint}?page=&paginate=&search=` with Bearer token |
//! | In-memory dataset | `memory` | JSON file, or the bundled Indonesian sample |
//!
//! ## Feature Flags
//!
//! ### Source Selection
//!
//! - **`all-sources`** *(default)*: enable every source listed above.
//! - **`rest`**: enable only the REST source.
//! - **`memory`**: enable only the in-memory source.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use region_picker_provider::{
//!     create_source, HierarchyLevel, OptionQuery, SourceConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = create_source(SourceConfig::Memory { dataset_path: None })?;
//!
//!     // Provinces whose name contains "jawa"
//!     let provinces = source
//!         .list_options(HierarchyLevel::Province, &OptionQuery::search("jawa"))
//!         .await?;
//!
//!     // Regencies of the first match
//!     let query = OptionQuery::default().with_parent(Some(provinces.items[0].id.clone()));
//!     let regencies = source.list_options(HierarchyLevel::Regency, &query).await?;
//!     for regency in &regencies.items {
//!         println!("{} {}", regency.id, regency.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every source operation returns [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`]: the bearer token was rejected
//! - [`ProviderError::NotFound`]: a single-id lookup found nothing
//! - [`ProviderError::RateLimited`]: API rate limit exceeded (retryable)
//! - [`ProviderError::NetworkError`]: network connectivity issue (retryable)
//!
//! Transient errors are retried only when [`RequestContext::max_retries`] is non-zero.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use factory::{available_sources, create_source};

// 内部 trait（错误映射）不导出
pub use traits::RegionSource;

pub use types::{
    DEFAULT_PAGE_SIZE, HierarchyLevel, LevelSpec, OptionQuery, PaginatedResponse, RegionOption,
    RequestContext, SourceConfig, SourceType,
};

pub use utils::log_sanitizer;

#[cfg(feature = "memory")]
pub use providers::MemoryRegionSource;

#[cfg(feature = "rest")]
pub use providers::RestRegionSource;
