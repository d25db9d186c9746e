//! Region Picker Core Library
//!
//! Headless engine of the cascading searchable region selector
//! (province → regency → district → village):
//! - Selector state machine (`selector`): debouncer, result panel, dependent reset
//! - Option fetching (`services`): skip rules, cache, last-request-wins dispatch
//! - Pre-seeding forms from stored ids (`LookupService`)
//!
//! The selector types are synchronous and driven by explicit `Instant`s, so any
//! front-end event loop can host them; network I/O stays behind the
//! [`RegionSource`](region_picker_provider::RegionSource) trait.

pub mod error;
pub mod selector;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use selector::{CascadeForm, Debouncer, PanelState, ResultPanel, SearchSelector};
pub use services::{FetchDispatcher, LookupService, OptionFetcher, ServiceContext};
pub use traits::{InMemoryOptionCache, OptionCache, OptionCacheKey};
