//! Storage layer abstraction trait definition

mod option_cache;

pub use option_cache::{InMemoryOptionCache, OptionCache, OptionCacheKey};
