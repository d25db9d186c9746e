//! Option cache abstract Trait

use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use region_picker_provider::{HierarchyLevel, RegionOption};

use crate::types::FetchRequest;

/// Cache key of one option list
///
/// Two requests with the same key are served from the cache without network I/O.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionCacheKey {
    pub level: HierarchyLevel,
    /// Source endpoint backing the level
    pub endpoint: String,
    pub query: String,
    pub parent_id: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl OptionCacheKey {
    pub fn for_request(endpoint: impl Into<String>, request: &FetchRequest) -> Self {
        Self {
            level: request.level,
            endpoint: endpoint.into(),
            query: request.query.clone(),
            parent_id: request.parent_id.clone(),
            page: request.page,
            page_size: request.page_size,
        }
    }
}

/// Option Cache Trait
///
/// Stores successful option lists only; failures are never cached.
/// Provides a default memory implementation of `InMemoryOptionCache`.
#[async_trait]
pub trait OptionCache: Send + Sync {
    /// Get a cached option list
    async fn get(&self, key: &OptionCacheKey) -> Option<Vec<RegionOption>>;

    /// Store an option list
    async fn put(&self, key: OptionCacheKey, options: Vec<RegionOption>);

    /// Drop every entry of `level`, returning how many were removed
    async fn invalidate_level(&self, level: HierarchyLevel) -> usize;

    /// Drop every entry
    async fn clear(&self);

    /// Number of cached lists
    async fn len(&self) -> usize;

    /// Whether the cache is empty
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// In-memory option cache
///
/// Default implementation, shared between fetch tasks. Holds at most
/// `capacity` lists; the least recently used one is evicted first.
#[derive(Clone)]
pub struct InMemoryOptionCache {
    /// 按最近使用排序，末尾最新
    entries: Arc<RwLock<IndexMap<OptionCacheKey, Vec<RegionOption>>>>,
    capacity: usize,
}

impl InMemoryOptionCache {
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Create a new memory cache
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` lists (at least one)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(IndexMap::new())),
            capacity: capacity.max(1),
        }
    }
}

impl Default for InMemoryOptionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OptionCache for InMemoryOptionCache {
    async fn get(&self, key: &OptionCacheKey) -> Option<Vec<RegionOption>> {
        // 命中时移到末尾，因此需要写锁
        let mut entries = self.entries.write().await;
        let index = entries.get_index_of(key)?;
        let last = entries.len() - 1;
        entries.move_index(index, last);
        entries.get_index(last).map(|(_, options)| options.clone())
    }

    async fn put(&self, key: OptionCacheKey, options: Vec<RegionOption>) {
        let mut entries = self.entries.write().await;
        entries.shift_remove(&key);
        entries.insert(key, options);
        while entries.len() > self.capacity {
            if let Some((evicted, _)) = entries.shift_remove_index(0) {
                log::debug!("[cache] evicted {} {:?}", evicted.level, evicted.query);
            }
        }
    }

    async fn invalidate_level(&self, level: HierarchyLevel) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| key.level != level);
        before - entries.len()
    }

    async fn clear(&self) {
        self.entries.write().await.clear();
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
