use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

// ============ Region Types ============

/// A selectable entity at one hierarchy level (province, regency, district or village).
///
/// Options are immutable once fetched. Identity is [`id`](Self::id); two options with
/// the same id are the same region even if their display names differ in case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionOption {
    /// Source-specific identifier (BPS code for the bundled dataset).
    pub id: String,
    /// Display name (e.g., `"DKI Jakarta"`).
    pub name: String,
}

impl RegionOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Case-insensitive substring match of `query` against [`name`](Self::name).
    ///
    /// An empty (or whitespace-only) query matches every option.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim();
        needle.is_empty() || self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Administrative hierarchy level, totally ordered from the root.
///
/// `Province` is the root; every other level has exactly one parent level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyLevel {
    /// Provinsi.
    Province,
    /// Kabupaten / Kota.
    Regency,
    /// Kecamatan.
    District,
    /// Kelurahan / Desa.
    Village,
}

impl HierarchyLevel {
    /// All levels, root first.
    pub const ALL: [Self; 4] = [Self::Province, Self::Regency, Self::District, Self::Village];

    /// Zero-based depth (`Province` = 0).
    pub fn depth(self) -> usize {
        match self {
            Self::Province => 0,
            Self::Regency => 1,
            Self::District => 2,
            Self::Village => 3,
        }
    }

    pub fn is_root(self) -> bool {
        self == Self::Province
    }

    /// Parent level, `None` for the root.
    pub fn parent(self) -> Option<Self> {
        self.depth().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Child level, `None` for the leaf.
    pub fn child(self) -> Option<Self> {
        Self::ALL.get(self.depth() + 1).copied()
    }

    /// Every level strictly below this one, nearest first.
    pub fn descendants(self) -> &'static [Self] {
        &Self::ALL[self.depth() + 1..]
    }

    /// Every level strictly above this one, root first.
    pub fn ancestors(self) -> &'static [Self] {
        &Self::ALL[..self.depth()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Province => "province",
            Self::Regency => "regency",
            Self::District => "district",
            Self::Village => "village",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_label_field() -> String {
    "name".to_string()
}

/// Describes how one hierarchy level is served by a list endpoint.
///
/// This is the single parameterization of the cascading selector: the same
/// component is instantiated once per level with a different `LevelSpec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSpec {
    /// Which level this spec describes.
    pub level: HierarchyLevel,
    /// Resource path relative to the API base URL (e.g., `"regencies"`).
    pub endpoint: String,
    /// Query parameter carrying the parent id (e.g., `"province_id"`). `None` for the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_field: Option<String>,
    /// JSON field holding the display label of each item.
    #[serde(default = "default_label_field")]
    pub label_field: String,
}

impl LevelSpec {
    pub fn new(level: HierarchyLevel, endpoint: impl Into<String>) -> Self {
        Self {
            level,
            endpoint: endpoint.into(),
            parent_field: None,
            label_field: default_label_field(),
        }
    }

    #[must_use]
    pub fn with_parent_field(mut self, field: impl Into<String>) -> Self {
        self.parent_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_label_field(mut self, field: impl Into<String>) -> Self {
        self.label_field = field.into();
        self
    }

    /// Default endpoint layout of the region API.
    pub fn default_for(level: HierarchyLevel) -> Self {
        match level {
            HierarchyLevel::Province => Self::new(level, "provinces"),
            HierarchyLevel::Regency => {
                Self::new(level, "regencies").with_parent_field("province_id")
            }
            HierarchyLevel::District => {
                Self::new(level, "districts").with_parent_field("regency_id")
            }
            HierarchyLevel::Village => {
                Self::new(level, "villages").with_parent_field("district_id")
            }
        }
    }

    /// Default specs for every level, root first.
    pub fn default_chain() -> Vec<Self> {
        HierarchyLevel::ALL
            .iter()
            .map(|level| Self::default_for(*level))
            .collect()
    }
}

// ============ Pagination ============

/// Default page size used by the selector (the list endpoints cap at 100).
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Query parameters for option listing.
///
/// Pages are 1-indexed. `search` is sent verbatim (it may be empty);
/// `parent_id` scopes non-root levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionQuery {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Free-text search, matched case-insensitively against option names.
    pub search: String,
    /// Parent selection id for non-root levels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Default for OptionQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            parent_id: None,
        }
    }
}

impl OptionQuery {
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent_id: Option<String>) -> Self {
        self.parent_id = parent_id;
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    /// - `search` and `parent_id` are preserved as-is
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size),
            search: self.search.clone(),
            parent_id: self.parent_id.clone(),
        }
    }
}

/// A paginated response wrapper.
///
/// The selector only consumes [`items`](Self::items); pagination metadata is kept for
/// callers that want to page further.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, computing [`has_more`](Self::has_more) from the total.
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32) -> Self {
        let has_more = page.saturating_mul(page_size) < total_count;
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

// ============ Request Context ============

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Ambient request context attached to every REST call.
///
/// Built once and handed to the REST source at construction; nothing reads
/// session state from globals.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// API base URL, e.g. `https://api.example.org/api/v1`.
    pub base_url: String,
    /// Bearer token sent as `Authorization: Bearer <token>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    /// Tenant identifier sent as `X-Tenant` for multi-tenant backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// Whole-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// TCP connect timeout.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Retries for transient failures. `0` disables retry: a failed fetch waits for the next keystroke.
    #[serde(default)]
    pub max_retries: u32,
}

impl RequestContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            tenant: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_retries: 0,
        }
    }

    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Join `path` onto the base URL with exactly one slash between them.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("base_url", &self.base_url)
            .field("auth_token", &self.auth_token.as_deref().map(mask_secret))
            .field("tenant", &self.tenant)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

// ============ Source Types ============

/// Identifies which region source implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// REST list endpoints. Requires feature `rest`.
    #[cfg(feature = "rest")]
    Rest,
    /// Bundled or file-backed in-memory dataset. Requires feature `memory`.
    #[cfg(feature = "memory")]
    Memory,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "rest")]
            Self::Rest => write!(f, "rest"),
            #[cfg(feature = "memory")]
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Configuration needed to build a region source.
///
/// Serialized as a tagged enum with `"source"` as the tag:
///
/// ```json
/// { "source": "rest", "api": { "baseUrl": "https://api.example.org" } }
/// { "source": "memory" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum SourceConfig {
    /// REST list endpoints. Requires feature `rest`.
    #[cfg(feature = "rest")]
    Rest {
        /// Base URL, auth token and timeouts.
        api: RequestContext,
        /// Per-level endpoint layout.
        #[serde(default = "LevelSpec::default_chain")]
        levels: Vec<LevelSpec>,
    },
    /// In-memory dataset. Requires feature `memory`.
    #[cfg(feature = "memory")]
    Memory {
        /// JSON dataset file; the bundled sample is used when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dataset_path: Option<std::path::PathBuf>,
    },
}

impl SourceConfig {
    /// Returns the [`SourceType`] corresponding to this configuration.
    pub fn source_type(&self) -> SourceType {
        match self {
            #[cfg(feature = "rest")]
            Self::Rest { .. } => SourceType::Rest,
            #[cfg(feature = "memory")]
            Self::Memory { .. } => SourceType::Memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ HierarchyLevel ============

    #[test]
    fn level_parent_and_child() {
        assert_eq!(HierarchyLevel::Province.parent(), None);
        assert_eq!(
            HierarchyLevel::Regency.parent(),
            Some(HierarchyLevel::Province)
        );
        assert_eq!(
            HierarchyLevel::District.child(),
            Some(HierarchyLevel::Village)
        );
        assert_eq!(HierarchyLevel::Village.child(), None);
    }

    #[test]
    fn level_descendants_nearest_first() {
        assert_eq!(
            HierarchyLevel::Regency.descendants(),
            &[HierarchyLevel::District, HierarchyLevel::Village]
        );
        assert!(HierarchyLevel::Village.descendants().is_empty());
        assert_eq!(HierarchyLevel::Province.descendants().len(), 3);
    }

    #[test]
    fn level_ancestors_root_first() {
        assert_eq!(
            HierarchyLevel::District.ancestors(),
            &[HierarchyLevel::Province, HierarchyLevel::Regency]
        );
        assert!(HierarchyLevel::Province.ancestors().is_empty());
    }

    #[test]
    fn level_total_order() {
        assert!(HierarchyLevel::Province < HierarchyLevel::Regency);
        assert!(HierarchyLevel::District < HierarchyLevel::Village);
    }

    #[test]
    fn level_serde_lowercase() {
        let json = serde_json::to_string(&HierarchyLevel::Regency);
        assert!(
            matches!(json.as_deref(), Ok("\"regency\"")),
            "unexpected: {json:?}"
        );
    }

    // ============ RegionOption ============

    #[test]
    fn option_matches_case_insensitive_substring() {
        let opt = RegionOption::new("1", "DKI Jakarta");
        assert!(opt.matches("ja"));
        assert!(opt.matches("JAK"));
        assert!(opt.matches("dki j"));
        assert!(!opt.matches("bandung"));
    }

    #[test]
    fn option_empty_query_matches_all() {
        let opt = RegionOption::new("1", "Bali");
        assert!(opt.matches(""));
        assert!(opt.matches("   "));
    }

    // ============ LevelSpec ============

    #[test]
    fn default_chain_parent_fields() {
        let chain = LevelSpec::default_chain();
        assert_eq!(chain.len(), 4);
        assert_eq!(chain[0].parent_field, None);
        assert_eq!(chain[1].parent_field.as_deref(), Some("province_id"));
        assert_eq!(chain[2].parent_field.as_deref(), Some("regency_id"));
        assert_eq!(chain[3].parent_field.as_deref(), Some("district_id"));
        assert!(chain.iter().all(|s| s.label_field == "name"));
    }

    #[test]
    fn level_spec_label_field_defaults_when_missing() {
        let json = r#"{"level":"village","endpoint":"desa","parentField":"kecamatan_id"}"#;
        let spec: Result<LevelSpec, _> = serde_json::from_str(json);
        assert!(
            matches!(&spec, Ok(s) if s.label_field == "name" && s.endpoint == "desa"),
            "unexpected: {spec:?}"
        );
    }

    // ============ OptionQuery ============

    #[test]
    fn option_query_validated_clamps() {
        let q = OptionQuery::search("ja").with_page(0, 1_000);
        let v = q.validated(100);
        assert_eq!(v.page, 1);
        assert_eq!(v.page_size, 100);
        assert_eq!(v.search, "ja");
    }

    #[test]
    fn option_query_default_page_size() {
        let q = OptionQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, DEFAULT_PAGE_SIZE);
        assert!(q.parent_id.is_none());
    }

    // ============ PaginatedResponse ============

    #[test]
    fn paginated_response_has_more() {
        let resp = PaginatedResponse::new(vec![1, 2, 3], 1, 3, 10);
        assert!(resp.has_more);
    }

    #[test]
    fn paginated_response_exact_boundary() {
        let resp = PaginatedResponse::new(vec![1, 2, 3], 1, 3, 3);
        assert!(!resp.has_more);
    }

    // ============ RequestContext ============

    #[test]
    fn endpoint_url_joins_single_slash() {
        let ctx = RequestContext::new("https://api.example.org/v1/");
        assert_eq!(
            ctx.endpoint_url("/provinces"),
            "https://api.example.org/v1/provinces"
        );
        assert_eq!(
            ctx.endpoint_url("regencies"),
            "https://api.example.org/v1/regencies"
        );
    }

    #[test]
    fn debug_masks_auth_token() {
        let ctx = RequestContext::new("https://x").with_auth_token("super-secret-token");
        let dbg = format!("{ctx:?}");
        assert!(!dbg.contains("super-secret-token"), "token leaked: {dbg}");
    }

    #[test]
    fn request_context_defaults_from_json() {
        let ctx: Result<RequestContext, _> = serde_json::from_str(r#"{"baseUrl":"https://x"}"#);
        assert!(
            matches!(&ctx, Ok(c) if c.timeout_secs == 30 && c.max_retries == 0 && c.auth_token.is_none()),
            "unexpected: {ctx:?}"
        );
    }

    // ============ SourceConfig ============

    #[cfg(feature = "rest")]
    #[test]
    fn source_config_rest_defaults_levels() {
        let json = r#"{"source":"rest","api":{"baseUrl":"https://x"}}"#;
        let cfg: Result<SourceConfig, _> = serde_json::from_str(json);
        assert!(
            matches!(&cfg, Ok(SourceConfig::Rest { levels, .. }) if levels.len() == 4),
            "unexpected: {cfg:?}"
        );
    }

    #[cfg(feature = "memory")]
    #[test]
    fn source_config_memory_type() {
        let cfg: Result<SourceConfig, _> = serde_json::from_str(r#"{"source":"memory"}"#);
        assert!(
            matches!(&cfg, Ok(c) if c.source_type() == SourceType::Memory),
            "unexpected: {cfg:?}"
        );
    }
}
