//! REST region source
//!
//! Talks to list endpoints of the form
//! `GET {base}/{endpoint}?page=1&paginate=100&search=ja&province_id=31`
//! wrapped in a `{ code, message, data: { data: [...], current_page, ... } }` envelope.

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::{HierarchyLevel, LevelSpec, RequestContext};

pub(crate) use types::{ApiEnvelope, PageData};

/// 列表接口单页最大记录数
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

/// REST region source
pub struct RestRegionSource {
    pub(crate) client: Client,
    pub(crate) context: RequestContext,
    /// 按层级深度排列，长度恒为 4
    pub(crate) levels: Vec<LevelSpec>,
}

impl RestRegionSource {
    /// Build a source for `levels`; levels missing from the list fall back to
    /// [`LevelSpec::default_for`].
    pub fn new(context: RequestContext, levels: Vec<LevelSpec>) -> Result<Self> {
        let client = create_http_client(
            "rest",
            context.connect_timeout_secs,
            context.timeout_secs,
        )?;
        let mut ordered: Vec<LevelSpec> = HierarchyLevel::ALL
            .iter()
            .map(|level| LevelSpec::default_for(*level))
            .collect();
        for spec in levels {
            let depth = spec.level.depth();
            ordered[depth] = spec;
        }
        log::debug!("[rest] source created: {context:?}");
        Ok(Self {
            client,
            context,
            levels: ordered,
        })
    }

    /// Endpoint layout currently in use for `level`.
    pub fn level_spec(&self, level: HierarchyLevel) -> &LevelSpec {
        &self.levels[level.depth()]
    }
}
