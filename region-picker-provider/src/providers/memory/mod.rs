//! In-memory region source
//!
//! Serves options from a JSON dataset keyed by level:
//!
//! ```json
//! {
//!   "province": [{ "id": "31", "name": "DKI Jakarta" }],
//!   "regency":  [{ "id": "3171", "name": "Kota Jakarta Selatan", "parent_id": "31" }]
//! }
//! ```
//!
//! A small Indonesian sample is bundled so the picker works offline.

mod provider;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ProviderError, Result};
use crate::types::{HierarchyLevel, RegionOption};

const BUNDLED_DATASET: &str = include_str!("sample_regions.json");

#[derive(Debug, Clone, Deserialize)]
struct DatasetEntry {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    name: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    parent_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Dataset {
    #[serde(default)]
    province: Vec<DatasetEntry>,
    #[serde(default)]
    regency: Vec<DatasetEntry>,
    #[serde(default)]
    district: Vec<DatasetEntry>,
    #[serde(default)]
    village: Vec<DatasetEntry>,
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    crate::providers::common::value_to_id(&value)
        .ok_or_else(|| Error::custom(format!("expected string or number id, got {value}")))
}

fn opt_string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(crate::providers::common::value_to_id))
}

/// Options of one level, with their parent ids.
#[derive(Debug, Default)]
struct LevelTable {
    /// 保持数据集中的原始顺序
    options: Vec<RegionOption>,
    parents: Vec<Option<String>>,
    by_id: HashMap<String, usize>,
}

impl LevelTable {
    fn build(entries: Vec<DatasetEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            // 重复 id 以首次出现为准
            if table.by_id.contains_key(&entry.id) {
                log::warn!("[memory] duplicate id {} ignored", entry.id);
                continue;
            }
            table.by_id.insert(entry.id.clone(), table.options.len());
            table.options.push(RegionOption::new(entry.id, entry.name.trim()));
            table.parents.push(entry.parent_id);
        }
        table
    }

    fn children_of<'a>(
        &'a self,
        parent_id: Option<&'a str>,
    ) -> impl Iterator<Item = &'a RegionOption> + 'a {
        self.options
            .iter()
            .zip(&self.parents)
            .filter(move |(_, parent)| match parent_id {
                Some(wanted) => parent.as_deref() == Some(wanted),
                None => true,
            })
            .map(|(option, _)| option)
    }
}

/// In-memory region source
pub struct MemoryRegionSource {
    /// 按层级深度排列
    tables: [LevelTable; 4],
}

impl MemoryRegionSource {
    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset =
            serde_json::from_str(json).map_err(|e| ProviderError::ParseError {
                provider: "memory".to_string(),
                detail: e.to_string(),
            })?;
        let source = Self {
            tables: [
                LevelTable::build(dataset.province),
                LevelTable::build(dataset.regency),
                LevelTable::build(dataset.district),
                LevelTable::build(dataset.village),
            ],
        };
        log::debug!(
            "[memory] dataset loaded: {}",
            HierarchyLevel::ALL
                .iter()
                .map(|level| format!("{level}={}", source.table(*level).options.len()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(source)
    }

    /// Load a dataset file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ProviderError::InvalidParameter {
            provider: "memory".to_string(),
            param: "dataset_path".to_string(),
            detail: format!("{}: {e}", path.display()),
        })?;
        Self::from_json(&json)
    }

    /// The bundled Indonesian sample dataset.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATASET)
    }

    fn table(&self, level: HierarchyLevel) -> &LevelTable {
        &self.tables[level.depth()]
    }

    /// Number of options stored for `level`.
    pub fn len(&self, level: HierarchyLevel) -> usize {
        self.table(level).options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(|t| t.options.is_empty())
    }
}
