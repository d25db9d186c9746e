//! 选择状态相关类型定义

use serde::{Deserialize, Serialize};

use region_picker_provider::{HierarchyLevel, RegionOption};

use crate::error::{CoreError, CoreResult};

/// 单个层级的选择状态
///
/// `selected_id` 只能由选中选项设置；自由输入永远不会设置它。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// 输入框中的文本
    pub query: String,
    /// 最近一次防抖落定（或由选中写入）的查询文本
    pub committed_query: String,
    /// 已选中选项的 ID
    pub selected_id: Option<String>,
    /// 结果面板是否打开
    pub is_open: bool,
}

/// 某一层级已提交的选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRegion {
    pub level: HierarchyLevel,
    pub option: RegionOption,
}

/// 表单当前的已提交选择，从根层级开始连续排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSelection {
    pub regions: Vec<SelectedRegion>,
}

impl FormSelection {
    /// 指定层级已提交的 ID
    pub fn id(&self, level: HierarchyLevel) -> Option<&str> {
        self.regions
            .iter()
            .find(|r| r.level == level)
            .map(|r| r.option.id.as_str())
    }

    /// 四个层级是否全部提交
    pub fn is_complete(&self) -> bool {
        self.regions.len() == HierarchyLevel::ALL.len()
    }

    /// 第一个未提交的层级
    pub fn first_missing(&self) -> Option<HierarchyLevel> {
        HierarchyLevel::ALL.get(self.regions.len()).copied()
    }

    /// 叶子在前的地址路径，如 `Cipedak, Jagakarsa, Kota Jakarta Selatan, DKI Jakarta`
    pub fn display_path(&self) -> String {
        self.regions
            .iter()
            .rev()
            .map(|r| r.option.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// 提交前校验：四个层级必须全部选中
    pub fn validate(&self) -> CoreResult<StoredRegionIds> {
        match self.first_missing() {
            Some(level) => Err(CoreError::IncompleteSelection(level)),
            None => Ok(self.to_stored()),
        }
    }

    /// 转换为可持久化的 ID 集合
    pub fn to_stored(&self) -> StoredRegionIds {
        StoredRegionIds {
            province_id: self.id(HierarchyLevel::Province).map(str::to_string),
            regency_id: self.id(HierarchyLevel::Regency).map(str::to_string),
            district_id: self.id(HierarchyLevel::District).map(str::to_string),
            village_id: self.id(HierarchyLevel::Village).map(str::to_string),
        }
    }
}

/// 已保存记录中的地区 ID（编辑已有记录时用于预填表单）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRegionIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regency_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village_id: Option<String>,
}

impl StoredRegionIds {
    /// 指定层级的 ID
    pub fn get(&self, level: HierarchyLevel) -> Option<&str> {
        match level {
            HierarchyLevel::Province => self.province_id.as_deref(),
            HierarchyLevel::Regency => self.regency_id.as_deref(),
            HierarchyLevel::District => self.district_id.as_deref(),
            HierarchyLevel::Village => self.village_id.as_deref(),
        }
    }

    /// 从根开始连续存在的 `(层级, ID)`；遇到第一个空缺即停止
    pub fn chain(&self) -> Vec<(HierarchyLevel, String)> {
        HierarchyLevel::ALL
            .iter()
            .map_while(|level| {
                self.get(*level)
                    .filter(|id| !id.is_empty())
                    .map(|id| (*level, id.to_string()))
            })
            .collect()
    }
}
