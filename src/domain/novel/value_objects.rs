//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};

/// 新建小说的默认语言
pub const DEFAULT_LANGUAGE: &str = "vi";

/// 小说连载状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NovelStatus {
    #[default]
    Ongoing,
    Completed,
    Hiatus,
    Dropped,
}

impl NovelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NovelStatus::Ongoing => "ongoing",
            NovelStatus::Completed => "completed",
            NovelStatus::Hiatus => "hiatus",
            NovelStatus::Dropped => "dropped",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ongoing" => Some(NovelStatus::Ongoing),
            "completed" => Some(NovelStatus::Completed),
            "hiatus" => Some(NovelStatus::Hiatus),
            "dropped" => Some(NovelStatus::Dropped),
            _ => None,
        }
    }
}

/// 小说列表排序字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NovelSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    AverageRating,
    TotalViews,
}

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}
