//! Novel Commands

use uuid::Uuid;

use crate::application::ports::NovelPatch;
use crate::domain::novel::NovelStatus;

/// 创建小说命令
#[derive(Debug, Clone)]
pub struct CreateNovel {
    pub title: String,
    pub author_id: Uuid,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    /// 缺省为 "vi"
    pub language: Option<String>,
    /// 缺省为 ongoing
    pub status: Option<NovelStatus>,
    pub category_ids: Vec<Uuid>,
    pub tag_ids: Vec<Uuid>,
}

/// 更新小说命令
///
/// 提供的分类/标签列表会整体替换旧关联
#[derive(Debug, Clone)]
pub struct UpdateNovel {
    pub novel_id: Uuid,
    pub patch: NovelPatch,
    pub category_ids: Option<Vec<Uuid>>,
    pub tag_ids: Option<Vec<Uuid>>,
}

/// 删除小说命令（软删除）
#[derive(Debug, Clone)]
pub struct DeleteNovel {
    pub novel_id: Uuid,
}

/// 阅读数加一
#[derive(Debug, Clone)]
pub struct IncrementNovelViews {
    pub novel_id: Uuid,
}

/// 重新统计章节数
#[derive(Debug, Clone)]
pub struct RefreshChapterCount {
    pub novel_id: Uuid,
}

/// 写入外部计算的平均评分
#[derive(Debug, Clone)]
pub struct UpdateNovelRating {
    pub novel_id: Uuid,
    pub rating: f64,
}
