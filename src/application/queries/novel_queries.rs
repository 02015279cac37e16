//! Novel Queries

use uuid::Uuid;

use crate::application::ports::{NovelFilter, NovelSort};
use crate::domain::novel::NovelSortField;
use crate::domain::PageRequest;

/// 获取小说详情查询
#[derive(Debug, Clone)]
pub struct GetNovel {
    pub novel_id: Uuid,
}

/// 分页列出小说查询
#[derive(Debug, Clone, Default)]
pub struct ListNovels {
    pub filter: NovelFilter,
    pub sort: NovelSort,
    pub page: PageRequest,
}

/// 发现页预设排序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    /// 阅读数降序
    Popular,
    /// 平均评分降序
    TopRated,
    /// 创建时间降序
    Recent,
    /// 更新时间降序
    RecentlyUpdated,
}

impl Discovery {
    pub fn sort(&self) -> NovelSort {
        let field = match self {
            Discovery::Popular => NovelSortField::TotalViews,
            Discovery::TopRated => NovelSortField::AverageRating,
            Discovery::Recent => NovelSortField::CreatedAt,
            Discovery::RecentlyUpdated => NovelSortField::UpdatedAt,
        };
        NovelSort::desc(field)
    }
}

impl ListNovels {
    /// 发现页：沿用调用方的分类/标签过滤，排序固定
    pub fn discover(discovery: Discovery, filter: NovelFilter, page: PageRequest) -> Self {
        Self {
            filter,
            sort: discovery.sort(),
            page,
        }
    }

    /// 作者作品列表，`author_id` 总是覆盖过滤条件中的同名字段
    pub fn by_author(author_id: Uuid, filter: NovelFilter, page: PageRequest) -> Self {
        Self {
            filter: NovelFilter {
                author_id: Some(author_id),
                ..filter
            },
            sort: NovelSort::default(),
            page,
        }
    }

    pub fn search(
        term: impl Into<String>,
        filter: NovelFilter,
        sort: NovelSort,
        page: PageRequest,
    ) -> Self {
        Self {
            filter: NovelFilter {
                search: Some(term.into()),
                ..filter
            },
            sort,
            page,
        }
    }
}
