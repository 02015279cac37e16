//! Taxonomy Commands

/// 创建分类命令
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    /// 缺省时由名称生成
    pub slug: Option<String>,
    pub description: Option<String>,
}

/// 创建标签命令
#[derive(Debug, Clone)]
pub struct CreateTag {
    pub name: String,
    /// 缺省时由名称生成
    pub slug: Option<String>,
}
