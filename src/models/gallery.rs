use serde::{Deserialize, Serialize};

/// 画廊基本信息
///
/// 从列表页提取，仅详细查询时填充 `details`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryInfo {
    pub title: Option<String>,
    pub managers: Vec<String>,
    /// 页面原文，不做日期解析
    pub creation_date: Option<String>,
    #[serde(flatten)]
    pub details: Option<GalleryDetails>,
}

/// 详细查询专用字段
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryDetails {
    pub description: Option<String>,
    pub related_galleries: Vec<RelatedGallery>,
}

/// 相关画廊链接
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedGallery {
    pub name: String,
    pub url: Option<String>,
}

impl GalleryInfo {
    pub fn is_detailed(&self) -> bool {
        self.details.is_some()
    }
}
