// DC Inside 画廊抓取后端库
//
// 本库提供画廊抓取的核心功能，包括：
// - API 路由
// - 列表页抓取与 HTML 提取
// - 结果缓存

pub mod api;
pub mod config;
pub mod external;
pub mod models;
